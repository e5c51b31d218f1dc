use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{line_breaks::canonicalize_line_breaks, ClipboardEntry, Representation, TypeCategory, TypeResolver};
use crate::ports::RichTextDecoderPort;

/// Outcome of extracting plain text from one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionResult {
    /// No rich format decoded, but the entry already has a plain-text form.
    AlreadyPlain,
    /// Canonical plain text decoded from RTF or HTML.
    Converted(String),
    Unsupported,
}

/// Produces canonical plain text for a single entry.
///
/// Priority is RTF, then HTML, then the plain-text check. A decoder failure
/// (including a decode that yields no visible text) falls through to the next
/// format and is never surfaced to the caller.
#[derive(Clone)]
pub struct TextExtractor {
    resolver: TypeResolver,
    rtf: Arc<dyn RichTextDecoderPort>,
    html: Arc<dyn RichTextDecoderPort>,
}

impl TextExtractor {
    pub fn new(
        resolver: TypeResolver,
        rtf: Arc<dyn RichTextDecoderPort>,
        html: Arc<dyn RichTextDecoderPort>,
    ) -> Self {
        Self {
            resolver,
            rtf,
            html,
        }
    }

    pub fn extract(&self, entry: &ClipboardEntry) -> ExtractionResult {
        if let Some(text) = self.decode_first(entry, TypeCategory::Rtf, self.rtf.as_ref()) {
            return ExtractionResult::Converted(text);
        }
        if let Some(text) = self.decode_first(entry, TypeCategory::Html, self.html.as_ref()) {
            return ExtractionResult::Converted(text);
        }

        if self.first_of(entry, TypeCategory::PlainText).is_some() {
            ExtractionResult::AlreadyPlain
        } else {
            ExtractionResult::Unsupported
        }
    }

    fn first_of<'a>(
        &self,
        entry: &'a ClipboardEntry,
        category: TypeCategory,
    ) -> Option<&'a Representation> {
        entry
            .representations
            .iter()
            .filter(|r| !r.type_tag.is_marker_namespaced())
            .find(|r| self.resolver.resolve(&r.type_tag) == category)
    }

    fn decode_first(
        &self,
        entry: &ClipboardEntry,
        category: TypeCategory,
        decoder: &dyn RichTextDecoderPort,
    ) -> Option<String> {
        let rep = self.first_of(entry, category)?;
        match decoder.decode(&rep.bytes) {
            Ok(text) if !text.trim().is_empty() => Some(canonicalize_line_breaks(&text)),
            Ok(_) => {
                tracing::debug!(type_tag = %rep.type_tag, "decoded {} has no visible text", category);
                None
            }
            Err(err) => {
                tracing::debug!(type_tag = %rep.type_tag, error = %err, "decode failed, falling through");
                None
            }
        }
    }
}

impl std::fmt::Debug for TextExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextExtractor")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}
