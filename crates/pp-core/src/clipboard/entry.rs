use serde::{Deserialize, Serialize};

use super::{Representation, TypeTag};

/// One item on the clipboard.
///
/// A copy may register several entries (e.g. multiple selected files); each entry
/// carries its own set of representations of the same content. Representation
/// order carries no meaning for classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardEntry {
    pub representations: Vec<Representation>,
}

impl ClipboardEntry {
    pub fn new(representations: Vec<Representation>) -> Self {
        Self { representations }
    }

    /// Entry holding a single UTF-8 plain-text representation.
    pub fn plain_text(text: &str) -> Self {
        Self::new(vec![Representation::new(
            TypeTag::utf8_plain_text(),
            text.as_bytes().to_vec(),
        )])
    }

    pub fn type_tags(&self) -> impl Iterator<Item = &TypeTag> {
        self.representations.iter().map(|r| &r.type_tag)
    }

    /// First marker tag on this entry, if any.
    pub fn marker(&self) -> Option<&TypeTag> {
        self.type_tags().find(|t| t.is_marker())
    }

    /// Whether the entry has at least one representation that is actual content.
    pub fn has_content(&self) -> bool {
        self.type_tags().any(|t| !t.is_marker_namespaced())
    }
}
