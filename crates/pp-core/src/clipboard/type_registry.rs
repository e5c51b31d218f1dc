//! Type identifier → category resolution.
//!
//! Resolution order: structured lookup, then the static table, then `Other`.

use std::sync::Arc;

use super::{TypeCategory, TypeTag};
use crate::ports::TypeLookupPort;

/// Fixed textual table. Matched by exact string.
const STATIC_TABLE: &[(&str, TypeCategory)] = &[
    // plain
    ("public.utf8-plain-text", TypeCategory::PlainText),
    ("public.utf16-plain-text", TypeCategory::PlainText),
    ("public.utf16-external-plain-text", TypeCategory::PlainText),
    ("public.plain-text", TypeCategory::PlainText),
    ("public.text", TypeCategory::PlainText),
    ("NSStringPboardType", TypeCategory::PlainText),
    ("UTF8_STRING", TypeCategory::PlainText),
    ("STRING", TypeCategory::PlainText),
    ("TEXT", TypeCategory::PlainText),
    ("COMPOUND_TEXT", TypeCategory::PlainText),
    ("text/plain", TypeCategory::PlainText),
    ("text/plain;charset=utf-8", TypeCategory::PlainText),
    ("CF_UNICODETEXT", TypeCategory::PlainText),
    ("CF_TEXT", TypeCategory::PlainText),
    ("CF_OEMTEXT", TypeCategory::PlainText),
    ("text", TypeCategory::PlainText),
    // rtf
    ("public.rtf", TypeCategory::Rtf),
    ("NeXT Rich Text Format v1.0 pasteboard type", TypeCategory::Rtf),
    ("NSRTFPboardType", TypeCategory::Rtf),
    ("text/rtf", TypeCategory::Rtf),
    ("Rich Text Format", TypeCategory::Rtf),
    ("rtf", TypeCategory::Rtf),
    // html
    ("public.html", TypeCategory::Html),
    ("Apple HTML pasteboard type", TypeCategory::Html),
    ("NSHTMLPboardType", TypeCategory::Html),
    ("text/html", TypeCategory::Html),
    ("HTML Format", TypeCategory::Html),
    ("html", TypeCategory::Html),
    // url text
    ("public.url", TypeCategory::UrlText),
    ("public.url-name", TypeCategory::UrlText),
    ("Apple URL pasteboard type", TypeCategory::UrlText),
    ("text/x-moz-url", TypeCategory::UrlText),
    ("UniformResourceLocatorW", TypeCategory::UrlText),
    ("UniformResourceLocator", TypeCategory::UrlText),
];

/// Static-table lookup only.
pub fn static_category(tag: &str) -> Option<TypeCategory> {
    STATIC_TABLE
        .iter()
        .find(|(known, _)| *known == tag)
        .map(|(_, category)| *category)
}

/// UTI parent links, walked until a category root is reached.
const UTI_PARENTS: &[(&str, &str)] = &[
    ("public.utf8-plain-text", "public.plain-text"),
    ("public.utf16-plain-text", "public.plain-text"),
    ("public.utf16-external-plain-text", "public.plain-text"),
    ("public.plain-text", "public.text"),
    ("com.apple.traditional-mac-plain-text", "public.plain-text"),
    ("public.delimited-values-text", "public.text"),
    ("public.comma-separated-values-text", "public.delimited-values-text"),
    ("public.tab-separated-values-text", "public.delimited-values-text"),
    ("public.utf8-tab-separated-values-text", "public.tab-separated-values-text"),
    ("public.xml", "public.text"),
    ("public.json", "public.text"),
    ("public.yaml", "public.text"),
    ("net.daringfireball.markdown", "public.plain-text"),
    ("public.source-code", "public.plain-text"),
    ("public.script", "public.source-code"),
    ("public.shell-script", "public.script"),
    ("public.python-script", "public.script"),
    ("com.netscape.javascript-source", "public.script"),
    ("public.c-source", "public.source-code"),
    ("public.c-plus-plus-source", "public.source-code"),
    ("public.swift-source", "public.source-code"),
    ("public.url-name", "public.url"),
    ("public.xhtml", "public.html"),
    ("public.jpeg", "public.image"),
    ("public.png", "public.image"),
    ("public.tiff", "public.image"),
    ("com.compuserve.gif", "public.image"),
    ("com.microsoft.bmp", "public.image"),
    ("public.heic", "public.image"),
    ("public.svg-image", "public.image"),
    ("com.apple.icns", "public.image"),
    ("com.apple.pict", "public.image"),
    ("public.movie", "public.audiovisual-content"),
    ("public.audio", "public.audiovisual-content"),
    ("public.mpeg-4", "public.movie"),
    ("com.apple.quicktime-movie", "public.movie"),
    ("com.apple.rtfd", "com.apple.flat-rtfd"),
];

/// Roots that terminate the conformance walk.
const UTI_ROOTS: &[(&str, TypeCategory)] = &[
    ("public.text", TypeCategory::PlainText),
    ("public.rtf", TypeCategory::Rtf),
    ("public.html", TypeCategory::Html),
    ("public.url", TypeCategory::UrlText),
    ("public.image", TypeCategory::Other),
    ("public.audiovisual-content", TypeCategory::Other),
    ("public.file-url", TypeCategory::Other),
    ("com.apple.flat-rtfd", TypeCategory::Other),
    ("com.adobe.pdf", TypeCategory::Other),
    ("com.apple.webarchive", TypeCategory::Other),
    ("public.data", TypeCategory::Other),
];

/// Walks the conformance chain of `uti`, bounded by the table size.
fn conform_uti(uti: &str) -> Option<TypeCategory> {
    let mut current = uti;
    for _ in 0..=UTI_PARENTS.len() {
        if let Some((_, category)) = UTI_ROOTS
            .iter()
            .find(|(root, _)| root.eq_ignore_ascii_case(current))
        {
            return Some(*category);
        }
        current = UTI_PARENTS
            .iter()
            .find(|(child, _)| child.eq_ignore_ascii_case(current))
            .map(|(_, parent)| *parent)?;
    }
    None
}

fn lookup_mime(mime: &str) -> Option<TypeCategory> {
    let essence = mime.split(';').next().unwrap_or(mime).trim();
    let essence = essence.to_ascii_lowercase();
    let (top, sub) = essence.split_once('/')?;

    match (top, sub) {
        ("text", "plain") => Some(TypeCategory::PlainText),
        ("text", "html") | ("application", "xhtml+xml") => Some(TypeCategory::Html),
        ("text", "rtf") | ("application", "rtf") | ("text", "richtext") => {
            Some(TypeCategory::Rtf)
        }
        ("text", "x-moz-url") => Some(TypeCategory::UrlText),
        // uri-list is a file list, not text to clean
        ("text", "uri-list") => Some(TypeCategory::Other),
        ("image", _) | ("audio", _) | ("video", _) => Some(TypeCategory::Other),
        ("application", "pdf") | ("application", "octet-stream") => Some(TypeCategory::Other),
        ("text", _) | ("application", "json") | ("application", "xml") => {
            Some(TypeCategory::PlainText)
        }
        _ => None,
    }
}

/// Structured resolver for UTIs and MIME types.
#[derive(Debug, Default, Clone, Copy)]
pub struct UtiConformanceLookup;

impl UtiConformanceLookup {
    pub fn new() -> Self {
        Self
    }
}

impl TypeLookupPort for UtiConformanceLookup {
    fn lookup(&self, tag: &TypeTag) -> Option<TypeCategory> {
        let raw = tag.as_str().trim();
        if raw.is_empty() {
            return None;
        }
        if raw.contains('/') {
            return lookup_mime(raw);
        }
        // Dynamic UTIs carry no conformance information.
        if raw.starts_with("dyn.") || !raw.contains('.') {
            return None;
        }
        conform_uti(raw)
    }
}

#[derive(Clone)]
pub struct TypeResolver {
    structured: Arc<dyn TypeLookupPort>,
}

impl TypeResolver {
    pub fn new(structured: Arc<dyn TypeLookupPort>) -> Self {
        Self { structured }
    }

    pub fn resolve(&self, tag: &TypeTag) -> TypeCategory {
        self.structured
            .lookup(tag)
            .or_else(|| static_category(tag.as_str()))
            .unwrap_or(TypeCategory::Other)
    }
}

impl Default for TypeResolver {
    fn default() -> Self {
        Self::new(Arc::new(UtiConformanceLookup))
    }
}

impl std::fmt::Debug for TypeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeResolver").finish_non_exhaustive()
    }
}
