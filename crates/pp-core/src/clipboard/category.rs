use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic category a representation type tag resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    PlainText,
    Rtf,
    Html,
    UrlText,
    /// Anything non-textual: images, file references, archives, app-private data.
    Other,
}

impl TypeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeCategory::PlainText => "plain_text",
            TypeCategory::Rtf => "rtf",
            TypeCategory::Html => "html",
            TypeCategory::UrlText => "url_text",
            TypeCategory::Other => "other",
        }
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
