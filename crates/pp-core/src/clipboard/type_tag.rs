use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Namespace of the nspasteboard.org marker conventions.
///
/// Every tag in this namespace is metadata about the write, never content.
pub const MARKER_NAMESPACE: &str = "org.nspasteboard.";

/// Representation type identifier (UTI on macOS, MIME type or format name elsewhere).
///
/// Tags are compared by exact string match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeTag(pub String);

/// "Do not touch" markers set by password managers and clipboard tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Transient,
    Concealed,
    AutoGenerated,
}

impl TypeTag {
    pub const TRANSIENT: &'static str = "org.nspasteboard.TransientType";
    pub const CONCEALED: &'static str = "org.nspasteboard.ConcealedType";
    pub const AUTO_GENERATED: &'static str = "org.nspasteboard.AutoGeneratedType";
    /// KWallet / KeePassXC hint on KDE desktops.
    pub const KDE_PASSWORD_MANAGER_HINT: &'static str = "x-kde-passwordManagerHint";

    pub const UTF8_PLAIN_TEXT: &'static str = "public.utf8-plain-text";
    pub const RTF: &'static str = "public.rtf";
    pub const HTML: &'static str = "public.html";
    pub const URL: &'static str = "public.url";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn utf8_plain_text() -> Self {
        Self::new(Self::UTF8_PLAIN_TEXT)
    }

    pub fn concealed() -> Self {
        Self::new(Self::CONCEALED)
    }

    pub fn marker_kind(&self) -> Option<MarkerKind> {
        match self.0.as_str() {
            Self::TRANSIENT => Some(MarkerKind::Transient),
            Self::CONCEALED | Self::KDE_PASSWORD_MANAGER_HINT => Some(MarkerKind::Concealed),
            Self::AUTO_GENERATED => Some(MarkerKind::AutoGenerated),
            _ => None,
        }
    }

    pub fn is_marker(&self) -> bool {
        self.marker_kind().is_some()
    }

    /// Marker-namespaced tags never count as foreign content, whatever their suffix.
    pub fn is_marker_namespaced(&self) -> bool {
        self.0.starts_with(MARKER_NAMESPACE) || self.is_marker()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TypeTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TypeTag(s.to_string()))
    }
}

impl From<&str> for TypeTag {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TypeTag {
    fn from(s: String) -> Self {
        Self(s)
    }
}
