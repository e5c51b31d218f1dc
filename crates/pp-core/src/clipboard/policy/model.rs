use serde::{Deserialize, Serialize};

use crate::clipboard::TypeTag;

/// Whether a whole snapshot may be transformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "reason")]
pub enum ClassificationResult {
    /// Every representation of every entry is textual.
    Eligible,
    /// At least one representation is non-textual; the clipboard is left alone.
    Ineligible,
    Skip(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// A "do not touch" marker was present.
    Marker(TypeTag),
    /// Nothing to classify.
    Empty,
}
