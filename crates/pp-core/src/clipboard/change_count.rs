use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Clipboard generation counter.
///
/// The system increments it on every clipboard write from any process, so two
/// reads returning the same value observed the same clipboard generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChangeCount(pub i64);

impl ChangeCount {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl Display for ChangeCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
