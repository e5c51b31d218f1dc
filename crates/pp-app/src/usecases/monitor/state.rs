use pp_core::{ChangeCount, SkipReason};
use serde::Serialize;

/// Result of one timer tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TickOutcome {
    /// Change count equals the recorded one; no entry was read.
    NoChange,
    Processed(ProcessOutcome),
}

/// Result of one processing pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessOutcome {
    /// Cleaning is switched off (or its setting could not be read).
    Disabled,
    Skipped(SkipReason),
    Ineligible,
    /// Eligible, but no entry produced converted text.
    NothingConverted,
    Replaced {
        entry_index: usize,
        /// Generation recorded after the write.
        change_count: ChangeCount,
    },
}

impl ProcessOutcome {
    pub fn is_replaced(&self) -> bool {
        matches!(self, ProcessOutcome::Replaced { .. })
    }
}
