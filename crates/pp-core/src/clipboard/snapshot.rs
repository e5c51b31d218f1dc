use serde::{Deserialize, Serialize};

use super::{ChangeCount, ClipboardEntry};

/// Full clipboard contents of exactly one change-count generation.
///
/// Snapshots are re-read on every pass and never cached beyond one
/// classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardSnapshot {
    pub change_count: ChangeCount,
    pub observed_at_ms: i64,
    pub entries: Vec<ClipboardEntry>,
}

impl ClipboardSnapshot {
    pub fn new(change_count: ChangeCount, entries: Vec<ClipboardEntry>) -> Self {
        Self {
            change_count,
            observed_at_ms: chrono::Utc::now().timestamp_millis(),
            entries,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn representation_count(&self) -> usize {
        self.entries.iter().map(|e| e.representations.len()).sum()
    }

    /// 返回该快照中所有 representation 的总字节大小
    pub fn total_size_bytes(&self) -> i64 {
        self.entries
            .iter()
            .flat_map(|e| e.representations.iter())
            .map(|r| r.size_bytes())
            .sum()
    }
}
