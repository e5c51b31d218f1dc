//! Use case for describing the current clipboard without modifying it
//! 查看当前剪贴板内容（只读）

use std::sync::Arc;

use anyhow::{Context, Result};
use pp_core::clipboard::{ClassificationResult, TextEligibilityPolicyV1};
use pp_core::ports::SystemClipboardPort;
use pp_core::{ChangeCount, TypeCategory};
use serde::Serialize;
use tracing::{info_span, Instrument};

#[derive(Debug, Clone, Serialize)]
pub struct RepresentationReport {
    pub type_tag: String,
    pub category: TypeCategory,
    pub is_marker: bool,
    pub size_bytes: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryReport {
    pub representations: Vec<RepresentationReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClipboardReport {
    pub change_count: ChangeCount,
    pub observed_at_ms: i64,
    pub classification: ClassificationResult,
    pub entries: Vec<EntryReport>,
}

pub struct InspectClipboard {
    clipboard: Arc<dyn SystemClipboardPort>,
    policy: TextEligibilityPolicyV1,
}

impl InspectClipboard {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>, policy: TextEligibilityPolicyV1) -> Self {
        Self { clipboard, policy }
    }

    pub async fn execute(&self) -> Result<ClipboardReport> {
        let span = info_span!("usecase.inspect_clipboard.execute");

        async {
            let snapshot = self
                .clipboard
                .read_snapshot()
                .context("read clipboard snapshot")?;
            let resolver = self.policy.resolver();

            let entries = snapshot
                .entries
                .iter()
                .map(|entry| EntryReport {
                    representations: entry
                        .representations
                        .iter()
                        .map(|rep| RepresentationReport {
                            type_tag: rep.type_tag.to_string(),
                            category: resolver.resolve(&rep.type_tag),
                            is_marker: rep.is_marker(),
                            size_bytes: rep.size_bytes(),
                        })
                        .collect(),
                })
                .collect();

            Ok(ClipboardReport {
                change_count: snapshot.change_count,
                observed_at_ms: snapshot.observed_at_ms,
                classification: self.policy.classify(&snapshot.entries, false),
                entries,
            })
        }
        .instrument(span)
        .await
    }
}
