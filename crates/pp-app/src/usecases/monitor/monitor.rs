use std::sync::Arc;

use anyhow::{Context, Result};
use pp_core::clipboard::{ClassificationResult, ExtractionResult, TextEligibilityPolicyV1, TextExtractor};
use pp_core::ports::{ClipboardTickHandler, SettingsPort, SystemClipboardPort};
use pp_core::ChangeCount;
use tokio::sync::Mutex;
use tracing::{debug, info, info_span, warn, Instrument};

use super::state::{ProcessOutcome, TickOutcome};

/// Clipboard monitor use case.
///
/// ## Behavior / 行为
/// - A tick reads only the change count; an unchanged count ends the tick
///   without reading any entry.
/// - A changed count is recorded before processing, so a pass that aborts
///   (disabled, skipped, ineligible) is not retried for the same generation.
/// - The clipboard is written only for an eligible snapshot with at least one
///   converted entry; the first converted entry in order wins.
/// - After its own write the monitor records the post-write count, so the
///   next tick sees no change.
///
/// The recorded count and the compare/write sequence share one async mutex;
/// concurrent callers are serialized.
pub struct ClipboardMonitor {
    clipboard: Arc<dyn SystemClipboardPort>,
    settings: Arc<dyn SettingsPort>,
    policy: TextEligibilityPolicyV1,
    extractor: TextExtractor,
    recorded: Mutex<Option<ChangeCount>>,
}

impl ClipboardMonitor {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        settings: Arc<dyn SettingsPort>,
        policy: TextEligibilityPolicyV1,
        extractor: TextExtractor,
    ) -> Self {
        Self {
            clipboard,
            settings,
            policy,
            extractor,
            recorded: Mutex::new(None),
        }
    }

    pub async fn recorded_change_count(&self) -> Option<ChangeCount> {
        *self.recorded.lock().await
    }

    /// Record the current generation without processing it.
    ///
    /// Content present before the monitor starts is never cleaned automatically.
    pub async fn baseline(&self) -> Result<ChangeCount> {
        let mut recorded = self.recorded.lock().await;
        let current = self
            .clipboard
            .change_count()
            .context("read clipboard change count")?;
        *recorded = Some(current);
        info!(change_count = current.value(), "monitor baseline recorded");
        Ok(current)
    }

    pub async fn tick(&self) -> Result<TickOutcome> {
        let mut recorded = self.recorded.lock().await;
        let current = self
            .clipboard
            .change_count()
            .context("read clipboard change count")?;

        if *recorded == Some(current) {
            return Ok(TickOutcome::NoChange);
        }

        let span = info_span!(
            "usecase.monitor.tick",
            previous = recorded.map(|c| c.value()),
            change_count = current.value()
        );
        async {
            *recorded = Some(current);
            let outcome = self.process(&mut recorded, false).await?;
            info!(?outcome, "clipboard change processed");
            Ok(TickOutcome::Processed(outcome))
        }
        .instrument(span)
        .await
    }

    /// Manual "clean now": processes the current clipboard regardless of the
    /// change count and of marker types. A disabled monitor still aborts.
    pub async fn force_clean(&self) -> Result<ProcessOutcome> {
        let span = info_span!("usecase.monitor.force_clean");
        async {
            let mut recorded = self.recorded.lock().await;
            let outcome = self.process(&mut recorded, true).await?;
            info!(?outcome, "manual clean finished");
            Ok(outcome)
        }
        .instrument(span)
        .await
    }

    async fn cleaning_enabled(&self) -> bool {
        match self.settings.load().await {
            Ok(settings) => settings.general.enabled,
            Err(e) => {
                warn!(error = %e, "settings unavailable, leaving clipboard untouched");
                false
            }
        }
    }

    async fn process(
        &self,
        recorded: &mut Option<ChangeCount>,
        force: bool,
    ) -> Result<ProcessOutcome> {
        if !self.cleaning_enabled().await {
            debug!("cleaning disabled");
            return Ok(ProcessOutcome::Disabled);
        }

        let snapshot = self
            .clipboard
            .read_snapshot()
            .context("read clipboard snapshot")?;
        // the generation actually inspected
        *recorded = Some(snapshot.change_count);

        match self.policy.classify(&snapshot.entries, force) {
            ClassificationResult::Eligible => {}
            ClassificationResult::Ineligible => return Ok(ProcessOutcome::Ineligible),
            ClassificationResult::Skip(reason) => return Ok(ProcessOutcome::Skipped(reason)),
        }

        for (entry_index, entry) in snapshot.entries.iter().enumerate() {
            let ExtractionResult::Converted(text) = self.extractor.extract(entry) else {
                continue;
            };

            self.clipboard
                .replace_with_plain_text(&text)
                .context("replace clipboard with plain text")?;
            let after = self
                .clipboard
                .change_count()
                .context("read clipboard change count after write")?;
            *recorded = Some(after);

            info!(
                entry_index,
                chars = text.chars().count(),
                change_count = after.value(),
                "clipboard replaced with plain text"
            );
            return Ok(ProcessOutcome::Replaced {
                entry_index,
                change_count: after,
            });
        }

        Ok(ProcessOutcome::NothingConverted)
    }
}

#[async_trait::async_trait]
impl ClipboardTickHandler for ClipboardMonitor {
    async fn on_start(&self) -> Result<()> {
        self.baseline().await.map(|_| ())
    }

    async fn on_tick(&self) -> Result<()> {
        self.tick().await.map(|_| ())
    }

    async fn on_clean_requested(&self) -> Result<()> {
        self.force_clean().await.map(|_| ())
    }
}
