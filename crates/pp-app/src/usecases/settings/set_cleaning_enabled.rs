//! Use case for switching automatic cleaning on or off
//! 切换自动清理开关

use std::sync::Arc;

use anyhow::Result;
use pp_core::ports::SettingsPort;
use tracing::{info, info_span, Instrument};

/// Use case for updating the `enabled` flag.
///
/// ## Behavior / 行为
/// - Loads current settings so other fields are preserved
/// - Saves only when the value actually changes
/// - Returns whether anything was written
pub struct SetCleaningEnabled {
    settings: Arc<dyn SettingsPort>,
}

impl SetCleaningEnabled {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self, enabled: bool) -> Result<bool> {
        let span = info_span!("usecase.set_cleaning_enabled.execute", enabled);

        async {
            let mut settings = self.settings.load().await?;
            if settings.general.enabled == enabled {
                info!("cleaning toggle unchanged");
                return Ok(false);
            }

            let previous = settings.general.enabled;
            settings.general.enabled = enabled;
            self.settings.save(&settings).await?;

            info!(changed_fields = %format!("general.enabled: {previous} → {enabled}"), "settings updated");
            Ok(true)
        }
        .instrument(span)
        .await
    }
}
