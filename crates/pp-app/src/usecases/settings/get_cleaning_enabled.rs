//! Use case for reading the cleaning toggle
//! 读取自动清理开关

use std::sync::Arc;

use anyhow::Result;
use pp_core::ports::SettingsPort;
use tracing::{info_span, Instrument};

pub struct GetCleaningEnabled {
    settings: Arc<dyn SettingsPort>,
}

impl GetCleaningEnabled {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self) -> Result<bool> {
        let span = info_span!("usecase.get_cleaning_enabled.execute");
        async { Ok(self.settings.load().await?.general.enabled) }
            .instrument(span)
            .await
    }
}
