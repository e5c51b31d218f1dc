use super::model::*;

impl Default for GeneralSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: 250,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            general: GeneralSettings::default(),
            monitor: MonitorSettings::default(),
        }
    }
}
