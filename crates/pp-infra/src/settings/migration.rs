use anyhow::{anyhow, Result};
use pp_core::ports::SettingsMigrationPort;
use pp_core::settings::model::{Settings, CURRENT_SCHEMA_VERSION};

/// Unversioned files predate the schema field; their layout already matches v1.
pub struct MigrationV0ToV1;

impl SettingsMigrationPort for MigrationV0ToV1 {
    fn from_version(&self) -> u32 {
        0
    }

    fn to_version(&self) -> u32 {
        1
    }

    fn migrate(&self, mut settings: Settings) -> Settings {
        settings.schema_version = 1;
        settings
    }
}

pub struct SettingsMigrator {
    migrations: Vec<Box<dyn SettingsMigrationPort>>,
}

impl Default for SettingsMigrator {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsMigrator {
    pub fn new() -> Self {
        Self {
            migrations: vec![
                Box::new(MigrationV0ToV1),
                // Box::new(MigrationV1ToV2),
            ],
        }
    }

    pub fn migrate_to_latest(&self, mut settings: Settings) -> Result<Settings> {
        while settings.schema_version < CURRENT_SCHEMA_VERSION {
            let current = settings.schema_version;

            let migration = self
                .migrations
                .iter()
                .find(|m| m.from_version() == current)
                .ok_or_else(|| anyhow!("no settings migration from version {current}"))?;

            tracing::info!(
                from = migration.from_version(),
                to = migration.to_version(),
                "migrating settings"
            );
            settings = migration.migrate(settings);
        }

        Ok(settings)
    }
}
