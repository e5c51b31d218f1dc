use anyhow::{Context, Result};
use async_trait::async_trait;
use pp_core::{
    ports::SettingsPort,
    settings::model::{Settings, CURRENT_SCHEMA_VERSION},
};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::settings::migration::SettingsMigrator;

/// JSON settings file with atomic replace-on-write.
///
/// ## Behavior / 行为
/// - Missing file: defaults are returned and nothing is written.
/// - Unversioned or older file: migrated to [`CURRENT_SCHEMA_VERSION`] and
///   written back once.
/// - Newer file: read as-is (unknown fields dropped), logged at `warn`, never
///   rewritten, so a downgrade does not clobber a newer schema.
/// - Unparseable file: an error; the file is left untouched.
pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    /// Repository for the settings file at `path`. Nothing is read yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use pp_infra::FileSettingsRepository;
    ///
    /// let repo = FileSettingsRepository::new("/tmp/plainpaste/settings.json");
    /// assert!(repo.path().ends_with("settings.json"));
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file path as given to [`FileSettingsRepository::new`].
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parent directory of the settings file; `None` for a bare root path.
    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    /// Creates every missing parent directory. No-op without a parent.
    ///
    /// Errors carry the context `create settings dir failed: <dir>`.
    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create settings dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Writes to a sibling `*.json.tmp`, then renames it over the target, so the
    /// target holds either the previous or the complete new contents.
    ///
    /// Each error's context names the step that failed.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp settings failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp settings to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl SettingsPort for FileSettingsRepository {
    /// Missing file → defaults. Older schemas are migrated and written back;
    /// newer schemas are returned as read and the file is left alone.
    ///
    /// # Errors
    ///
    /// Read failures other than not-found, malformed JSON, and write-back
    /// failures after a migration.
    async fn load(&self) -> Result<Settings> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Settings::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read settings failed: {}", self.path.display()))
            }
        };

        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("parse settings failed: {}", self.path.display()))?;
        let original_version = settings.schema_version;

        if original_version > CURRENT_SCHEMA_VERSION {
            tracing::warn!(
                found = original_version,
                supported = CURRENT_SCHEMA_VERSION,
                "settings written by a newer version, reading known fields only"
            );
            return Ok(settings);
        }

        let migrated = SettingsMigrator::new().migrate_to_latest(settings)?;
        if original_version < CURRENT_SCHEMA_VERSION {
            self.save(&migrated).await?;
        }

        Ok(migrated)
    }

    /// Pretty-printed JSON, written atomically.
    async fn save(&self, settings: &Settings) -> Result<()> {
        let content =
            serde_json::to_string_pretty(settings).context("serialize settings failed")?;

        self.atomic_write(&content).await
    }
}
