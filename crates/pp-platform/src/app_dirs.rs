use std::path::PathBuf;

use pp_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "plainpaste";

/// Env var that isolates data directories per profile (e.g. for testing).
pub const PROFILE_ENV: &str = "PP_PROFILE";

fn resolved_app_dir_name() -> String {
    match std::env::var(PROFILE_ENV) {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

/// Resolves the per-user data root through `dirs`.
///
/// 数据目录解析：
/// - macOS: `~/Library/Application Support/plainpaste`
/// - Linux: `$XDG_DATA_HOME/plainpaste` (usually `~/.local/share/plainpaste`)
/// - Windows: `%LOCALAPPDATA%\plainpaste`
///
/// A non-empty [`PROFILE_ENV`] appends `-<profile>` to the directory name,
/// so profiles never share settings or logs.
#[derive(Default)]
pub struct DirsAppDirsAdapter {
    base_data_local_dir_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    /// Adapter reading the system data-local directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use pp_platform::app_dirs::DirsAppDirsAdapter;
    /// let _ = DirsAppDirsAdapter::new();
    /// ```
    pub fn new() -> Self {
        Self {
            base_data_local_dir_override: None,
        }
    }

    /// Adapter rooted at `base` instead of the system data-local directory.
    ///
    /// The profile suffix still applies below `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use pp_core::ports::AppDirsPort;
    /// use pp_platform::app_dirs::DirsAppDirsAdapter;
    ///
    /// let adapter = DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp/base"));
    /// let dirs = adapter.get_app_dirs().unwrap();
    /// assert!(dirs.app_data_root.starts_with("/tmp/base"));
    /// ```
    pub fn with_base_data_local_dir(base: PathBuf) -> Self {
        Self {
            base_data_local_dir_override: Some(base),
        }
    }

    /// The override when one was given, otherwise `dirs::data_local_dir()`.
    ///
    /// `None` only when there is no override and the platform reports no
    /// data-local directory (e.g. no home directory).
    pub fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_data_local_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    /// Fails with [`AppDirsError::DataLocalDirUnavailable`] when no base
    /// directory can be resolved. Nothing is created on disk.
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;

        Ok(AppDirs {
            app_data_root: base_data.join(resolved_app_dir_name()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static PROFILE_ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_profile<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let _guard = PROFILE_ENV_LOCK.lock().unwrap();
        let previous = std::env::var(PROFILE_ENV).ok();

        match value {
            Some(profile) => std::env::set_var(PROFILE_ENV, profile),
            None => std::env::remove_var(PROFILE_ENV),
        }

        let result = f();

        match previous {
            Some(profile) => std::env::set_var(PROFILE_ENV, profile),
            None => std::env::remove_var(PROFILE_ENV),
        }

        result
    }

    #[test]
    fn adapter_appends_plainpaste_dir_name() {
        with_profile(None, || {
            let adapter = DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"));
            let dirs = adapter.get_app_dirs().unwrap();
            assert_eq!(dirs.app_data_root, PathBuf::from("/tmp/plainpaste"));
            assert_eq!(
                dirs.settings_path(),
                PathBuf::from("/tmp/plainpaste/settings.json")
            );
        });
    }

    #[test]
    fn adapter_isolates_dirs_per_profile() {
        let dirs_a = with_profile(Some("a"), || {
            DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap()
        });
        let dirs_b = with_profile(Some("b"), || {
            DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap()
        });

        assert_eq!(dirs_a.app_data_root, PathBuf::from("/tmp/plainpaste-a"));
        assert_eq!(dirs_b.app_data_root, PathBuf::from("/tmp/plainpaste-b"));
    }

    #[test]
    fn empty_profile_is_ignored() {
        with_profile(Some(""), || {
            let dirs = DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap();
            assert_eq!(dirs.app_data_root, PathBuf::from("/tmp/plainpaste"));
        });
    }

    #[test]
    fn override_replaces_system_base_dir() {
        let adapter = DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/srv/data"));
        assert_eq!(adapter.base_data_local_dir(), Some(PathBuf::from("/srv/data")));
    }
}
