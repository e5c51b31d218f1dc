//! Dependency wiring: builds adapters and use cases from concrete types.
//! 依赖注入装配

use std::sync::Arc;

use anyhow::{Context, Result};
use pp_app::usecases::{GetCleaningEnabled, InspectClipboard, SetCleaningEnabled};
use pp_app::ClipboardMonitor;
use pp_core::clipboard::{TextEligibilityPolicyV1, TextExtractor, TypeResolver};
use pp_core::ports::{AppDirsPort, SettingsPort, SystemClipboardPort, TypeLookupPort};
use pp_infra::{FileSettingsRepository, HtmlDecoder, RtfDecoder};
use pp_platform::app_dirs::DirsAppDirsAdapter;
use pp_platform::{LocalClipboard, LocalTypeLookup};
use tracing::info;

/// Shared adapters for one process.
pub struct AppDeps {
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub settings: Arc<dyn SettingsPort>,
    pub resolver: TypeResolver,
}

impl AppDeps {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>, settings: Arc<dyn SettingsPort>) -> Self {
        Self {
            clipboard,
            settings,
            resolver: TypeResolver::default(),
        }
    }

    pub fn with_type_lookup(mut self, lookup: Arc<dyn TypeLookupPort>) -> Self {
        self.resolver = TypeResolver::new(lookup);
        self
    }

    pub fn policy(&self) -> TextEligibilityPolicyV1 {
        TextEligibilityPolicyV1::new(self.resolver.clone())
    }

    pub fn extractor(&self) -> TextExtractor {
        TextExtractor::new(
            self.resolver.clone(),
            Arc::new(RtfDecoder::new()),
            Arc::new(HtmlDecoder::new()),
        )
    }

    pub fn monitor(&self) -> ClipboardMonitor {
        ClipboardMonitor::new(
            self.clipboard.clone(),
            self.settings.clone(),
            self.policy(),
            self.extractor(),
        )
    }

    pub fn inspect_clipboard(&self) -> InspectClipboard {
        InspectClipboard::new(self.clipboard.clone(), self.policy())
    }

    pub fn get_cleaning_enabled(&self) -> GetCleaningEnabled {
        GetCleaningEnabled::new(self.settings.clone())
    }

    pub fn set_cleaning_enabled(&self) -> SetCleaningEnabled {
        SetCleaningEnabled::new(self.settings.clone())
    }
}

/// Settings repository at the profile's settings path.
pub fn settings_repository(app_dirs: &dyn AppDirsPort) -> Result<Arc<FileSettingsRepository>> {
    let dirs = app_dirs
        .get_app_dirs()
        .context("resolve application data directory")?;
    let repo = FileSettingsRepository::new(dirs.settings_path());
    info!(path = %repo.path().display(), "settings repository ready");
    Ok(Arc::new(repo))
}

/// Wires the real OS clipboard and the file settings repository.
pub fn wire_dependencies(app_dirs: &DirsAppDirsAdapter) -> Result<AppDeps> {
    let settings = settings_repository(app_dirs)?;
    let clipboard = Arc::new(LocalClipboard::new().context("open system clipboard")?);
    Ok(AppDeps::new(clipboard, settings).with_type_lookup(Arc::new(LocalTypeLookup::new())))
}
