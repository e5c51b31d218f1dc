//! CLI commands against an in-memory clipboard and a temp settings file.

use std::sync::{Arc, Mutex};

use pp_app::usecases::InspectClipboard;
use pp_core::clipboard::{
    ChangeCount, ClipboardEntry, ClipboardSnapshot, Representation, TextEligibilityPolicyV1,
    TypeResolver, TypeTag,
};
use pp_core::ports::{ClipboardAccessError, SettingsPort, SystemClipboardPort};
use pp_infra::FileSettingsRepository;
use plainpaste_lib::bootstrap::run::{enabled_label, render_report};
use plainpaste_lib::bootstrap::{execute, AppDeps};
use plainpaste_lib::cli::Command;
use tempfile::TempDir;

#[derive(Default)]
struct MemoryClipboard {
    state: Mutex<(i64, Vec<ClipboardEntry>)>,
}

impl MemoryClipboard {
    fn with_entries(entries: Vec<ClipboardEntry>) -> Self {
        Self {
            state: Mutex::new((1, entries)),
        }
    }

    fn entries(&self) -> Vec<ClipboardEntry> {
        self.state.lock().unwrap().1.clone()
    }
}

impl SystemClipboardPort for MemoryClipboard {
    fn change_count(&self) -> Result<ChangeCount, ClipboardAccessError> {
        Ok(ChangeCount(self.state.lock().unwrap().0))
    }

    fn read_snapshot(&self) -> Result<ClipboardSnapshot, ClipboardAccessError> {
        let state = self.state.lock().unwrap();
        Ok(ClipboardSnapshot::new(ChangeCount(state.0), state.1.clone()))
    }

    fn replace_with_plain_text(&self, text: &str) -> Result<(), ClipboardAccessError> {
        let mut state = self.state.lock().unwrap();
        state.0 += 1;
        state.1 = vec![ClipboardEntry::plain_text(text)];
        Ok(())
    }
}

fn rich_entry() -> ClipboardEntry {
    ClipboardEntry::new(vec![
        Representation::new(TypeTag::RTF, br"{\rtf1\ansi \b Bold\b0  text}".to_vec()),
        Representation::new(TypeTag::UTF8_PLAIN_TEXT, b"Bold text".to_vec()),
    ])
}

fn deps_in(dir: &TempDir, clipboard: Arc<MemoryClipboard>) -> (AppDeps, Arc<FileSettingsRepository>) {
    let settings = Arc::new(FileSettingsRepository::new(dir.path().join("settings.json")));
    (AppDeps::new(clipboard, settings.clone()), settings)
}

#[tokio::test]
async fn test_disable_then_enable_persists_flag() {
    let dir = TempDir::new().unwrap();
    let (deps, settings) = deps_in(&dir, Arc::new(MemoryClipboard::default()));

    execute(&deps, Command::Disable).await.unwrap();
    assert!(!settings.load().await.unwrap().general.enabled);

    execute(&deps, Command::Enable).await.unwrap();
    assert!(settings.load().await.unwrap().general.enabled);
}

#[tokio::test]
async fn test_status_does_not_create_settings_file() {
    let dir = TempDir::new().unwrap();
    let (deps, settings) = deps_in(&dir, Arc::new(MemoryClipboard::default()));

    execute(&deps, Command::Status).await.unwrap();
    assert!(!settings.path().exists());
}

#[tokio::test]
async fn test_status_reads_persisted_flag() {
    let dir = TempDir::new().unwrap();
    let (deps, _) = deps_in(&dir, Arc::new(MemoryClipboard::default()));

    execute(&deps, Command::Disable).await.unwrap();
    execute(&deps, Command::Status).await.unwrap();

    assert!(!deps.get_cleaning_enabled().execute().await.unwrap());
    assert_eq!(enabled_label(false), "cleaning disabled");
}

#[tokio::test]
async fn test_clean_converts_rich_text() {
    let dir = TempDir::new().unwrap();
    let clipboard = Arc::new(MemoryClipboard::with_entries(vec![rich_entry()]));
    let (deps, _) = deps_in(&dir, clipboard.clone());

    execute(&deps, Command::Clean).await.unwrap();

    assert_eq!(clipboard.entries(), vec![ClipboardEntry::plain_text("Bold text")]);
}

#[tokio::test]
async fn test_clean_is_blocked_when_disabled() {
    let dir = TempDir::new().unwrap();
    let clipboard = Arc::new(MemoryClipboard::with_entries(vec![rich_entry()]));
    let (deps, _) = deps_in(&dir, clipboard.clone());

    execute(&deps, Command::Disable).await.unwrap();
    execute(&deps, Command::Clean).await.unwrap();

    assert_eq!(clipboard.entries(), vec![rich_entry()]);
}

#[tokio::test]
async fn test_probe_leaves_clipboard_untouched() {
    let dir = TempDir::new().unwrap();
    let clipboard = Arc::new(MemoryClipboard::with_entries(vec![rich_entry()]));
    let (deps, _) = deps_in(&dir, clipboard.clone());

    execute(&deps, Command::Probe { json: true }).await.unwrap();
    execute(&deps, Command::Probe { json: false }).await.unwrap();

    assert_eq!(clipboard.entries(), vec![rich_entry()]);
}

#[tokio::test]
async fn test_rendered_report_lists_each_representation() {
    let clipboard = Arc::new(MemoryClipboard::with_entries(vec![rich_entry()]));
    let report = InspectClipboard::new(
        clipboard,
        TextEligibilityPolicyV1::new(TypeResolver::default()),
    )
    .execute()
    .await
    .unwrap();

    let text = render_report(&report);
    assert!(text.starts_with("change_count: 1\n"));
    assert!(text.contains("classification: Eligible"));
    assert!(text.contains("entry 0:"));
    assert!(text.contains("public.rtf"));
    assert!(text.contains("public.utf8-plain-text"));
}
