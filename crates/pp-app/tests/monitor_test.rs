//! Clipboard monitor behavior against an in-memory clipboard.
//! 剪贴板监控行为测试

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use mockall::mock;
use pp_app::{ClipboardMonitor, ProcessOutcome, TickOutcome};
use pp_core::clipboard::{
    ChangeCount, ClipboardEntry, ClipboardSnapshot, Representation, SkipReason,
    TextEligibilityPolicyV1, TextExtractor, TypeResolver, TypeTag,
};
use pp_core::ports::{ClipboardAccessError, SettingsPort, SystemClipboardPort};
use pp_core::Settings;
use pp_infra::{HtmlDecoder, RtfDecoder};

mock! {
    pub SettingsRepo {}

    #[async_trait]
    impl SettingsPort for SettingsRepo {
        async fn load(&self) -> anyhow::Result<Settings>;
        async fn save(&self, settings: &Settings) -> anyhow::Result<()>;
    }
}

#[derive(Default)]
struct FakeState {
    change_count: i64,
    entries: Vec<ClipboardEntry>,
    written: Vec<String>,
    fail_change_count: bool,
}

/// In-memory clipboard with a native-style generation counter.
#[derive(Default)]
struct FakeClipboard {
    state: Mutex<FakeState>,
    snapshot_reads: AtomicUsize,
}

impl FakeClipboard {
    /// Another application writes to the clipboard.
    fn external_copy(&self, entries: Vec<ClipboardEntry>) {
        let mut state = self.state.lock().unwrap();
        state.change_count += 1;
        state.entries = entries;
    }

    fn snapshot_reads(&self) -> usize {
        self.snapshot_reads.load(Ordering::SeqCst)
    }

    fn written(&self) -> Vec<String> {
        self.state.lock().unwrap().written.clone()
    }

    fn set_fail_change_count(&self, fail: bool) {
        self.state.lock().unwrap().fail_change_count = fail;
    }
}

impl SystemClipboardPort for FakeClipboard {
    fn change_count(&self) -> Result<ChangeCount, ClipboardAccessError> {
        let state = self.state.lock().unwrap();
        if state.fail_change_count {
            return Err(ClipboardAccessError::Unavailable("locked".to_string()));
        }
        Ok(ChangeCount(state.change_count))
    }

    fn read_snapshot(&self) -> Result<ClipboardSnapshot, ClipboardAccessError> {
        self.snapshot_reads.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        Ok(ClipboardSnapshot::new(
            ChangeCount(state.change_count),
            state.entries.clone(),
        ))
    }

    fn replace_with_plain_text(&self, text: &str) -> Result<(), ClipboardAccessError> {
        let mut state = self.state.lock().unwrap();
        state.change_count += 1;
        state.entries = vec![ClipboardEntry::plain_text(text)];
        state.written.push(text.to_string());
        Ok(())
    }
}

fn settings_with(enabled: bool) -> Arc<MockSettingsRepo> {
    let mut repo = MockSettingsRepo::new();
    repo.expect_load().returning(move || {
        let mut settings = Settings::default();
        settings.general.enabled = enabled;
        Ok(settings)
    });
    repo.expect_save().never();
    Arc::new(repo)
}

fn monitor_with(clipboard: Arc<FakeClipboard>, settings: Arc<MockSettingsRepo>) -> ClipboardMonitor {
    let resolver = TypeResolver::default();
    ClipboardMonitor::new(
        clipboard,
        settings,
        TextEligibilityPolicyV1::new(resolver.clone()),
        TextExtractor::new(
            resolver,
            Arc::new(RtfDecoder::new()),
            Arc::new(HtmlDecoder::new()),
        ),
    )
}

fn rtf(text: &str) -> Representation {
    Representation::new(
        TypeTag::RTF,
        format!(r"{{\rtf1\ansi{{\fonttbl\f0 Helvetica;}}\f0 {text}}}").into_bytes(),
    )
}

fn html(text: &str) -> Representation {
    Representation::new(TypeTag::HTML, format!("<b>{text}</b>").into_bytes())
}

fn plain(text: &str) -> Representation {
    Representation::new(TypeTag::UTF8_PLAIN_TEXT, text.as_bytes().to_vec())
}

fn rich_copy(text: &str) -> Vec<ClipboardEntry> {
    vec![ClipboardEntry::new(vec![rtf(text), html(text), plain(text)])]
}

async fn started(clipboard: &Arc<FakeClipboard>, enabled: bool) -> ClipboardMonitor {
    let monitor = monitor_with(clipboard.clone(), settings_with(enabled));
    monitor.baseline().await.unwrap();
    monitor
}

#[tokio::test]
async fn test_content_present_before_start_is_not_processed() {
    let clipboard = Arc::new(FakeClipboard::default());
    clipboard.external_copy(rich_copy("old"));

    let monitor = started(&clipboard, true).await;

    assert_eq!(monitor.tick().await.unwrap(), TickOutcome::NoChange);
    assert_eq!(clipboard.snapshot_reads(), 0);
    assert!(clipboard.written().is_empty());
}

#[tokio::test]
async fn test_rich_copy_is_replaced_with_plain_text() {
    let clipboard = Arc::new(FakeClipboard::default());
    let monitor = started(&clipboard, true).await;

    clipboard.external_copy(rich_copy("Hello"));
    let outcome = monitor.tick().await.unwrap();

    assert_eq!(
        outcome,
        TickOutcome::Processed(ProcessOutcome::Replaced {
            entry_index: 0,
            change_count: ChangeCount(2),
        })
    );
    assert_eq!(clipboard.written(), vec!["Hello".to_string()]);
    assert_eq!(monitor.recorded_change_count().await, Some(ChangeCount(2)));
}

#[tokio::test]
async fn test_own_write_is_not_reprocessed() {
    let clipboard = Arc::new(FakeClipboard::default());
    let monitor = started(&clipboard, true).await;

    clipboard.external_copy(rich_copy("Hello"));
    monitor.tick().await.unwrap();
    assert_eq!(clipboard.snapshot_reads(), 1);

    assert_eq!(monitor.tick().await.unwrap(), TickOutcome::NoChange);
    assert_eq!(clipboard.snapshot_reads(), 1, "no entry may be read after own write");
}

#[tokio::test]
async fn test_second_pass_over_plain_text_is_a_no_op() {
    let clipboard = Arc::new(FakeClipboard::default());
    let monitor = started(&clipboard, true).await;

    clipboard.external_copy(rich_copy("Hello"));
    monitor.tick().await.unwrap();

    assert_eq!(
        monitor.force_clean().await.unwrap(),
        ProcessOutcome::NothingConverted
    );
    assert_eq!(clipboard.written().len(), 1);
}

#[tokio::test]
async fn test_text_with_image_is_left_untouched() {
    let clipboard = Arc::new(FakeClipboard::default());
    let monitor = started(&clipboard, true).await;

    clipboard.external_copy(vec![ClipboardEntry::new(vec![
        rtf("caption"),
        Representation::new("public.tiff", vec![0x4d, 0x4d, 0x00, 0x2a]),
    ])]);

    assert_eq!(
        monitor.tick().await.unwrap(),
        TickOutcome::Processed(ProcessOutcome::Ineligible)
    );
    assert_eq!(
        monitor.force_clean().await.unwrap(),
        ProcessOutcome::Ineligible
    );
    assert!(clipboard.written().is_empty());
}

#[tokio::test]
async fn test_concealed_entry_is_skipped_until_forced() {
    let clipboard = Arc::new(FakeClipboard::default());
    let monitor = started(&clipboard, true).await;

    clipboard.external_copy(vec![ClipboardEntry::new(vec![
        rtf("secret"),
        plain("secret"),
        Representation::new(TypeTag::CONCEALED, Vec::new()),
    ])]);

    assert_eq!(
        monitor.tick().await.unwrap(),
        TickOutcome::Processed(ProcessOutcome::Skipped(SkipReason::Marker(
            TypeTag::concealed()
        )))
    );
    assert!(clipboard.written().is_empty());

    assert!(monitor.force_clean().await.unwrap().is_replaced());
    assert_eq!(clipboard.written(), vec!["secret".to_string()]);
}

#[tokio::test]
async fn test_disabled_monitor_still_records_change_count() {
    let clipboard = Arc::new(FakeClipboard::default());
    let monitor = started(&clipboard, false).await;

    clipboard.external_copy(rich_copy("Hello"));
    assert_eq!(
        monitor.tick().await.unwrap(),
        TickOutcome::Processed(ProcessOutcome::Disabled)
    );
    assert_eq!(monitor.tick().await.unwrap(), TickOutcome::NoChange);
    assert_eq!(clipboard.snapshot_reads(), 0);
    assert!(clipboard.written().is_empty());
}

#[tokio::test]
async fn test_manual_clean_respects_disabled_flag() {
    let clipboard = Arc::new(FakeClipboard::default());
    let monitor = started(&clipboard, false).await;
    clipboard.external_copy(rich_copy("Hello"));

    assert_eq!(
        monitor.force_clean().await.unwrap(),
        ProcessOutcome::Disabled
    );
    assert!(clipboard.written().is_empty());
    assert_eq!(clipboard.snapshot_reads(), 0);
}

#[tokio::test]
async fn test_first_converted_entry_wins() {
    let clipboard = Arc::new(FakeClipboard::default());
    let monitor = started(&clipboard, true).await;

    clipboard.external_copy(vec![
        ClipboardEntry::new(vec![plain("first")]),
        ClipboardEntry::new(vec![rtf("second"), plain("second")]),
        ClipboardEntry::new(vec![html("third"), plain("third")]),
    ]);

    assert_eq!(
        monitor.tick().await.unwrap(),
        TickOutcome::Processed(ProcessOutcome::Replaced {
            entry_index: 1,
            change_count: ChangeCount(2),
        })
    );
    assert_eq!(clipboard.written(), vec!["second".to_string()]);
}

#[tokio::test]
async fn test_rtf_is_preferred_over_differing_html() {
    let clipboard = Arc::new(FakeClipboard::default());
    let monitor = started(&clipboard, true).await;

    clipboard.external_copy(vec![ClipboardEntry::new(vec![
        html("from html"),
        rtf("from rtf"),
        plain("plain"),
    ])]);
    monitor.tick().await.unwrap();

    assert_eq!(clipboard.written(), vec!["from rtf".to_string()]);
}

#[tokio::test]
async fn test_html_line_breaks_are_canonicalized() {
    let clipboard = Arc::new(FakeClipboard::default());
    let monitor = started(&clipboard, true).await;

    clipboard.external_copy(vec![ClipboardEntry::new(vec![
        Representation::new(TypeTag::HTML, b"<p>one<br>two</p><p>three</p>".to_vec()),
        plain("one\u{2028}two\nthree"),
    ])]);
    monitor.tick().await.unwrap();

    assert_eq!(clipboard.written(), vec!["one\ntwo\nthree".to_string()]);
}

#[tokio::test]
async fn test_settings_failure_leaves_clipboard_untouched() {
    let clipboard = Arc::new(FakeClipboard::default());
    let mut repo = MockSettingsRepo::new();
    repo.expect_load()
        .returning(|| Err(anyhow!("settings file unreadable")));
    let monitor = monitor_with(clipboard.clone(), Arc::new(repo));
    monitor.baseline().await.unwrap();

    clipboard.external_copy(rich_copy("Hello"));
    assert_eq!(
        monitor.tick().await.unwrap(),
        TickOutcome::Processed(ProcessOutcome::Disabled)
    );
    assert!(clipboard.written().is_empty());
}

#[tokio::test]
async fn test_clipboard_error_keeps_last_recorded_generation() {
    let clipboard = Arc::new(FakeClipboard::default());
    let monitor = started(&clipboard, true).await;

    clipboard.external_copy(rich_copy("Hello"));
    clipboard.set_fail_change_count(true);
    assert!(monitor.tick().await.is_err());
    assert_eq!(monitor.recorded_change_count().await, Some(ChangeCount(0)));

    clipboard.set_fail_change_count(false);
    assert!(matches!(
        monitor.tick().await.unwrap(),
        TickOutcome::Processed(ProcessOutcome::Replaced { .. })
    ));
}

#[tokio::test]
async fn test_empty_clipboard_is_skipped() {
    let clipboard = Arc::new(FakeClipboard::default());
    let monitor = started(&clipboard, true).await;

    clipboard.external_copy(Vec::new());
    assert_eq!(
        monitor.tick().await.unwrap(),
        TickOutcome::Processed(ProcessOutcome::Skipped(SkipReason::Empty))
    );
}
