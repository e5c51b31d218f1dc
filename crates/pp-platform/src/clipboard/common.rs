use std::sync::{Arc, Mutex, MutexGuard};

use clipboard_rs::{Clipboard, ClipboardContext};
#[cfg(target_os = "linux")]
use clipboard_rs::ClipboardContextX11Options;
use pp_core::clipboard::{
    ChangeCount, ClipboardEntry, ClipboardSnapshot, Representation, TypeResolver, TypeTag,
};
use pp_core::ports::{ClipboardAccessError, SystemClipboardPort};
use tracing::{debug, debug_span};

use super::fingerprint::FingerprintCounter;

/// X11 selection protocol targets; they describe the transfer, not the content.
const PROTOCOL_ATOMS: &[&str] = &["TARGETS", "TIMESTAMP", "MULTIPLE", "SAVE_TARGETS", "DELETE", "INCR"];

/// clipboard-rs backed adapter for Linux and Windows.
///
/// The OS exposes one item, so snapshots hold a single entry. There is no
/// native generation counter; it is synthesized from a content fingerprint.
pub struct CommonClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
    counter: FingerprintCounter,
}

impl CommonClipboard {
    pub fn new() -> anyhow::Result<Self> {
        #[cfg(target_os = "linux")]
        let context = ClipboardContext::new_with_options(ClipboardContextX11Options {
            read_timeout: None,
        })
        .map_err(|e| anyhow::anyhow!("Failed to create clipboard context: {}", e))?;
        #[cfg(not(target_os = "linux"))]
        let context = ClipboardContext::new()
            .map_err(|e| anyhow::anyhow!("Failed to create clipboard context: {}", e))?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
            counter: FingerprintCounter::new(TypeResolver::default()),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, ClipboardContext>, ClipboardAccessError> {
        self.inner
            .lock()
            .map_err(|_| ClipboardAccessError::Unavailable("clipboard context poisoned".to_string()))
    }

    /// Reads the current item. With `fingerprint_only`, payloads that do not
    /// enter the fingerprint are left unread.
    fn read_entries(
        &self,
        ctx: &mut ClipboardContext,
        fingerprint_only: bool,
    ) -> Result<Vec<ClipboardEntry>, ClipboardAccessError> {
        let formats = ctx
            .available_formats()
            .map_err(|e| ClipboardAccessError::Read(e.to_string()))?;

        let representations: Vec<Representation> = formats
            .into_iter()
            .filter(|f| !f.is_empty() && !PROTOCOL_ATOMS.contains(&f.as_str()))
            .map(|format| {
                let tag = TypeTag::new(format);
                let bytes = if fingerprint_only && !self.counter.hashes_payload(&tag) {
                    Vec::new()
                } else {
                    // unreadable formats stay visible to classification
                    ctx.get_buffer(tag.as_str()).unwrap_or_default()
                };
                Representation::new(tag, bytes)
            })
            .collect();

        if representations.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![ClipboardEntry::new(representations)])
    }
}

impl SystemClipboardPort for CommonClipboard {
    /// Polling cost: the format list plus every textual payload is fetched on
    /// each call. Image and file payloads are never fetched here.
    fn change_count(&self) -> Result<ChangeCount, ClipboardAccessError> {
        let mut ctx = self.lock()?;
        let entries = self.read_entries(&mut ctx, true)?;
        Ok(self.counter.observe(&entries))
    }

    fn read_snapshot(&self) -> Result<ClipboardSnapshot, ClipboardAccessError> {
        let span = debug_span!("platform.common.read_snapshot");
        span.in_scope(|| {
            let mut ctx = self.lock()?;
            let entries = self.read_entries(&mut ctx, false)?;
            // the generation is derived from exactly these entries
            let change_count = self.counter.observe(&entries);
            let snapshot = ClipboardSnapshot::new(change_count, entries);

            debug!(
                change_count = change_count.value(),
                representations = snapshot.representation_count(),
                total_size_bytes = snapshot.total_size_bytes(),
                "Captured system clipboard snapshot"
            );
            Ok(snapshot)
        })
    }

    fn replace_with_plain_text(&self, text: &str) -> Result<(), ClipboardAccessError> {
        let span = debug_span!("platform.common.replace_with_plain_text", chars = text.chars().count());
        span.in_scope(|| {
            let mut ctx = self.lock()?;
            ctx.set_text(text.to_string())
                .map_err(|e| ClipboardAccessError::Write(e.to_string()))?;
            debug!("Wrote plain text to system clipboard");
            Ok(())
        })
    }
}
