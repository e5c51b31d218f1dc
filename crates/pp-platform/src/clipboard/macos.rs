use objc2::rc::autoreleasepool;
use objc2_app_kit::{NSPasteboard, NSPasteboardItem};
use objc2_foundation::NSString;
use pp_core::clipboard::{ChangeCount, ClipboardEntry, ClipboardSnapshot, Representation, TypeTag};
use pp_core::ports::{ClipboardAccessError, SystemClipboardPort};
use tracing::{debug, debug_span, warn};

use super::MAX_READ_ATTEMPTS;

/// macOS general pasteboard through AppKit.
///
/// Holds no Objective-C objects; every call fetches `generalPasteboard` anew,
/// so the adapter is `Send + Sync`.
#[derive(Debug, Default)]
pub struct MacOsPasteboard;

impl MacOsPasteboard {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self)
    }

    fn read_item(item: &NSPasteboardItem) -> ClipboardEntry {
        let types = unsafe { item.types() };
        let representations = types
            .iter()
            .map(|ty| {
                // Marker types usually carry no data; keep the tag regardless.
                let bytes = unsafe { item.dataForType(&ty) }
                    .map(|data| data.to_vec())
                    .unwrap_or_default();
                Representation::new(TypeTag::new(ty.to_string()), bytes)
            })
            .collect();
        ClipboardEntry::new(representations)
    }

    fn read_entries(pasteboard: &NSPasteboard) -> Vec<ClipboardEntry> {
        match unsafe { pasteboard.pasteboardItems() } {
            Some(items) => items.iter().map(|item| Self::read_item(&item)).collect(),
            None => Vec::new(),
        }
    }
}

impl SystemClipboardPort for MacOsPasteboard {
    fn change_count(&self) -> Result<ChangeCount, ClipboardAccessError> {
        let count = autoreleasepool(|_| unsafe { NSPasteboard::generalPasteboard().changeCount() });
        Ok(ChangeCount(count as i64))
    }

    fn read_snapshot(&self) -> Result<ClipboardSnapshot, ClipboardAccessError> {
        let span = debug_span!("platform.macos.read_snapshot");
        span.in_scope(|| {
            for attempt in 1..=MAX_READ_ATTEMPTS {
                let read = autoreleasepool(|_| {
                    let pasteboard = unsafe { NSPasteboard::generalPasteboard() };
                    let before = unsafe { pasteboard.changeCount() };
                    let entries = Self::read_entries(&pasteboard);
                    let after = unsafe { pasteboard.changeCount() };
                    (before, after, entries)
                });

                match read {
                    (before, after, entries) if before == after => {
                        let snapshot = ClipboardSnapshot::new(ChangeCount(before as i64), entries);
                        debug!(
                            change_count = before as i64,
                            entries = snapshot.entry_count(),
                            representations = snapshot.representation_count(),
                            total_size_bytes = snapshot.total_size_bytes(),
                            "Captured pasteboard snapshot"
                        );
                        return Ok(snapshot);
                    }
                    (before, after, _) => {
                        debug!(attempt, before = before as i64, after = after as i64, "pasteboard changed during read, retrying");
                    }
                }
            }

            warn!(attempts = MAX_READ_ATTEMPTS, "pasteboard never settled during read");
            Err(ClipboardAccessError::UnstableGeneration {
                attempts: MAX_READ_ATTEMPTS,
            })
        })
    }

    fn replace_with_plain_text(&self, text: &str) -> Result<(), ClipboardAccessError> {
        let span = debug_span!("platform.macos.replace_with_plain_text", chars = text.chars().count());
        span.in_scope(|| {
            let written = autoreleasepool(|_| unsafe {
                let pasteboard = NSPasteboard::generalPasteboard();
                pasteboard.clearContents();
                pasteboard.setString_forType(
                    &NSString::from_str(text),
                    &NSString::from_str(TypeTag::UTF8_PLAIN_TEXT),
                )
            });

            if written {
                debug!("Wrote plain text to pasteboard");
                Ok(())
            } else {
                Err(ClipboardAccessError::Write(
                    "NSPasteboard rejected setString:forType:".to_string(),
                ))
            }
        })
    }
}
