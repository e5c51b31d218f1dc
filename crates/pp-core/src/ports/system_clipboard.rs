//! System clipboard port - abstracts the OS shared clipboard
//!
//! Calls are synchronous: every platform API behind this trait is a short,
//! blocking call on the clipboard owner.

use crate::clipboard::{ChangeCount, ClipboardSnapshot};
use crate::ports::errors::ClipboardAccessError;

pub trait SystemClipboardPort: Send + Sync {
    /// Current clipboard generation. Must not read any entry payloads.
    fn change_count(&self) -> Result<ChangeCount, ClipboardAccessError>;

    /// Read all entries of exactly one generation.
    ///
    /// The returned snapshot's `change_count` is the generation the entries
    /// belong to.
    fn read_snapshot(&self) -> Result<ClipboardSnapshot, ClipboardAccessError>;

    /// Clear the clipboard and publish `text` as its only representation.
    fn replace_with_plain_text(&self, text: &str) -> Result<(), ClipboardAccessError>;
}
