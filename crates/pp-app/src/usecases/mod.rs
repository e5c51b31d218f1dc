//! Business logic use cases
//!
//! ```text
//! [ClipboardPollRuntime]
//!         ↓ tick / clean now
//! ClipboardMonitor → classify → extract → replace
//! ```

pub mod inspect_clipboard;
pub mod monitor;
pub mod settings;

pub use inspect_clipboard::{InspectClipboard, ClipboardReport};
pub use settings::{GetCleaningEnabled, SetCleaningEnabled};
