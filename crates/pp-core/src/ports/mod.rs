//! Port interfaces for the application layer
//!
//! Ports define the contract between the monitoring engine and the
//! infrastructure/platform implementations. Use cases depend only on these
//! traits; concrete adapters are chosen at wiring time.

pub mod app_dirs;
pub mod errors;
pub mod settings;
mod system_clipboard;
mod text_decoder;
mod tick_handler;
mod type_lookup;

pub use app_dirs::AppDirsPort;
pub use errors::{AppDirsError, ClipboardAccessError, DecodeError};
pub use settings::{SettingsMigrationPort, SettingsPort};
pub use system_clipboard::SystemClipboardPort;
pub use text_decoder::RichTextDecoderPort;
pub use tick_handler::ClipboardTickHandler;
pub use type_lookup::TypeLookupPort;
