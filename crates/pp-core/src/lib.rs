//! # pp-core
//!
//! Core domain models and clipboard policies for PlainPaste.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the clipboard snapshot model, the text-eligibility classifier, the text
//! extractor and the ports that platform and infrastructure crates implement.

pub mod app_dirs;
pub mod clipboard;
pub mod ports;
pub mod settings;

// Re-export commonly used types at the crate root
pub use clipboard::{
    ChangeCount, ClassificationResult, ClipboardEntry, ClipboardSnapshot, ExtractionResult,
    Representation, SkipReason, TypeCategory, TypeTag,
};
pub use settings::model::Settings;
