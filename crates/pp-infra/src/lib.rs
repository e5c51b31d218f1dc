//! # pp-infra
//!
//! Infrastructure implementations of the `pp-core` ports that do not touch the
//! OS clipboard: rich-text decoders and the file-backed settings repository.

pub mod settings;
pub mod text;

pub use settings::file_repo::FileSettingsRepository;
pub use text::{HtmlDecoder, RtfDecoder};
