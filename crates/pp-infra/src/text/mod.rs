//! Rich text → plain text decoders.

mod cp1252;
mod entities;
mod html;
mod rtf;

pub use html::HtmlDecoder;
pub use rtf::RtfDecoder;
