use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}

/// Why a rich-text payload could not be turned into plain text.
///
/// Always recovered inside the extractor by falling through to the next format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("payload is empty")]
    Empty,

    #[error("payload is not valid {encoding}")]
    Encoding { encoding: &'static str },

    #[error("malformed {format}: {reason}")]
    Malformed {
        format: &'static str,
        reason: String,
    },

    /// Decoded fine but no visible text (e.g. picture-only RTF).
    #[error("{format} payload contains no text")]
    NoText { format: &'static str },
}

#[derive(Debug, Error)]
pub enum ClipboardAccessError {
    #[error("clipboard is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read clipboard: {0}")]
    Read(String),

    #[error("failed to write clipboard: {0}")]
    Write(String),

    /// The clipboard kept changing while entries were being read.
    #[error("clipboard generation changed during read after {attempts} attempts")]
    UnstableGeneration { attempts: u32 },
}
