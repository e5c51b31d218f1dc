use crate::ports::errors::DecodeError;

/// Converts one rich-text payload (RTF or HTML) into its visible characters.
///
/// Implementations return rendered text without line-break canonicalization;
/// U+2028/U+2029 may appear in the output.
pub trait RichTextDecoderPort: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<String, DecodeError>;
}
