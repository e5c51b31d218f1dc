#[cfg(not(target_os = "macos"))]
mod common;
#[cfg(not(target_os = "macos"))]
mod fingerprint;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
mod uti;

#[cfg(not(target_os = "macos"))]
pub use common::CommonClipboard as LocalClipboard;
#[cfg(target_os = "macos")]
pub use macos::MacOsPasteboard as LocalClipboard;

/// Structured type lookup for this platform. Platforms without a system type
/// registry use the built-in conformance table.
#[cfg(not(target_os = "macos"))]
pub use pp_core::clipboard::UtiConformanceLookup as LocalTypeLookup;
#[cfg(target_os = "macos")]
pub use uti::MacOsTypeLookup as LocalTypeLookup;

/// Attempts at reading one stable generation before giving up.
pub const MAX_READ_ATTEMPTS: u32 = 3;
