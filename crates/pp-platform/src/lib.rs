//! # pp-platform
//!
//! Platform-specific implementations for PlainPaste.
//!
//! This crate contains the adapters that talk to the operating system: the
//! shared clipboard, the per-user data directory and the polling runtime that
//! drives the monitor.

pub mod app_dirs;
pub mod clipboard;
pub mod ipc;
pub mod runtime;

pub use clipboard::{LocalClipboard, LocalTypeLookup};
