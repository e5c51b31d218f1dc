//! # pp-app
//!
//! Use cases of the PlainPaste engine. Everything here talks to the outside
//! world through `pp-core` ports only.

pub mod usecases;

pub use usecases::monitor::{ClipboardMonitor, ProcessOutcome, TickOutcome};
