mod monitor;
mod state;

pub use monitor::ClipboardMonitor;
pub use state::{ProcessOutcome, TickOutcome};
