//! Tick handler port
//!
//! The platform runtime owns the timer and the command channel; the app layer
//! implements this trait and does the actual work on each event.

use anyhow::Result;

#[async_trait::async_trait]
pub trait ClipboardTickHandler: Send + Sync {
    /// Called once before the first tick.
    async fn on_start(&self) -> Result<()>;

    /// Called on every timer tick.
    async fn on_tick(&self) -> Result<()>;

    /// Called when a manual clean is requested.
    async fn on_clean_requested(&self) -> Result<()>;
}
