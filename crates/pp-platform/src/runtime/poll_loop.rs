use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use pp_core::ports::ClipboardTickHandler;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use super::event_bus::MonitorCommandReceiver;
use crate::ipc::MonitorCommand;

/// Single cooperative loop driving the monitor.
///
/// Timer ticks and commands are handled one at a time, so handler calls never
/// overlap.
pub struct ClipboardPollRuntime {
    handler: Arc<dyn ClipboardTickHandler>,
    command_rx: MonitorCommandReceiver,
    poll_interval: Duration,
}

impl ClipboardPollRuntime {
    pub fn new(
        handler: Arc<dyn ClipboardTickHandler>,
        command_rx: MonitorCommandReceiver,
        poll_interval: Duration,
    ) -> Self {
        Self {
            handler,
            command_rx,
            poll_interval,
        }
    }

    /// Runs until `shutdown` resolves or a `Shutdown` command arrives.
    pub async fn run<F>(mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        if let Err(e) = self.handler.on_start().await {
            warn!(error = %e, "monitor start failed, continuing without baseline");
        }

        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut commands_open = true;

        info!(
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            "clipboard poll runtime started"
        );

        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    info!("shutdown signal received");
                    break;
                }
                cmd = self.command_rx.recv(), if commands_open => {
                    match cmd {
                        Some(MonitorCommand::CleanNow) => {
                            debug!("clean requested");
                            if let Err(e) = self.handler.on_clean_requested().await {
                                warn!(error = %e, "manual clean failed");
                            }
                        }
                        Some(MonitorCommand::Shutdown) => {
                            info!("shutdown command received");
                            break;
                        }
                        None => {
                            debug!("command channel closed");
                            commands_open = false;
                        }
                    }
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.handler.on_tick().await {
                        warn!(error = %e, "clipboard tick failed");
                    }
                }
            }
        }

        info!("clipboard poll runtime stopped");
    }
}
