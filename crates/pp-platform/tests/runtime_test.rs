use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use pp_core::ports::ClipboardTickHandler;
use pp_platform::ipc::MonitorCommand;
use pp_platform::runtime::{command_channel, ClipboardPollRuntime};

#[derive(Default)]
struct CountingHandler {
    starts: AtomicUsize,
    ticks: AtomicUsize,
    cleans: AtomicUsize,
    fail_ticks: bool,
}

#[async_trait]
impl ClipboardTickHandler for CountingHandler {
    async fn on_start(&self) -> Result<()> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn on_tick(&self) -> Result<()> {
        self.ticks.fetch_add(1, Ordering::SeqCst);
        if self.fail_ticks {
            return Err(anyhow!("clipboard unavailable"));
        }
        Ok(())
    }

    async fn on_clean_requested(&self) -> Result<()> {
        self.cleans.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::test(start_paused = true)]
async fn test_ticks_at_poll_interval_until_shutdown() {
    let handler = Arc::new(CountingHandler::default());
    let (_tx, rx) = command_channel(8);

    let runtime = ClipboardPollRuntime::new(handler.clone(), rx, Duration::from_millis(250));
    runtime
        .run(tokio::time::sleep(Duration::from_millis(1_100)))
        .await;

    let ticks = handler.ticks.load(Ordering::SeqCst);
    assert_eq!(handler.starts.load(Ordering::SeqCst), 1);
    assert!((4..=5).contains(&ticks), "unexpected tick count {ticks}");
}

#[tokio::test(start_paused = true)]
async fn test_clean_now_and_shutdown_commands() {
    let handler = Arc::new(CountingHandler::default());
    let (tx, rx) = command_channel(8);
    tx.send(MonitorCommand::CleanNow).await.unwrap();
    tx.send(MonitorCommand::Shutdown).await.unwrap();

    let runtime = ClipboardPollRuntime::new(handler.clone(), rx, Duration::from_millis(250));
    runtime.run(std::future::pending::<()>()).await;

    assert_eq!(handler.cleans.load(Ordering::SeqCst), 1);
    assert_eq!(handler.ticks.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_tick_errors_do_not_stop_the_loop() {
    let handler = Arc::new(CountingHandler {
        fail_ticks: true,
        ..CountingHandler::default()
    });
    let (_tx, rx) = command_channel(8);

    let runtime = ClipboardPollRuntime::new(handler.clone(), rx, Duration::from_millis(100));
    runtime
        .run(tokio::time::sleep(Duration::from_millis(550)))
        .await;

    assert!(handler.ticks.load(Ordering::SeqCst) >= 5);
}

#[tokio::test(start_paused = true)]
async fn test_closed_command_channel_keeps_ticking() {
    let handler = Arc::new(CountingHandler::default());
    let (tx, rx) = command_channel(8);
    drop(tx);

    let runtime = ClipboardPollRuntime::new(handler.clone(), rx, Duration::from_millis(100));
    runtime
        .run(tokio::time::sleep(Duration::from_millis(350)))
        .await;

    assert!(handler.ticks.load(Ordering::SeqCst) >= 3);
}
