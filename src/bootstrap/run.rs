use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::{Context, Result};
use pp_app::usecases::ClipboardReport;
use pp_platform::runtime::{command_channel, ClipboardPollRuntime, MonitorCommandSender};
use tracing::{info, info_span, warn, Instrument};

use super::wiring::AppDeps;
use crate::cli::Command;

const COMMAND_CHANNEL_CAPACITY: usize = 8;

/// Executes one CLI command against wired dependencies.
pub async fn execute(deps: &AppDeps, command: Command) -> Result<()> {
    match command {
        Command::Run { poll_interval_ms } => run_monitor(deps, poll_interval_ms).await,
        Command::Clean => {
            let outcome = deps.monitor().force_clean().await?;
            println!("{}", serde_json::to_string(&outcome)?);
            Ok(())
        }
        Command::Enable => set_enabled(deps, true).await,
        Command::Disable => set_enabled(deps, false).await,
        Command::Status => {
            let enabled = deps.get_cleaning_enabled().execute().await?;
            println!("{}", enabled_label(enabled));
            Ok(())
        }
        Command::Probe { json } => {
            let report = deps.inspect_clipboard().execute().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_report(&report));
            }
            Ok(())
        }
    }
}

async fn set_enabled(deps: &AppDeps, enabled: bool) -> Result<()> {
    let changed = deps.set_cleaning_enabled().execute(enabled).await?;
    if changed {
        println!("{}", enabled_label(enabled));
    } else {
        println!("{} (unchanged)", enabled_label(enabled));
    }
    Ok(())
}

pub fn enabled_label(enabled: bool) -> &'static str {
    if enabled {
        "cleaning enabled"
    } else {
        "cleaning disabled"
    }
}

async fn run_monitor(deps: &AppDeps, poll_interval_override: Option<u64>) -> Result<()> {
    let mut monitor_settings = deps
        .settings
        .load()
        .await
        .context("load settings")?
        .monitor;
    if let Some(ms) = poll_interval_override {
        monitor_settings.poll_interval_ms = ms;
    }
    let poll_interval = monitor_settings.poll_interval();

    let (command_tx, command_rx) = command_channel(COMMAND_CHANNEL_CAPACITY);
    forward_clean_signal(command_tx)?;

    let runtime = ClipboardPollRuntime::new(Arc::new(deps.monitor()), command_rx, poll_interval);
    let span = info_span!("bootstrap.run_monitor", poll_interval_ms = poll_interval.as_millis() as u64);
    runtime.run(shutdown_signal()).instrument(span).await;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received"),
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl+C, running until killed");
            std::future::pending::<()>().await;
        }
    }
}

/// SIGUSR1 triggers a manual clean of the running monitor.
#[cfg(unix)]
fn forward_clean_signal(command_tx: MonitorCommandSender) -> Result<()> {
    use pp_platform::ipc::MonitorCommand;
    use tokio::signal::unix::{signal, SignalKind};

    let mut usr1 = signal(SignalKind::user_defined1()).context("install SIGUSR1 handler")?;
    tokio::spawn(async move {
        while usr1.recv().await.is_some() {
            if command_tx.send(MonitorCommand::CleanNow).await.is_err() {
                break;
            }
        }
    });
    Ok(())
}

#[cfg(not(unix))]
fn forward_clean_signal(_command_tx: MonitorCommandSender) -> Result<()> {
    Ok(())
}

/// Human-readable form of `probe` output.
pub fn render_report(report: &ClipboardReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "change_count: {}", report.change_count);
    let _ = writeln!(out, "classification: {:?}", report.classification);
    for (index, entry) in report.entries.iter().enumerate() {
        let _ = writeln!(out, "entry {index}:");
        for rep in &entry.representations {
            let marker = if rep.is_marker { " [marker]" } else { "" };
            let _ = writeln!(
                out,
                "  {:<48} {:<10} {:>8} bytes{marker}",
                rep.type_tag,
                rep.category.as_str(),
                rep.size_bytes
            );
        }
    }
    out
}
