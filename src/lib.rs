pub mod bootstrap;
pub mod cli;

use clap::Parser;
use pp_platform::app_dirs::DirsAppDirsAdapter;

use crate::cli::Cli;

/// Process entry: parse arguments, start logging, wire and run one command.
pub async fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let app_dirs = DirsAppDirsAdapter::new();

    if let Err(e) = bootstrap::tracing::init_tracing_subscriber(&app_dirs) {
        eprintln!("Failed to initialize tracing: {e}");
    }

    let deps = bootstrap::wire_dependencies(&app_dirs)?;
    bootstrap::execute(&deps, cli.command).await
}
