use clap::{Parser, Subcommand};

/// Keeps the clipboard in plain text.
#[derive(Debug, Parser)]
#[command(name = "plainpaste", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Watch the clipboard and strip rich text formatting as it appears
    Run {
        /// Override the poll interval from the settings file
        #[arg(long, value_name = "MS")]
        poll_interval_ms: Option<u64>,
    },
    /// Clean the current clipboard once, ignoring marker types
    Clean,
    /// Turn cleaning on
    Enable,
    /// Turn cleaning off (also blocks `clean`)
    Disable,
    /// Print whether cleaning is enabled
    Status,
    /// Describe the current clipboard without modifying it
    Probe {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
