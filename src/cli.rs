use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plantcast", version, about = "Weather-driven planting advisor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score today's planting conditions
    Advise {
        /// Location to look up; falls back to the configured default
        location: Option<String>,
    },
    /// Rank the coming days for planting
    Forecast {
        /// Location to look up; falls back to the configured default
        location: Option<String>,

        /// Number of days to fetch
        #[arg(short, long, default_value_t = 5)]
        days: u8,
    },
    /// Validate config and test the upstream connection
    Check,
    /// Re-run interactive setup
    Init,
}
