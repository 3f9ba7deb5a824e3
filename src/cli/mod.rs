//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod output;

pub use commands::Commands;

#[derive(Parser, Debug)]
#[command(name = "sitesearch", version, about = "Full-text search over a static site's JSON index")]
pub struct Cli {
    /// Config file to use instead of the global and project files
    #[arg(long, global = true, env = "SITESEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Machine-readable output: JSON results and JSON logs
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}
