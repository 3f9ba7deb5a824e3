//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use std::path::PathBuf;

use clap::{Args, Subcommand};

pub mod config;
pub mod interactive;
pub mod search;

use crate::app::AppContext;
use crate::error::Result;
use crate::render::{FileContainer, OutputFormat, ResultsContainer, StdoutContainer};

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Search(args) => search::run(ctx, args),
        Commands::Interactive(args) => interactive::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one query against the index and print the results
    Search(search::SearchArgs),

    /// Read queries from stdin, one per line, re-rendering after each
    Interactive(interactive::InteractiveArgs),

    /// Show the resolved configuration
    Config(config::ConfigArgs),
}

/// Where the index comes from and where results go.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Site root: base URL or local directory of the built site
    #[arg(long)]
    pub site: Option<String>,

    /// Index path relative to the site root
    #[arg(long)]
    pub index_path: Option<String>,

    /// Write results to this file instead of stdout (replaced on every render)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,
}

impl SourceArgs {
    pub(crate) fn container(&self) -> Box<dyn ResultsContainer> {
        match &self.output {
            Some(path) => Box::new(FileContainer::new(path)),
            None => Box::new(StdoutContainer),
        }
    }
}
