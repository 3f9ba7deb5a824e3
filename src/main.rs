//! sitesearch - search a static site's JSON index from the terminal.
//!
//! An unreachable or malformed index is not a process failure: the commands
//! render the "index not found" message and exit 0. Only configuration and
//! output errors end up here, with exit status 2 and 1 respectively.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use sitesearch::app::AppContext;
use sitesearch::cli::Cli;
use sitesearch::{Result, SiteError};

/// Log filters by `-v` count; the last entry covers anything higher.
const VERBOSITY_FILTERS: [&str; 4] = [
    "warn,sitesearch=info",
    "info,sitesearch=debug",
    "debug,sitesearch=trace",
    "trace",
];

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e, cli.robot);
            ExitCode::from(e.exit_status())
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    sitesearch::cli::commands::run(&ctx, &cli.command)
}

fn report(error: &SiteError, robot: bool) {
    if robot {
        let error_json = serde_json::json!({
            "error": true,
            "code": error.code(),
            "message": error.to_string(),
        });
        println!("{}", serde_json::to_string(&error_json).unwrap_or_default());
    } else if matches!(error, SiteError::Config(_) | SiteError::MissingConfig(_)) {
        eprintln!("Error: {error}");
        eprintln!("Check the config file and any SITESEARCH_* environment variables.");
    } else {
        eprintln!("Error: {error}");
    }
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let level = usize::from(cli.verbose).min(VERBOSITY_FILTERS.len() - 1);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(VERBOSITY_FILTERS[level]));

    let registry = tracing_subscriber::registry().with(env_filter);
    if cli.robot {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}
