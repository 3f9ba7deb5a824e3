//! sitesearch interactive - live search fed from stdin
//!
//! Every line read is the full current value of the search input. The
//! initial render uses an empty input, so the prompt shows first.

use std::io::BufRead;

use clap::Args;
use tracing::info;

use super::SourceArgs;
use crate::app::AppContext;
use crate::controller::{Controller, Startup};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Initial value of the search input
    #[arg(long, default_value = "")]
    pub initial: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(ctx: &AppContext, args: &InteractiveArgs) -> Result<()> {
    let loader = ctx.loader(args.source.site.as_deref(), args.source.index_path.as_deref())?;
    let startup = Controller::start(
        &loader,
        ctx.scorer(),
        ctx.renderer(args.source.format),
        args.source.container(),
    )?;

    let Startup::Ready(mut controller) = startup else {
        return Ok(());
    };

    let stdin = std::io::stdin();
    let events = stdin.lock().lines().map(|line| line.map_err(Into::into));
    controller.bind(&args.initial, events)?;
    info!("input closed");
    Ok(())
}
