//! sitesearch search - one query, one render

use clap::Args;

use super::SourceArgs;
use crate::app::AppContext;
use crate::controller::{Controller, Startup};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Query text; words are joined with spaces
    pub query: Vec<String>,

    #[command(flatten)]
    pub source: SourceArgs,
}

impl SearchArgs {
    #[must_use]
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let loader = ctx.loader(args.source.site.as_deref(), args.source.index_path.as_deref())?;
    let startup = Controller::start(
        &loader,
        ctx.scorer(),
        ctx.renderer(args.source.format),
        args.source.container(),
    )?;

    // An unavailable index has already been rendered as a message.
    if let Startup::Ready(mut controller) = startup {
        controller.handle_input(&args.query_text())?;
    }
    Ok(())
}
