//! sitesearch config - show the resolved configuration

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print as JSON instead of TOML
    #[arg(long)]
    pub json: bool,
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    if args.json || ctx.robot {
        return emit_json(&ctx.config);
    }
    print!("{}", ctx.config.to_toml()?);
    Ok(())
}
