pub(crate) mod analyze;
pub(crate) mod estimate;

use anyhow::Result;
use repocost_config as cli;

use crate::config::ResolvedConfig;

pub(crate) fn dispatch(cli: cli::Cli, resolved: &ResolvedConfig) -> Result<()> {
    match cli.command {
        cli::Commands::Analyze(args) => analyze::handle(&args, resolved),
        cli::Commands::Estimate(args) => estimate::handle(&args, resolved),
    }
}
