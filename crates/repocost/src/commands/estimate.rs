use anyhow::Result;

use repocost_config::EstimateArgs;
use repocost_format as format;
use repocost_types::SizeInput;

use crate::config::{self, ResolvedConfig};

pub(crate) fn handle(args: &EstimateArgs, resolved: &ResolvedConfig) -> Result<()> {
    let params = config::resolve_parameters(&args.estimator, resolved);
    let result = repocost_estimate::estimate(&SizeInput::CodeLines(args.lines), &params)?;
    print!("{}", format::render_estimate_report(&result));
    print!("{}", format::render_breakdown(&result));
    Ok(())
}
