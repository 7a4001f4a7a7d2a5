use anyhow::{Context, Result};
use tracing::info;

use repocost_config::AnalyzeArgs;
use repocost_format as format;
use repocost_model as model;
use repocost_scan as scan;
use repocost_types::SizeInput;

use crate::config::{self, ResolvedConfig};

pub(crate) fn handle(args: &AnalyzeArgs, resolved: &ResolvedConfig) -> Result<()> {
    let params = config::resolve_parameters(&args.estimator, resolved);
    // Bad parameters fail before the walk.
    repocost_estimate::validate(&params)?;

    let options = config::resolve_scan_options(args, resolved);
    let outcome = scan::scan(&args.path, &options)?;
    let report = model::create_lang_report(&outcome.records);

    if report.is_empty() {
        println!("{}", format::NO_FILES_MESSAGE);
        return Ok(());
    }

    print!("{}", format::render_lang_table(&report));

    let size = SizeInput::LanguageMix(model::language_mix(&report));
    let result = repocost_estimate::estimate(&size, &params)?;
    print!("{}", format::render_realistic_summary(&result));

    if let Some(output) = config::resolve_output(args, resolved) {
        let written = format::write_outputs(&output, &report, &result)
            .context("Failed to write reports")?;
        for path in &written {
            info!(path = %path.display(), "wrote report");
        }
    }

    print!("{}", format::render_breakdown(&result));
    Ok(())
}
