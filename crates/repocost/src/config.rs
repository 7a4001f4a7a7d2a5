//! Configuration loading and CLI > TOML > default resolution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use repocost_config::{AnalyzeArgs, EstimatorArgs, GlobalArgs};
use repocost_settings::{
    EstimateConfig, EstimationParameters, OutputSettings, ScanOptions, TomlConfig,
    discover_config,
};

/// The TOML layer in effect for this run.
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    pub toml: TomlConfig,
    /// File it came from; `None` when nothing was loaded.
    pub source: Option<PathBuf>,
}

/// Load the config file named by `--config`, or the discovered one.
///
/// `--no-config` yields an empty layer. An explicit file that is missing or
/// malformed is an error; so is a malformed discovered file.
pub fn load(global: &GlobalArgs) -> Result<ResolvedConfig> {
    if global.no_config {
        return Ok(ResolvedConfig::default());
    }
    let path = match &global.config {
        Some(p) => Some(p.clone()),
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            discover_config(&cwd)
        }
    };
    match path {
        Some(path) => load_file(&path),
        None => Ok(ResolvedConfig::default()),
    }
}

fn load_file(path: &Path) -> Result<ResolvedConfig> {
    let toml = TomlConfig::from_file(path)
        .with_context(|| format!("Failed to parse TOML config {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(ResolvedConfig {
        toml,
        source: Some(path.to_path_buf()),
    })
}

/// Estimator parameters: CLI flags over `[estimate]` over built-in defaults.
pub fn resolve_parameters(cli: &EstimatorArgs, resolved: &ResolvedConfig) -> EstimationParameters {
    let from_toml = resolved
        .toml
        .estimate
        .apply_to(&EstimationParameters::default());
    EstimateConfig::from(cli).apply_to(&from_toml)
}

/// Scan options: `--respect-gitignore` or `[scan] respect_gitignore`.
pub fn resolve_scan_options(args: &AnalyzeArgs, resolved: &ResolvedConfig) -> ScanOptions {
    let mut options = ScanOptions::from(args);
    if !options.respect_gitignore {
        options.respect_gitignore = resolved.toml.scan.respect_gitignore.unwrap_or(false);
    }
    options
}

/// Report targets, only when `--out` is given.
pub fn resolve_output(args: &AnalyzeArgs, resolved: &ResolvedConfig) -> Option<OutputSettings> {
    let basepath = args.out.clone()?;
    let formats = args
        .formats
        .clone()
        .or_else(|| resolved.toml.output.formats.clone())
        .unwrap_or_default();
    Some(OutputSettings::new(basepath, formats))
}
