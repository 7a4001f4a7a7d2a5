//! # repocost-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Clap-free settings for the scan and output layers, plus the schema of
//! the `repocost.toml` configuration file.
//!
//! ## What belongs here
//! * Pure data types with Serde derive
//! * The TOML schema and its parse/load helpers
//! * Config file discovery
//!
//! ## What does NOT belong here
//! * Clap parsing (use repocost-config)
//! * Precedence resolution (done by the CLI)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use repocost_types::{Complexity, EstimationParameters, OutputFormat};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "repocost.toml";

/// Scan options consumed by the scanner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Honour `.gitignore` / `.ignore` files while walking.
    #[serde(default)]
    pub respect_gitignore: bool,
}

/// Where persisted reports go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Base path; each format appends its own extension.
    pub basepath: PathBuf,

    #[serde(default = "default_formats")]
    pub formats: Vec<OutputFormat>,
}

impl OutputSettings {
    pub fn new(basepath: impl Into<PathBuf>, formats: Vec<OutputFormat>) -> Self {
        let formats = if formats.is_empty() {
            default_formats()
        } else {
            dedup_formats(formats)
        };
        Self {
            basepath: basepath.into(),
            formats,
        }
    }

    /// `basepath.<ext>` for one format.
    pub fn path_for(&self, format: OutputFormat) -> PathBuf {
        let mut name = self.basepath.as_os_str().to_owned();
        name.push(".");
        name.push(format.extension());
        PathBuf::from(name)
    }
}

pub fn default_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Txt]
}

fn dedup_formats(mut formats: Vec<OutputFormat>) -> Vec<OutputFormat> {
    let mut seen = Vec::with_capacity(formats.len());
    formats.retain(|f| {
        if seen.contains(f) {
            false
        } else {
            seen.push(*f);
            true
        }
    });
    formats
}

// =============================================================================
// TOML Configuration File Structures
// =============================================================================

/// Root of `repocost.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    /// Estimator defaults.
    pub estimate: EstimateConfig,

    /// Report output defaults.
    pub output: OutputConfig,

    /// Scan behaviour.
    pub scan: ScanConfig,
}

/// `[estimate]`: every cost-model parameter, all optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EstimateConfig {
    pub avg_wage: Option<f64>,
    pub complexity: Option<Complexity>,
    pub team_experience: Option<u8>,
    pub reuse_factor: Option<f64>,
    pub tool_support: Option<f64>,
    pub rely: Option<f64>,
    pub cplx: Option<f64>,
    pub ruse: Option<f64>,
    pub pcon: Option<f64>,
    pub apex: Option<f64>,
    pub max_team_size: Option<u32>,
    pub max_schedule_months: Option<u32>,
    pub maintenance_rate: Option<f64>,
    pub maintenance_years: Option<u32>,
}

/// `[output]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Formats written when `--out` is given without `--formats`.
    pub formats: Option<Vec<OutputFormat>>,
}

/// `[scan]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub respect_gitignore: Option<bool>,
}

impl TomlConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

impl EstimateConfig {
    /// Fill every unset field from `base`.
    pub fn apply_to(&self, base: &EstimationParameters) -> EstimationParameters {
        EstimationParameters {
            complexity: self.complexity.unwrap_or(base.complexity),
            team_experience: self.team_experience.unwrap_or(base.team_experience),
            reuse_factor: self.reuse_factor.unwrap_or(base.reuse_factor),
            tool_support: self.tool_support.unwrap_or(base.tool_support),
            rely: self.rely.unwrap_or(base.rely),
            cplx: self.cplx.unwrap_or(base.cplx),
            ruse: self.ruse.unwrap_or(base.ruse),
            pcon: self.pcon.unwrap_or(base.pcon),
            apex: self.apex.unwrap_or(base.apex),
            avg_wage: self.avg_wage.unwrap_or(base.avg_wage),
            max_team_size: self.max_team_size.unwrap_or(base.max_team_size),
            max_schedule_months: self.max_schedule_months.unwrap_or(base.max_schedule_months),
            maintenance_rate: self.maintenance_rate.unwrap_or(base.maintenance_rate),
            maintenance_years: self.maintenance_years.unwrap_or(base.maintenance_years),
        }
    }
}

/// Config file to load when none is given explicitly: `repocost.toml` in
/// `cwd`, else `<config_dir>/repocost/config.toml`.
pub fn discover_config(cwd: &Path) -> Option<PathBuf> {
    let local = cwd.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    let user = dirs::config_dir()?.join("repocost").join("config.toml");
    user.is_file().then_some(user)
}
