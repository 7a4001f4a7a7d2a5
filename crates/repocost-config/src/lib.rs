//! # repocost-config
//!
//! **Tier 4 (Configuration)**
//!
//! Clap `Parser`, `Args` and `Subcommand` structs for the `repocost`
//! binary.
//!
//! Every estimator flag is an `Option` so the binary can tell "not given"
//! apart from "given the default value" when layering `repocost.toml`
//! underneath.
//!
//! ## What does NOT belong here
//! * Business logic
//! * Config file parsing (see repocost-settings)

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
pub use repocost_types::{Complexity, OutputFormat};

/// `repocost` scans a repository, counts code/comment/blank lines per
/// language and estimates what the code would cost to build.
#[derive(Parser, Debug)]
#[command(name = "repocost", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Verbose logging on stderr (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read defaults from this TOML file instead of the discovered one.
    #[arg(long, value_name = "FILE", global = true, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore `repocost.toml` and the user config file.
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scan a directory and estimate the cost of the code in it.
    Analyze(AnalyzeArgs),

    /// Estimate cost from a line count alone.
    Estimate(EstimateArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Repository root to scan.
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Base path for written reports (an extension is appended per format).
    #[arg(long, value_name = "BASEPATH")]
    pub out: Option<PathBuf>,

    /// Report formats written with `--out` (default: txt).
    #[arg(long, value_enum, num_args = 1.., value_name = "FORMAT")]
    pub formats: Option<Vec<OutputFormat>>,

    /// Honour .gitignore / .ignore files while walking.
    #[arg(long)]
    pub respect_gitignore: bool,

    #[command(flatten)]
    pub estimator: EstimatorArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct EstimateArgs {
    /// Total code lines.
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub lines: i64,

    #[command(flatten)]
    pub estimator: EstimatorArgs,
}

/// Cost-model parameters shared by both commands.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct EstimatorArgs {
    /// Average annual wage per engineer (USD).
    #[arg(long, value_name = "USD")]
    pub avg_wage: Option<f64>,

    /// Project complexity class.
    #[arg(long, value_enum)]
    pub complexity: Option<Complexity>,

    /// Team experience, 1 (novice) to 5 (expert).
    #[arg(long = "team-exp", value_name = "N")]
    pub team_experience: Option<u8>,

    /// Code reuse factor (0.7 - 1.3).
    #[arg(long = "reuse", value_name = "FACTOR")]
    pub reuse_factor: Option<f64>,

    /// Tool support factor (0.8 - 1.2).
    #[arg(long = "tools", value_name = "FACTOR")]
    pub tool_support: Option<f64>,

    /// Required reliability (0.82 - 1.26).
    #[arg(long)]
    pub rely: Option<f64>,

    /// Product complexity (0.73 - 1.74).
    #[arg(long)]
    pub cplx: Option<f64>,

    /// Developed for reusability (0.95 - 1.24).
    #[arg(long)]
    pub ruse: Option<f64>,

    /// Personnel continuity (0.81 - 1.29).
    #[arg(long)]
    pub pcon: Option<f64>,

    /// Applications experience (0.81 - 1.22).
    #[arg(long)]
    pub apex: Option<f64>,

    /// Largest team the estimate may assume (never more than 8).
    #[arg(long, value_name = "N")]
    pub max_team_size: Option<u32>,

    /// Longest schedule before a compression premium applies.
    #[arg(long, value_name = "MONTHS")]
    pub max_schedule_months: Option<u32>,

    /// Annual maintenance as a fraction of development cost (0 - 1).
    #[arg(long, value_name = "RATE")]
    pub maintenance_rate: Option<f64>,

    /// Years of maintenance to project (0 disables the projection).
    #[arg(long, value_name = "YEARS")]
    pub maintenance_years: Option<u32>,
}

// ============================================================
// Conversions between CLI args and Tier-0 settings
// ============================================================

impl From<&AnalyzeArgs> for repocost_settings::ScanOptions {
    fn from(a: &AnalyzeArgs) -> Self {
        Self {
            respect_gitignore: a.respect_gitignore,
        }
    }
}

impl From<&EstimatorArgs> for repocost_settings::EstimateConfig {
    fn from(a: &EstimatorArgs) -> Self {
        Self {
            avg_wage: a.avg_wage,
            complexity: a.complexity,
            team_experience: a.team_experience,
            reuse_factor: a.reuse_factor,
            tool_support: a.tool_support,
            rely: a.rely,
            cplx: a.cplx,
            ruse: a.ruse,
            pcon: a.pcon,
            apex: a.apex,
            max_team_size: a.max_team_size,
            max_schedule_months: a.max_schedule_months,
            maintenance_rate: a.maintenance_rate,
            maintenance_years: a.maintenance_years,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn analyze_defaults_to_current_dir() {
        let cli = Cli::parse_from(["repocost", "analyze"]);
        match cli.command {
            Commands::Analyze(a) => {
                assert_eq!(a.path, PathBuf::from("."));
                assert!(a.out.is_none());
                assert!(a.formats.is_none());
                assert_eq!(a.estimator, EstimatorArgs::default());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn estimate_parses_every_flag() {
        let cli = Cli::parse_from([
            "repocost",
            "estimate",
            "--lines",
            "5000",
            "--complexity",
            "high",
            "--team-exp",
            "3",
            "--reuse",
            "0.9",
            "--tools",
            "1.1",
            "--avg-wage",
            "90000",
            "--rely",
            "1.1",
            "--cplx",
            "1.2",
            "--ruse",
            "1.0",
            "--pcon",
            "0.9",
            "--apex",
            "1.0",
            "--max-team-size",
            "7",
            "--max-schedule-months",
            "12",
            "--maintenance-rate",
            "0.15",
            "--maintenance-years",
            "4",
        ]);
        let Commands::Estimate(e) = cli.command else {
            panic!("expected estimate");
        };
        assert_eq!(e.lines, 5000);
        assert_eq!(e.estimator.complexity, Some(Complexity::High));
        assert_eq!(e.estimator.team_experience, Some(3));
        assert_eq!(e.estimator.reuse_factor, Some(0.9));
        assert_eq!(e.estimator.max_team_size, Some(7));
        assert_eq!(e.estimator.maintenance_years, Some(4));
    }

    #[test]
    fn formats_take_multiple_values() {
        let cli = Cli::parse_from([
            "repocost", "analyze", "src", "--out", "report", "--formats", "csv", "html",
        ]);
        let Commands::Analyze(a) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(a.formats, Some(vec![OutputFormat::Csv, OutputFormat::Html]));
        assert_eq!(a.out, Some(PathBuf::from("report")));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["repocost", "estimate", "--lines", "1", "-vv", "--no-config"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_config);
    }

    #[test]
    fn config_and_no_config_conflict() {
        let res = Cli::try_parse_from([
            "repocost",
            "--config",
            "x.toml",
            "--no-config",
            "estimate",
            "--lines",
            "1",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn lines_is_required_for_estimate() {
        assert!(Cli::try_parse_from(["repocost", "estimate"]).is_err());
    }
}
