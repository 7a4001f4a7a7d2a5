//! # repocost-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the core data structures shared by the scanner, the
//! aggregator, the estimator and the report writers. It contains only data
//! types, Serde definitions and trivial accessors.
//!
//! ## What belongs here
//! * Pure data structs (file records, language rows, estimate results)
//! * Serialization/Deserialization logic
//! * Parameter defaults
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * The cost model itself (see `repocost-estimate`)

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label used for files whose extension is not in the language table.
pub const OTHER_LANGUAGE: &str = "Other";

/// Pseudo-language for license files that carry no extension.
pub const LICENSE_LANGUAGE: &str = "License";

/// Absolute ceiling on team size, applied regardless of the caller's cap.
pub const MAX_REALISTIC_TEAM: u32 = 8;

/// Raw line counts for a single file, before code lines are derived.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineCounts {
    pub lines: usize,
    pub blanks: usize,
    pub comments: usize,
}

impl LineCounts {
    /// Code lines, clamped at zero.
    #[must_use]
    pub fn code(&self) -> usize {
        self.lines
            .saturating_sub(self.blanks)
            .saturating_sub(self.comments)
    }
}

/// One scanned, classified and counted file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRecord {
    pub language: String,
    pub path: String,
    pub lines: usize,
    pub blanks: usize,
    pub comments: usize,
    pub code: usize,
    pub complexity: usize,
    pub bytes: u64,
}

impl FileRecord {
    pub fn new(
        language: impl Into<String>,
        path: impl Into<String>,
        counts: LineCounts,
        complexity: usize,
        bytes: u64,
    ) -> Self {
        Self {
            language: language.into(),
            path: path.into(),
            lines: counts.lines,
            blanks: counts.blanks,
            comments: counts.comments,
            code: counts.code(),
            complexity,
            bytes,
        }
    }
}

/// Per-language summary row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LangRow {
    pub lang: String,
    pub files: usize,
    pub lines: usize,
    pub blanks: usize,
    pub comments: usize,
    pub code: usize,
    pub complexity: usize,
    pub bytes: u64,
}

impl LangRow {
    pub fn empty(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            files: 0,
            lines: 0,
            blanks: 0,
            comments: 0,
            code: 0,
            complexity: 0,
            bytes: 0,
        }
    }

    /// Fold one file record into this row.
    pub fn add(&mut self, record: &FileRecord) {
        self.files += 1;
        self.lines += record.lines;
        self.blanks += record.blanks;
        self.comments += record.comments;
        self.code += record.code;
        self.complexity += record.complexity;
        self.bytes += record.bytes;
    }
}

/// Elementwise sum of every language row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Totals {
    pub files: usize,
    pub lines: usize,
    pub blanks: usize,
    pub comments: usize,
    pub code: usize,
    pub complexity: usize,
    pub bytes: u64,
}

impl Totals {
    pub fn add_row(&mut self, row: &LangRow) {
        self.files += row.files;
        self.lines += row.lines;
        self.blanks += row.blanks;
        self.comments += row.comments;
        self.code += row.code;
        self.complexity += row.complexity;
        self.bytes += row.bytes;
    }
}

/// Language table ordered for reporting plus its totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LangReport {
    pub rows: Vec<LangRow>,
    pub total: Totals,
}

impl LangReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// -----------------------
// Scan outcome
// -----------------------

/// Why a walked file did not produce a [`FileRecord`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The path matched an exclusion fragment (VCS, dependency caches, envs).
    Excluded,
    /// Binary extension, null byte in the head, or the head read failed.
    Binary,
    /// The file could not be read after it passed the binary sniff.
    Unreadable { message: String },
}

impl SkipReason {
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::Excluded => "excluded",
            SkipReason::Binary => "binary",
            SkipReason::Unreadable { .. } => "unreadable",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unreadable { message } => write!(f, "unreadable: {message}"),
            other => f.write_str(other.label()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: String,
    pub reason: SkipReason,
}

/// Everything a scan produced: the records to aggregate and the files it
/// had to leave out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub records: Vec<FileRecord>,
    pub skipped: Vec<SkippedFile>,
}

impl ScanOutcome {
    pub fn push(&mut self, path: String, result: Result<FileRecord, SkipReason>) {
        match result {
            Ok(record) => self.records.push(record),
            Err(reason) => self.skipped.push(SkippedFile { path, reason }),
        }
    }

    pub fn excluded_count(&self) -> usize {
        self.count_skipped(|r| matches!(r, SkipReason::Excluded))
    }

    pub fn binary_count(&self) -> usize {
        self.count_skipped(|r| matches!(r, SkipReason::Binary))
    }

    pub fn unreadable_count(&self) -> usize {
        self.count_skipped(|r| matches!(r, SkipReason::Unreadable { .. }))
    }

    fn count_skipped(&self, pred: impl Fn(&SkipReason) -> bool) -> usize {
        self.skipped.iter().filter(|s| pred(&s.reason)).count()
    }
}

// -----------------------
// Report formats
// -----------------------

/// Persisted report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Csv,
    Html,
    Txt,
}

impl OutputFormat {
    /// File extension written for this format (no dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Html => "html",
            OutputFormat::Txt => "txt",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

// -----------------------
// Estimation inputs
// -----------------------

/// Size/complexity class selecting the effort exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tunable inputs of the cost model.
///
/// Ranges are checked by `repocost_estimate::validate`; this struct only
/// carries values and their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationParameters {
    pub complexity: Complexity,
    /// 1 (novice) ..= 5 (expert).
    pub team_experience: u8,
    pub reuse_factor: f64,
    pub tool_support: f64,
    /// Required software reliability.
    pub rely: f64,
    /// Product complexity.
    pub cplx: f64,
    /// Developed for reusability.
    pub ruse: f64,
    /// Personnel continuity.
    pub pcon: f64,
    /// Applications experience.
    pub apex: f64,
    /// Average annual wage per engineer, in USD.
    pub avg_wage: f64,
    pub max_team_size: u32,
    pub max_schedule_months: u32,
    pub maintenance_rate: f64,
    pub maintenance_years: u32,
}

impl Default for EstimationParameters {
    fn default() -> Self {
        Self {
            complexity: Complexity::Medium,
            team_experience: 4,
            reuse_factor: 1.0,
            tool_support: 1.0,
            rely: 1.0,
            cplx: 1.0,
            ruse: 1.0,
            pcon: 1.0,
            apex: 1.0,
            avg_wage: 105_000.0,
            max_team_size: 5,
            max_schedule_months: 24,
            maintenance_rate: 0.20,
            maintenance_years: 0,
        }
    }
}

/// Code lines attributed to one language, as fed to the estimator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub language: String,
    pub code: u64,
}

/// What the estimator sizes the project from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeInput {
    /// A raw code-line figure; negative values are rejected by validation.
    CodeLines(i64),
    /// Per-language code lines, weighted by language productivity.
    LanguageMix(Vec<LanguageShare>),
}

impl SizeInput {
    /// Total code lines represented by this input (0 for a negative figure).
    pub fn code_lines(&self) -> u64 {
        match self {
            SizeInput::CodeLines(n) => u64::try_from(*n).unwrap_or(0),
            SizeInput::LanguageMix(mix) => mix.iter().map(|s| s.code).sum(),
        }
    }
}

// -----------------------
// Estimation outputs
// -----------------------

/// The nine effort multipliers and their product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplierBreakdown {
    pub experience: f64,
    pub reuse: f64,
    pub tools: f64,
    pub modernization: f64,
    pub rely: f64,
    pub cplx: f64,
    pub ruse: f64,
    pub pcon: f64,
    pub apex: f64,
    pub total: f64,
}

/// Cost inflation picked by the schedule-compression decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingAdjustment {
    /// The natural schedule exceeded the cap and had to be compressed.
    SchedulePremium { compression_ratio: f64, multiplier: f64 },
    /// No compression, but the team is large enough to pay for coordination.
    CoordinationPremium { multiplier: f64 },
    None,
}

impl PricingAdjustment {
    pub fn multiplier(&self) -> f64 {
        match self {
            PricingAdjustment::SchedulePremium { multiplier, .. }
            | PricingAdjustment::CoordinationPremium { multiplier } => *multiplier,
            PricingAdjustment::None => 1.0,
        }
    }

    /// Whole-percent surcharge, truncated (1.7 -> 70).
    pub fn surcharge_percent(&self) -> u32 {
        ((self.multiplier() - 1.0) * 100.0 + 1e-9).max(0.0) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceProjection {
    pub annual_maintenance: f64,
    pub rate: f64,
    pub years: u32,
    /// Rounded cost of each year, inflation applied.
    pub yearly_costs: Vec<u64>,
    pub total_maintenance: u64,
    pub total_cost_of_ownership: u64,
}

/// Full output of one estimator run. Values are unrounded; renderers round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    pub code_lines: u64,
    pub kloc: f64,
    pub base_effort: f64,
    pub multipliers: MultiplierBreakdown,
    /// Person-months.
    pub effort: f64,
    /// Nominal schedule in months, before any cap.
    pub schedule: f64,
    /// Nominal people (effort / schedule).
    pub people: f64,
    /// Flat-rate cost (effort x 12000), kept for comparison.
    pub nominal_cost: f64,
    pub final_people: f64,
    /// Effective team cap: min(max_team_size, 8).
    pub people_cap: u32,
    pub natural_schedule: f64,
    pub final_schedule: f64,
    pub schedule_cap: u32,
    pub pricing: PricingAdjustment,
    pub realistic_cost: f64,
    pub average_monthly_cost: f64,
    pub confidence: ConfidenceInterval,
    pub maintenance: Option<MaintenanceProjection>,
    pub parameters: EstimationParameters,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lang: &str, lines: usize, blanks: usize, comments: usize) -> FileRecord {
        FileRecord::new(
            lang,
            "src/a.r",
            LineCounts {
                lines,
                blanks,
                comments,
            },
            0,
            10,
        )
    }

    #[test]
    fn code_is_lines_minus_blanks_minus_comments() {
        let r = record("R", 10, 2, 3);
        assert_eq!(r.code, 5);
    }

    #[test]
    fn code_clamps_at_zero() {
        let counts = LineCounts {
            lines: 3,
            blanks: 2,
            comments: 2,
        };
        assert_eq!(counts.code(), 0);
    }

    #[test]
    fn lang_row_add_accumulates_every_column() {
        let mut row = LangRow::empty("R");
        row.add(&record("R", 10, 2, 3));
        row.add(&record("R", 4, 1, 0));
        assert_eq!(row.files, 2);
        assert_eq!(row.lines, 14);
        assert_eq!(row.blanks, 3);
        assert_eq!(row.comments, 3);
        assert_eq!(row.code, 8);
        assert_eq!(row.bytes, 20);
    }

    #[test]
    fn scan_outcome_counts_skips_by_reason() {
        let mut out = ScanOutcome::default();
        out.push("a".into(), Err(SkipReason::Excluded));
        out.push("b".into(), Err(SkipReason::Binary));
        out.push("c".into(), Err(SkipReason::Binary));
        out.push(
            "d".into(),
            Err(SkipReason::Unreadable {
                message: "denied".into(),
            }),
        );
        out.push("e".into(), Ok(record("R", 1, 0, 0)));
        assert_eq!(out.excluded_count(), 1);
        assert_eq!(out.binary_count(), 2);
        assert_eq!(out.unreadable_count(), 1);
        assert_eq!(out.records.len(), 1);
    }

    #[test]
    fn surcharge_percent_truncates() {
        let p = PricingAdjustment::SchedulePremium {
            compression_ratio: 3.2,
            multiplier: 1.7,
        };
        assert_eq!(p.surcharge_percent(), 70);
        assert_eq!(
            PricingAdjustment::CoordinationPremium { multiplier: 1.1 }.surcharge_percent(),
            10
        );
        assert_eq!(PricingAdjustment::None.surcharge_percent(), 0);
    }

    #[test]
    fn size_input_code_lines() {
        assert_eq!(SizeInput::CodeLines(-5).code_lines(), 0);
        let mix = SizeInput::LanguageMix(vec![
            LanguageShare {
                language: "R".into(),
                code: 10,
            },
            LanguageShare {
                language: "Python".into(),
                code: 5,
            },
        ]);
        assert_eq!(mix.code_lines(), 15);
    }

    #[test]
    fn default_parameters_match_cli_defaults() {
        let p = EstimationParameters::default();
        assert_eq!(p.complexity, Complexity::Medium);
        assert_eq!(p.team_experience, 4);
        assert_eq!(p.max_team_size, 5);
        assert_eq!(p.max_schedule_months, 24);
        assert_eq!(p.maintenance_years, 0);
    }
}
