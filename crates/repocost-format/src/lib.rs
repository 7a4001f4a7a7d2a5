//! # repocost-format
//!
//! **Tier 3 (Formatting)**
//!
//! Turns a [`LangReport`] and an [`EstimationResult`] into console text and
//! persisted reports. Nothing here computes; every figure is read from the
//! core structures and rounded for display.
//!
//! ## What belongs here
//! * Console tables and summaries
//! * CSV, HTML and plain-text report writers
//! * Display rounding and number formatting
//!
//! ## What does NOT belong here
//! * The cost model (use repocost-estimate)
//! * Deciding which formats to write (the CLI resolves that)

use repocost_math::{round_f64, round_whole};
use repocost_types::{EstimationResult, PricingAdjustment};

mod console;
mod writers;

pub use console::{
    NO_FILES_MESSAGE, render_breakdown, render_estimate_report, render_lang_table,
    render_realistic_summary,
};
pub use writers::{write_csv_to, write_html_to, write_outputs, write_txt_to};

/// Horizontal rule used by every console and text table.
pub(crate) fn rule() -> String {
    "-".repeat(79)
}

/// Integer with `,` thousands separators.
///
/// # Examples
///
/// ```
/// use repocost_format::thousands;
///
/// assert_eq!(thousands(0), "0");
/// assert_eq!(thousands(999), "999");
/// assert_eq!(thousands(1_234_567), "1,234,567");
/// ```
#[must_use]
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `$1,234` style dollar amount.
#[must_use]
pub fn dollars(n: u64) -> String {
    format!("${}", thousands(n))
}

/// A value rounded to two decimals in its shortest form (`7.43`, `24`).
#[must_use]
pub fn figure(value: f64) -> String {
    format!("{}", round_f64(value, 2))
}

/// Display-ready figures of one estimate, rounded once.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedEstimate {
    pub code_lines: u64,
    pub effort: f64,
    pub final_people: f64,
    pub final_schedule: f64,
    pub realistic_cost: u64,
    pub average_monthly_cost: u64,
    pub confidence_low: u64,
    pub confidence_high: u64,
    /// Schedule premium percentage, when the schedule was compressed.
    pub schedule_premium_percent: Option<u32>,
    /// Coordination premium percentage, when charged instead.
    pub coordination_percent: Option<u32>,
}

impl From<&EstimationResult> for RoundedEstimate {
    fn from(r: &EstimationResult) -> Self {
        let (schedule_premium_percent, coordination_percent) = match r.pricing {
            PricingAdjustment::SchedulePremium { .. } => (Some(r.pricing.surcharge_percent()), None),
            PricingAdjustment::CoordinationPremium { .. } => {
                (None, Some(r.pricing.surcharge_percent()))
            }
            PricingAdjustment::None => (None, None),
        };
        Self {
            code_lines: r.code_lines,
            effort: round_f64(r.effort, 2),
            final_people: round_f64(r.final_people, 2),
            final_schedule: round_f64(r.final_schedule, 2),
            realistic_cost: round_whole(r.realistic_cost),
            average_monthly_cost: round_whole(r.average_monthly_cost),
            confidence_low: round_whole(r.confidence.low),
            confidence_high: round_whole(r.confidence.high),
            schedule_premium_percent,
            coordination_percent,
        }
    }
}
