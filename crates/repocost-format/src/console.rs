//! Console text. Every function returns a `String`; the CLI prints it.

use std::fmt::Write as _;

use repocost_math::{round_whole, si_megabytes};
use repocost_types::{EstimationResult, LangReport};

use crate::{RoundedEstimate, dollars, figure, rule, thousands};

pub const NO_FILES_MESSAGE: &str = "No files found to analyze.";

const PREMIUM_COVERS: &str =
    "Premium covers: Senior/expert engineers, overtime, consultants, accelerated tooling";

/// Language table, totals row and the processed-bytes line.
pub fn render_lang_table(report: &LangReport) -> String {
    let rule = rule();
    let mut s = String::new();
    let _ = writeln!(s);
    let _ = writeln!(s, "{rule}");
    let _ = writeln!(
        s,
        "{:<20} {:>9} {:>9} {:>9} {:>9} {:>9} {:>10}",
        "Language", "Files", "Lines", "Blanks", "Comments", "Code", "Complexity"
    );
    let _ = writeln!(s, "{rule}");
    for r in &report.rows {
        let _ = writeln!(
            s,
            "{:<20} {:>9} {:>9} {:>9} {:>9} {:>9} {:>10}",
            r.lang, r.files, r.lines, r.blanks, r.comments, r.code, r.complexity
        );
    }
    let t = &report.total;
    let _ = writeln!(s, "{rule}");
    let _ = writeln!(
        s,
        "{:<20} {:>9} {:>9} {:>9} {:>9} {:>9} {:>10}",
        "Total", t.files, t.lines, t.blanks, t.comments, t.code, t.complexity
    );
    let _ = writeln!(s, "{rule}");
    let _ = writeln!(
        s,
        "Processed {} bytes, {:.3} megabytes (SI)",
        thousands(t.bytes),
        si_megabytes(t.bytes)
    );
    let _ = writeln!(s, "{rule}");
    let _ = writeln!(s);
    s
}

/// The three "(realistic)" headline lines printed after a scan.
pub fn render_realistic_summary(result: &EstimationResult) -> String {
    let e = RoundedEstimate::from(result);
    let mut s = String::new();
    let _ = writeln!(
        s,
        "Estimated Cost to Develop (realistic) {}",
        dollars(e.realistic_cost)
    );
    let _ = writeln!(
        s,
        "Estimated Schedule Effort (realistic) {} months ({:.1} years)",
        figure(e.final_schedule),
        e.final_schedule / 12.0
    );
    let _ = writeln!(
        s,
        "Estimated People Required (realistic) {}",
        figure(e.final_people)
    );
    s
}

/// "Realistic Project Breakdown" block.
pub fn render_breakdown(result: &EstimationResult) -> String {
    let e = RoundedEstimate::from(result);
    let mut s = String::new();
    let _ = writeln!(s);
    let _ = writeln!(s, "Realistic Project Breakdown:");
    let _ = writeln!(
        s,
        "  Total effort required: {} person-months",
        round_whole(e.effort)
    );
    let _ = writeln!(
        s,
        "  Team size: {} people (max allowed: {})",
        round_whole(e.final_people),
        result.people_cap
    );
    let _ = writeln!(
        s,
        "  Timeline: {:.1} months (max allowed: {} months)",
        e.final_schedule, result.schedule_cap
    );
    if let Some(pct) = e.schedule_premium_percent {
        let _ = writeln!(s, "  Cost premium: +{pct}% for aggressive timeline");
        let _ = writeln!(s, "  {PREMIUM_COVERS}");
    } else if let Some(pct) = e.coordination_percent {
        let _ = writeln!(s, "  Coordination overhead: +{pct}% for team size");
    }
    let _ = writeln!(
        s,
        "  Average monthly cost: {}/month",
        dollars(e.average_monthly_cost)
    );
    let _ = writeln!(
        s,
        "  Confidence range: {} - {}",
        dollars(e.confidence_low),
        dollars(e.confidence_high)
    );
    s
}

/// Metric table, parameters and maintenance block of `repocost estimate`.
pub fn render_estimate_report(result: &EstimationResult) -> String {
    let e = RoundedEstimate::from(result);
    let p = &result.parameters;
    let rule = rule();
    let mut s = String::new();

    let _ = writeln!(s);
    let _ = writeln!(s, "{rule}");
    let _ = writeln!(s, "{:<25} {:>12}", "Metric", "Value");
    let _ = writeln!(s, "{rule}");
    let _ = writeln!(s, "{:<25} {:>12}", "Total Code Lines", e.code_lines);
    let _ = writeln!(s, "{:<25} {:>12.2}", "Effort (person-months)", e.effort);
    let _ = writeln!(s, "{:<25} {:>12.2}", "Schedule (months)", e.final_schedule);
    let _ = writeln!(s, "{:<25} {:>12.2}", "People Required", e.final_people);
    let _ = writeln!(
        s,
        "{:<25} ${:>11}",
        "Estimated Cost (USD)",
        thousands(e.realistic_cost)
    );
    let _ = writeln!(
        s,
        "{:<25} {} - {}",
        "Confidence Range",
        dollars(e.confidence_low),
        dollars(e.confidence_high)
    );
    let _ = writeln!(s, "{rule}");
    let _ = writeln!(s, "Parameters Used:");
    let _ = writeln!(s, "  Complexity:        {}", p.complexity);
    let _ = writeln!(s, "  Team Experience:   {}", p.team_experience);
    let _ = writeln!(s, "  Reuse Factor:      {:.2}", p.reuse_factor);
    let _ = writeln!(s, "  Tool Support:      {:.2}", p.tool_support);
    if let Some(pct) = e.schedule_premium_percent {
        let _ = writeln!(s, "  Schedule Premium:  +{pct}%");
    }
    if let Some(pct) = e.coordination_percent {
        let _ = writeln!(s, "  Coordination:      +{pct}%");
    }
    if let Some(m) = &result.maintenance {
        let _ = writeln!(s, "{rule}");
        let _ = writeln!(s, "Maintenance & TCO:");
        let _ = writeln!(
            s,
            "  Annual Maintenance:  {}",
            dollars(round_whole(m.annual_maintenance))
        );
        let _ = writeln!(s, "  Maintenance Years:   {}", m.years);
        let _ = writeln!(s, "  Total Maintenance:   {}", dollars(m.total_maintenance));
        let _ = writeln!(
            s,
            "  Total Cost (TCO):    {}",
            dollars(m.total_cost_of_ownership)
        );
    }
    let _ = writeln!(s, "{rule}");
    let _ = writeln!(s);
    s
}
