//! Persisted reports: `<basepath>.csv`, `.html`, `.txt`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use repocost_math::round_whole;
use repocost_settings::{OutputFormat, OutputSettings};
use repocost_types::{EstimationResult, LangReport};

use crate::console::{render_lang_table, render_realistic_summary};
use crate::{RoundedEstimate, dollars, figure};

/// Write every requested format next to `settings.basepath`.
///
/// Returns the paths written, in format order.
pub fn write_outputs(
    settings: &OutputSettings,
    report: &LangReport,
    result: &EstimationResult,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(settings.formats.len());
    for &format in &settings.formats {
        let path = settings.path_for(format);
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        match format {
            OutputFormat::Csv => write_csv_to(&mut out, report, result)?,
            OutputFormat::Html => write_html_to(&mut out, report, result)?,
            OutputFormat::Txt => write_txt_to(&mut out, report, result)?,
        }
        out.flush()
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

const CSV_BLANK_LINE: &[u8] = b"\r\n";

fn write_csv_block<W: Write>(out: &mut W, rows: &[Vec<String>]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(&mut *out);
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn row<const N: usize>(cells: [String; N]) -> Vec<String> {
    cells.into()
}

/// CSV: language table, totals, estimate, breakdown, confidence and
/// maintenance blocks separated by blank lines. Rows end in `\r\n`.
pub fn write_csv_to<W: Write>(
    out: &mut W,
    report: &LangReport,
    result: &EstimationResult,
) -> Result<()> {
    let e = RoundedEstimate::from(result);

    let mut table = vec![row([
        "Language".into(),
        "Files".into(),
        "Lines".into(),
        "Blanks".into(),
        "Comments".into(),
        "Code".into(),
        "Complexity".into(),
        "Bytes".into(),
    ])];
    for r in &report.rows {
        table.push(row([
            r.lang.clone(),
            r.files.to_string(),
            r.lines.to_string(),
            r.blanks.to_string(),
            r.comments.to_string(),
            r.code.to_string(),
            r.complexity.to_string(),
            r.bytes.to_string(),
        ]));
    }
    write_csv_block(out, &table)?;
    out.write_all(CSV_BLANK_LINE)?;

    let t = &report.total;
    write_csv_block(
        out,
        &[row([
            "Total".into(),
            t.files.to_string(),
            t.lines.to_string(),
            t.blanks.to_string(),
            t.comments.to_string(),
            t.code.to_string(),
            t.complexity.to_string(),
            t.bytes.to_string(),
        ])],
    )?;
    out.write_all(CSV_BLANK_LINE)?;

    write_csv_block(
        out,
        &[
            row(["Estimate".into(), "Value".into()]),
            row([
                "Estimated Cost (USD)".into(),
                e.realistic_cost.to_string(),
            ]),
            row([
                "Estimated Schedule (months)".into(),
                figure(e.final_schedule),
            ]),
            row(["Estimated People".into(), figure(e.final_people)]),
        ],
    )?;
    out.write_all(CSV_BLANK_LINE)?;

    let mut breakdown = vec![
        row(["Realistic Project Breakdown".into(), String::new()]),
        row(["Total effort (person-months)".into(), figure(e.effort)]),
        row(["Team size (people)".into(), figure(e.final_people)]),
        row(["Timeline (months)".into(), figure(e.final_schedule)]),
        row([
            "Average monthly cost (USD/month)".into(),
            e.average_monthly_cost.to_string(),
        ]),
    ];
    if let Some(pct) = e.schedule_premium_percent {
        breakdown.push(row(["Schedule premium (%)".into(), pct.to_string()]));
    }
    if let Some(pct) = e.coordination_percent {
        breakdown.push(row(["Coordination premium (%)".into(), pct.to_string()]));
    }
    breakdown.push(row(["Confidence low".into(), e.confidence_low.to_string()]));
    breakdown.push(row(["Confidence high".into(), e.confidence_high.to_string()]));
    write_csv_block(out, &breakdown)?;

    if let Some(m) = &result.maintenance {
        out.write_all(CSV_BLANK_LINE)?;
        let mut rows = vec![
            row(["Maintenance & TCO".into(), String::new()]),
            row([
                "Annual maintenance (USD)".into(),
                round_whole(m.annual_maintenance).to_string(),
            ]),
            row(["Maintenance years".into(), m.years.to_string()]),
        ];
        for (i, cost) in m.yearly_costs.iter().enumerate() {
            rows.push(row([
                format!("Year {} maintenance (USD)", i + 1),
                cost.to_string(),
            ]));
        }
        rows.push(row([
            "Total maintenance (USD)".into(),
            m.total_maintenance.to_string(),
        ]));
        rows.push(row([
            "Total cost of ownership (USD)".into(),
            m.total_cost_of_ownership.to_string(),
        ]));
        write_csv_block(out, &rows)?;
    }
    Ok(())
}

/// Escape text for HTML element content and attribute values.
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Minimal standalone HTML page.
pub fn write_html_to<W: Write>(
    out: &mut W,
    report: &LangReport,
    result: &EstimationResult,
) -> Result<()> {
    let e = RoundedEstimate::from(result);
    let t = &report.total;

    writeln!(
        out,
        "<html><head><meta charset=\"utf-8\"><title>Repo Analysis</title></head><body>"
    )?;
    writeln!(out, "<h1>Repository Code Analysis</h1>")?;
    writeln!(out, "<table border=\"1\" cellpadding=\"6\" cellspacing=\"0\">")?;
    writeln!(
        out,
        "<tr><th>Language</th><th>Files</th><th>Lines</th><th>Blanks</th><th>Comments</th><th>Code</th><th>Complexity</th><th>Bytes</th></tr>"
    )?;
    for r in &report.rows {
        writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&r.lang),
            r.files,
            r.lines,
            r.blanks,
            r.comments,
            r.code,
            r.complexity,
            r.bytes
        )?;
    }
    writeln!(out, "</table>")?;
    writeln!(out, "<h2>Totals</h2>")?;
    writeln!(
        out,
        "<p>Files: {} &nbsp; Lines: {} &nbsp; Code: {}</p>",
        t.files, t.lines, t.code
    )?;
    writeln!(out, "<h2>Estimate</h2>")?;
    writeln!(
        out,
        "<p>Estimated Cost (USD): {}</p>",
        dollars(e.realistic_cost)
    )?;
    writeln!(
        out,
        "<p>Estimated Schedule (months): {}</p>",
        figure(e.final_schedule)
    )?;
    writeln!(out, "<p>Estimated People: {}</p>", figure(e.final_people))?;
    writeln!(
        out,
        "<p>Confidence Range: {} - {}</p>",
        dollars(e.confidence_low),
        dollars(e.confidence_high)
    )?;
    writeln!(out, "<h3>Realistic Project Breakdown</h3>")?;
    writeln!(
        out,
        "<p>Total effort required: {} person-months</p>",
        figure(e.effort)
    )?;
    writeln!(out, "<p>Team size: {} people</p>", figure(e.final_people))?;
    writeln!(out, "<p>Timeline: {} months</p>", figure(e.final_schedule))?;
    writeln!(
        out,
        "<p>Average monthly cost: {}/month</p>",
        dollars(e.average_monthly_cost)
    )?;
    if let Some(pct) = e.schedule_premium_percent {
        writeln!(out, "<p>Cost premium: +{pct}% for aggressive timeline</p>")?;
    } else if let Some(pct) = e.coordination_percent {
        writeln!(out, "<p>Coordination overhead: +{pct}% for team size</p>")?;
    }
    if let Some(m) = &result.maintenance {
        writeln!(out, "<h3>Maintenance &amp; TCO</h3>")?;
        writeln!(
            out,
            "<p>Annual Maintenance: {}</p>",
            dollars(round_whole(m.annual_maintenance))
        )?;
        writeln!(
            out,
            "<p>Total Maintenance ({}yr): {}</p>",
            m.years,
            dollars(m.total_maintenance)
        )?;
        writeln!(
            out,
            "<p>Total Cost of Ownership: {}</p>",
            dollars(m.total_cost_of_ownership)
        )?;
    }
    writeln!(out, "</body></html>")?;
    Ok(())
}

/// Plain-text mirror of the console output.
pub fn write_txt_to<W: Write>(
    out: &mut W,
    report: &LangReport,
    result: &EstimationResult,
) -> Result<()> {
    let e = RoundedEstimate::from(result);

    out.write_all(render_lang_table(report).as_bytes())?;
    out.write_all(render_realistic_summary(result).as_bytes())?;
    writeln!(
        out,
        "Confidence Range: {} - {}",
        dollars(e.confidence_low),
        dollars(e.confidence_high)
    )?;
    writeln!(out)?;
    writeln!(out, "Realistic Project Breakdown:")?;
    writeln!(
        out,
        "  Total effort required: {} person-months",
        figure(e.effort)
    )?;
    writeln!(out, "  Team size: {} people", figure(e.final_people))?;
    writeln!(out, "  Timeline: {} months", figure(e.final_schedule))?;
    if let Some(pct) = e.schedule_premium_percent {
        writeln!(out, "  Cost premium: +{pct}% for aggressive timeline")?;
        writeln!(
            out,
            "  Premium covers: Senior/expert engineers, overtime, consultants, accelerated tooling"
        )?;
    } else if let Some(pct) = e.coordination_percent {
        writeln!(out, "  Coordination overhead: +{pct}% for team size")?;
    }
    writeln!(
        out,
        "  Average monthly cost: {}/month",
        dollars(e.average_monthly_cost)
    )?;
    if let Some(m) = &result.maintenance {
        writeln!(out)?;
        writeln!(out, "Maintenance & TCO:")?;
        writeln!(
            out,
            "  Annual Maintenance: {}",
            dollars(round_whole(m.annual_maintenance))
        )?;
        writeln!(
            out,
            "  Total Maintenance ({}yr): {}",
            m.years,
            dollars(m.total_maintenance)
        )?;
        writeln!(
            out,
            "  Total Cost of Ownership: {}",
            dollars(m.total_cost_of_ownership)
        )?;
    }
    Ok(())
}
