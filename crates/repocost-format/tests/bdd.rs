//! Given/When/Then scenarios for console text and persisted reports.

use repocost_estimate::estimate;
use repocost_format::{
    render_breakdown, render_estimate_report, render_lang_table, render_realistic_summary,
    write_csv_to, write_html_to, write_outputs, write_txt_to,
};
use repocost_settings::{OutputFormat, OutputSettings};
use repocost_types::{
    EstimationParameters, EstimationResult, FileRecord, LangReport, LangRow, LineCounts,
    SizeInput, Totals,
};

fn report_with(rows: Vec<LangRow>) -> LangReport {
    let mut total = Totals::default();
    for row in &rows {
        total.add_row(row);
    }
    LangReport { rows, total }
}

fn r_report() -> LangReport {
    let mut row = LangRow::empty("R");
    row.add(&FileRecord::new(
        "R",
        "analysis.R",
        LineCounts {
            lines: 10,
            blanks: 2,
            comments: 3,
        },
        1,
        120,
    ));
    report_with(vec![row])
}

fn five_thousand_lines() -> EstimationResult {
    estimate(&SizeInput::CodeLines(5000), &EstimationParameters::default()).unwrap()
}

mod console {
    use super::*;

    #[test]
    fn scenario_headline_summary_for_a_small_project() {
        // Given a 5000-line estimate with default parameters
        let result = five_thousand_lines();

        // When the realistic summary is rendered
        let text = render_realistic_summary(&result);

        // Then the three headline lines carry rounded figures
        assert_eq!(
            text,
            "Estimated Cost to Develop (realistic) $109,203\n\
             Estimated Schedule Effort (realistic) 7.43 months (0.6 years)\n\
             Estimated People Required (realistic) 1.68\n"
        );
    }

    #[test]
    fn scenario_breakdown_shows_caps_and_confidence() {
        // Given a 5000-line estimate
        let result = five_thousand_lines();

        // When the breakdown is rendered
        let text = render_breakdown(&result);

        // Then caps and the confidence range are present, no premium line
        assert!(text.contains("  Total effort required: 12 person-months\n"));
        assert!(text.contains("  Team size: 2 people (max allowed: 5)\n"));
        assert!(text.contains("  Timeline: 7.4 months (max allowed: 24 months)\n"));
        assert!(text.contains("  Average monthly cost: $14,706/month\n"));
        assert!(text.contains("  Confidence range: $76,442 - $141,964\n"));
        assert!(!text.contains("premium"));
        assert!(!text.contains("Coordination"));
    }

    #[test]
    fn scenario_compressed_schedule_explains_the_premium() {
        // Given a project far larger than the capped team can deliver in time
        let result =
            estimate(&SizeInput::CodeLines(200_000), &EstimationParameters::default()).unwrap();

        // When the breakdown is rendered
        let text = render_breakdown(&result);

        // Then the premium and its justification appear
        assert!(text.contains("  Cost premium: +100% for aggressive timeline\n"));
        assert!(text.contains("Premium covers: Senior/expert engineers"));
    }

    #[test]
    fn scenario_estimate_report_lists_parameters_and_tco() {
        // Given maintenance projection switched on
        let params = EstimationParameters {
            maintenance_rate: 0.2,
            maintenance_years: 3,
            ..EstimationParameters::default()
        };
        let result = estimate(&SizeInput::CodeLines(5000), &params).unwrap();

        // When the estimate report is rendered
        let text = render_estimate_report(&result);

        // Then metrics, parameters and the TCO block are all present
        assert!(text.contains("Total Code Lines                  5000\n"));
        assert!(text.contains("Effort (person-months)           12.48\n"));
        assert!(text.contains("Estimated Cost (USD)      $    109,203\n"));
        assert!(text.contains("  Complexity:        medium\n"));
        assert!(text.contains("  Reuse Factor:      1.00\n"));
        assert!(text.contains("Maintenance & TCO:\n"));
        assert!(text.contains("  Maintenance Years:   3\n"));
    }

    #[test]
    fn scenario_empty_report_still_renders_a_table() {
        // Given no rows at all
        let report = report_with(Vec::new());

        // When rendered
        let text = render_lang_table(&report);

        // Then the totals are zero and bytes line reads 0
        assert!(text.contains("Processed 0 bytes, 0.000 megabytes (SI)"));
    }
}

mod reports {
    use super::*;

    #[test]
    fn scenario_csv_layout() {
        // Given one R row and the 5000-line estimate
        let report = r_report();
        let result = five_thousand_lines();

        // When written as CSV
        let mut buf = Vec::new();
        write_csv_to(&mut buf, &report, &result).unwrap();
        let text = String::from_utf8(buf).unwrap();

        // Then every row ends in CRLF
        assert!(text.ends_with("Confidence high,141964\r\n"));
        assert!(!text.replace("\r\n", "").contains('\n'));

        // And blocks are separated by blank lines and values are rounded
        insta::assert_snapshot!(text.replace("\r\n", "\n"), @r"
        Language,Files,Lines,Blanks,Comments,Code,Complexity,Bytes
        R,1,10,2,3,5,1,120

        Total,1,10,2,3,5,1,120

        Estimate,Value
        Estimated Cost (USD),109203
        Estimated Schedule (months),7.43
        Estimated People,1.68

        Realistic Project Breakdown,
        Total effort (person-months),12.48
        Team size (people),1.68
        Timeline (months),7.43
        Average monthly cost (USD/month),14706
        Confidence low,76442
        Confidence high,141964
        ");
    }

    #[test]
    fn scenario_csv_quotes_language_names_with_commas() {
        // Given a language label containing a comma
        let report = report_with(vec![LangRow::empty("Odd, Lang")]);

        // When written as CSV
        let mut buf = Vec::new();
        write_csv_to(&mut buf, &report, &five_thousand_lines()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        // Then the field is quoted
        assert!(text.contains("\"Odd, Lang\",0,0,0,0,0,0,0\r\n"));
    }

    #[test]
    fn scenario_csv_appends_maintenance_years() {
        // Given a two-year maintenance projection
        let params = EstimationParameters {
            maintenance_rate: 0.2,
            maintenance_years: 2,
            ..EstimationParameters::default()
        };
        let result = estimate(&SizeInput::CodeLines(5000), &params).unwrap();

        // When written as CSV
        let mut buf = Vec::new();
        write_csv_to(&mut buf, &r_report(), &result).unwrap();
        let text = String::from_utf8(buf).unwrap();

        // Then one row per year follows the breakdown
        assert!(text.contains("\r\n\r\nMaintenance & TCO,\r\n"));
        assert!(text.contains("Year 1 maintenance (USD),"));
        assert!(text.contains("Year 2 maintenance (USD),"));
        assert!(!text.contains("Year 3"));
    }

    #[test]
    fn scenario_html_escapes_language_labels() {
        // Given a hostile language label
        let report = report_with(vec![LangRow::empty("<script>")]);

        // When written as HTML
        let mut buf = Vec::new();
        write_html_to(&mut buf, &report, &five_thousand_lines()).unwrap();
        let html = String::from_utf8(buf).unwrap();

        // Then the label is escaped and the document is closed
        assert!(html.contains("<td>&lt;script&gt;</td>"));
        assert!(!html.contains("<td><script>"));
        assert!(html.contains("<p>Estimated Cost (USD): $109,203</p>"));
        assert!(html.trim_end().ends_with("</body></html>"));
    }

    #[test]
    fn scenario_txt_mirrors_console_text() {
        // Given a report and an estimate
        let report = r_report();
        let result = five_thousand_lines();

        // When written as text
        let mut buf = Vec::new();
        write_txt_to(&mut buf, &report, &result).unwrap();
        let text = String::from_utf8(buf).unwrap();

        // Then it starts with the console table and carries the range
        assert!(text.starts_with(&render_lang_table(&report)));
        assert!(text.contains(&render_realistic_summary(&result)));
        assert!(text.contains("Confidence Range: $76,442 - $141,964\n"));
        assert!(text.contains("  Team size: 1.68 people\n"));
    }

    #[test]
    fn scenario_write_outputs_creates_one_file_per_format() {
        // Given a base path in a scratch directory
        let dir = tempfile::tempdir().unwrap();
        let settings = OutputSettings::new(
            dir.path().join("report"),
            vec![OutputFormat::Csv, OutputFormat::Html, OutputFormat::Txt],
        );

        // When every format is written
        let written = write_outputs(&settings, &r_report(), &five_thousand_lines()).unwrap();

        // Then each file exists with its extension
        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["report.csv", "report.html", "report.txt"]);
        for path in &written {
            assert!(std::fs::metadata(path).unwrap().len() > 0);
        }
    }

    #[test]
    fn scenario_missing_directory_is_an_error() {
        // Given a base path under a directory that does not exist
        let dir = tempfile::tempdir().unwrap();
        let settings = OutputSettings::new(
            dir.path().join("missing").join("report"),
            vec![OutputFormat::Txt],
        );

        // When writing
        let err = write_outputs(&settings, &r_report(), &five_thousand_lines()).unwrap_err();

        // Then the error names the file
        assert!(format!("{err:#}").contains("report.txt"));
    }
}
