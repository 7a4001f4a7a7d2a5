//! # repocost-model
//!
//! **Tier 2 (Aggregation)**
//!
//! Folds [`FileRecord`]s into per-language rows and totals.
//!
//! Rows come out in descending code order. Ties keep the order in which the
//! language was first seen in the input, so a sorted walk gives a
//! reproducible table.

use repocost_types::{FileRecord, LangReport, LangRow, LanguageShare, Totals};

pub fn create_lang_report(records: &[FileRecord]) -> LangReport {
    let mut rows: Vec<LangRow> = Vec::new();

    for record in records {
        match rows.iter_mut().find(|r| r.lang == record.language) {
            Some(row) => row.add(record),
            None => {
                let mut row = LangRow::empty(record.language.clone());
                row.add(record);
                rows.push(row);
            }
        }
    }

    // stable: equal code keeps first-encounter order
    rows.sort_by(|a, b| b.code.cmp(&a.code));

    let mut total = Totals::default();
    for row in &rows {
        total.add_row(row);
    }

    LangReport { rows, total }
}

/// Code lines per language, in report order, for the estimator.
pub fn language_mix(report: &LangReport) -> Vec<LanguageShare> {
    report
        .rows
        .iter()
        .map(|r| LanguageShare {
            language: r.lang.clone(),
            code: r.code as u64,
        })
        .collect()
}
