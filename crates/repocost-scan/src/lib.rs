//! # repocost-scan
//!
//! **Tier 2 (Scanner)**
//!
//! Runs walk -> exclusion -> binary sniff -> classification -> line
//! accounting for every file under a root and collects the results into a
//! [`ScanOutcome`].
//!
//! ## What belongs here
//! * Per-file pipeline and skip accounting
//! * Scan-level logging
//!
//! ## What does NOT belong here
//! * Aggregation by language (use repocost-model)
//! * Output formatting

use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use repocost_content::{measure, read_text};
use repocost_exclude::ExclusionRules;
use repocost_lang::LanguageCatalog;
use repocost_settings::ScanOptions;
use repocost_types::{FileRecord, ScanOutcome, SkipReason};
use repocost_walk::{WalkOptions, list_files};

/// Tables the scanner consults.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    pub catalog: &'a LanguageCatalog,
    pub rules: &'a ExclusionRules,
}

impl<'a> Scanner<'a> {
    pub fn new(catalog: &'a LanguageCatalog, rules: &'a ExclusionRules) -> Self {
        Self { catalog, rules }
    }

    /// Scan every file under `root`.
    ///
    /// Only a missing root is an error; per-file failures end up in
    /// [`ScanOutcome::skipped`].
    pub fn scan(&self, root: &Path, options: &ScanOptions) -> Result<ScanOutcome> {
        let walk = WalkOptions {
            respect_gitignore: options.respect_gitignore,
        };
        let files = list_files(root, &walk)?;

        let mut outcome = ScanOutcome::default();
        for rel in &files {
            let rel_display = repocost_path::normalize_rel_path(&rel.to_string_lossy());
            let result = self.scan_file(root, rel);
            if let Err(reason) = &result {
                debug!(path = %rel_display, reason = %reason, "skipped file");
            }
            outcome.push(rel_display, result);
        }

        info!(
            root = %root.display(),
            walked = files.len(),
            counted = outcome.records.len(),
            excluded = outcome.excluded_count(),
            binary = outcome.binary_count(),
            unreadable = outcome.unreadable_count(),
            "scan complete"
        );
        Ok(outcome)
    }

    /// Run the per-file pipeline for `rel` (relative to `root`).
    pub fn scan_file(&self, root: &Path, rel: &Path) -> Result<FileRecord, SkipReason> {
        let full = root.join(rel);
        if self.rules.is_excluded(&full) {
            return Err(SkipReason::Excluded);
        }
        if self.rules.is_binary(&full) {
            return Err(SkipReason::Binary);
        }

        let language = self.catalog.classify(rel);
        let lines = read_text(&full).map_err(|e| SkipReason::Unreadable {
            message: format!("{e:#}"),
        })?;
        let (counts, complexity) = measure(&lines, language, self.catalog);
        let bytes = fs::metadata(&full).map(|m| m.len()).unwrap_or(0);

        Ok(FileRecord::new(
            language,
            repocost_path::normalize_rel_path(&rel.to_string_lossy()),
            counts,
            complexity,
            bytes,
        ))
    }
}

/// Scan `root` with the default language catalog and exclusion rules.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<ScanOutcome> {
    let rules = ExclusionRules::default();
    Scanner::new(LanguageCatalog::default_catalog(), &rules).scan(root, options)
}
