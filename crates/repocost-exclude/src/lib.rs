//! # repocost-exclude
//!
//! **Tier 1 (Path Filtering)**
//!
//! Decides which walked files never reach the line counter: paths inside
//! VCS metadata, dependency caches and virtual environments, and files that
//! look binary.
//!
//! ## What belongs here
//! * The exclusion fragment table and its matcher
//! * The binary-extension table and the null-byte sniff
//!
//! ## What does NOT belong here
//! * Directory traversal (see `repocost-walk`)
//! * Language classification (see `repocost-lang`)

#![forbid(unsafe_code)]

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use repocost_path::match_form;

/// Bytes read from the head of a file when sniffing for binary content.
pub const SNIFF_BYTES: usize = 8 * 1024;

/// Path fragments that exclude a file when they occur anywhere in its
/// slash-normalized, `/`-prefixed path.
pub const DEFAULT_FRAGMENTS: &[&str] = &[
    "/.git/",
    "/.Rproj.user/",
    "/node_modules/",
    "/.venv/",
    "/venv/",
    "/__pycache__/",
    "/.DS_Store",
    "/.Rhistory",
    "/.RData",
    "/packrat/",
    "/renv/",
];

/// Lower-case extensions (without the dot) that are binary without looking
/// at the content.
pub const DEFAULT_BINARY_EXTENSIONS: &[&str] = &[
    // images
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "tiff", "webp",
    // fonts
    "woff", "woff2", "ttf", "otf", "eot",
    // R data
    "rds", "rdata", "rda", "rdb", "rdx",
    // compiled
    "pyc", "so", "dylib", "dll", "o", "class", "jar",
    // archives
    "zip", "tar", "gz", "bz2", "xz", "7z", "rar",
    // documents
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx",
    // media
    "mp3", "mp4", "wav", "avi", "mov", "ogg",
    // misc
    "sqlite", "db", "exe", "bin", "dat", "lock",
];

/// Exclusion fragments plus binary-extension set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRules {
    fragments: Vec<String>,
    binary_extensions: BTreeSet<String>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self::new(
            DEFAULT_FRAGMENTS.iter().copied(),
            DEFAULT_BINARY_EXTENSIONS.iter().copied(),
        )
    }
}

impl ExclusionRules {
    /// Build rules from explicit tables.
    ///
    /// Fragments are matched as given (after `\` -> `/`); extensions are
    /// stored lower-case with any leading dot removed.
    pub fn new<'a>(
        fragments: impl IntoIterator<Item = &'a str>,
        binary_extensions: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            fragments: fragments
                .into_iter()
                .map(repocost_path::normalize_slashes)
                .filter(|f| !f.is_empty())
                .collect(),
            binary_extensions: binary_extensions
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    /// `true` when any fragment occurs in the match form of `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use repocost_exclude::ExclusionRules;
    ///
    /// let rules = ExclusionRules::default();
    /// assert!(rules.is_excluded(Path::new("pkg/node_modules/x/index.js")));
    /// assert!(rules.is_excluded(Path::new(".git/HEAD")));
    /// assert!(!rules.is_excluded(Path::new("R/analysis.R")));
    /// ```
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        let form = match_form(path);
        self.fragments.iter().any(|f| form.contains(f.as_str()))
    }

    /// `true` when the (lower-cased) extension is in the binary set.
    #[must_use]
    pub fn has_binary_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .is_some_and(|e| self.binary_extensions.contains(&e))
    }

    /// Binary check: extension table first, then the null-byte sniff.
    ///
    /// A file that cannot be opened or read is reported as binary so the
    /// scan skips it.
    #[must_use]
    pub fn is_binary(&self, path: &Path) -> bool {
        if self.has_binary_extension(path) {
            return true;
        }
        match read_head(path, SNIFF_BYTES) {
            Ok(head) => looks_binary(&head),
            Err(_) => true,
        }
    }
}

/// Read at most `max_bytes` from the start of `path`.
pub fn read_head(path: &Path, max_bytes: usize) -> Result<Vec<u8>> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut buf = vec![0u8; max_bytes];
    let mut filled = 0;
    while filled < max_bytes {
        let n = file
            .read(&mut buf[filled..])
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    buf.truncate(filled);
    Ok(buf)
}

/// A head is binary iff it contains a null byte. Empty input is text.
#[must_use]
pub fn looks_binary(head: &[u8]) -> bool {
    head.contains(&0)
}
