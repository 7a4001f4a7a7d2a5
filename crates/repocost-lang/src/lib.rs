//! # repocost-lang
//!
//! **Tier 1 (Classification)**
//!
//! Maps file names to language labels and holds the per-language tables the
//! line counter and complexity heuristic consult.
//!
//! The tables are closed: the default [`LanguageCatalog`] is built once per
//! process and never mutated. Tests (and embedders) can build their own
//! catalog with [`LanguageCatalog::new`] and the `with_*` builders.
//!
//! ## Default tables
//!
//! | Language | Extensions | Comment markers | Complexity rule |
//! |---|---|---|---|
//! | R | `.r` | `#` | yes |
//! | JavaScript | `.js .jsx` | `//`, `/*`, `*` | yes |
//! | TypeScript | `.ts .tsx` | `//`, `/*`, `*` | yes |
//! | Python | `.py` | `#` | yes |
//! | CSS | `.css` | `/*`, `*` | |
//! | Sass | `.scss .sass` | `//`, `/*`, `*` | |
//! | HTML | `.html .htm` | `<!--` | |
//! | Shell | `.sh` | `#` | |
//! | SQL | `.sql` | `--`, `/*`, `*` | |
//! | C, C++, Java | `.c`, `.cpp`, `.java` | `//`, `/*`, `*` | |
//!
//! Markdown, Quarto, YAML, JSON, XML, SVG, TeX, Plain Text, C Header and
//! License are classified but have no comment markers.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Regex, RegexSet};
use repocost_types::{LICENSE_LANGUAGE, OTHER_LANGUAGE};

const EXTENSIONS: &[(&str, &str)] = &[
    ("r", "R"),
    ("js", "JavaScript"),
    ("jsx", "JavaScript"),
    ("ts", "TypeScript"),
    ("tsx", "TypeScript"),
    ("css", "CSS"),
    ("scss", "Sass"),
    ("sass", "Sass"),
    ("html", "HTML"),
    ("htm", "HTML"),
    ("md", "Markdown"),
    ("rmd", "Markdown"),
    ("qmd", "Quarto"),
    ("yml", "YAML"),
    ("yaml", "YAML"),
    ("json", "JSON"),
    ("xml", "XML"),
    ("svg", "SVG"),
    ("py", "Python"),
    ("tex", "TeX"),
    ("sh", "Shell"),
    ("txt", "Plain Text"),
    ("license", LICENSE_LANGUAGE),
    ("c", "C"),
    ("cpp", "C++"),
    ("h", "C Header"),
    ("java", "Java"),
    ("sql", "SQL"),
];

const HASH: &[&str] = &[r"^\s*#"];
const C_STYLE: &[&str] = &[r"^\s*//", r"^\s*/\*", r"^\s*\*"];
const BLOCK_ONLY: &[&str] = &[r"^\s*/\*", r"^\s*\*"];
const SQL_STYLE: &[&str] = &[r"^\s*--", r"^\s*/\*", r"^\s*\*"];
const MARKUP: &[&str] = &[r"^\s*<!--"];

const COMMENT_PATTERNS: &[(&str, &[&str])] = &[
    ("R", HASH),
    ("JavaScript", C_STYLE),
    ("TypeScript", C_STYLE),
    ("CSS", BLOCK_ONLY),
    ("Sass", C_STYLE),
    ("HTML", MARKUP),
    ("Python", HASH),
    ("Shell", HASH),
    ("SQL", SQL_STYLE),
    ("C", C_STYLE),
    ("C++", C_STYLE),
    ("Java", C_STYLE),
];

const R_COMPLEXITY: &str = r"function\s*\(|for\s*\(|while\s*\(|if\s*\(";
const JS_COMPLEXITY: &str = r"function\s+|=>|for\s*\(|while\s*\(|if\s*\(|class\s+";
const PY_COMPLEXITY: &str = r"def\s+|class\s+|for\s+|while\s+|if\s+";

const COMPLEXITY_PATTERNS: &[(&str, &str)] = &[
    ("R", R_COMPLEXITY),
    ("JavaScript", JS_COMPLEXITY),
    ("TypeScript", JS_COMPLEXITY),
    ("Python", PY_COMPLEXITY),
];

static DEFAULT_CATALOG: LazyLock<LanguageCatalog> = LazyLock::new(|| {
    let mut catalog = LanguageCatalog::new(EXTENSIONS.iter().copied());
    for (lang, patterns) in COMMENT_PATTERNS {
        catalog = catalog
            .with_comment_patterns(lang, patterns)
            .expect("valid regex literal");
    }
    for (lang, pattern) in COMPLEXITY_PATTERNS {
        catalog = catalog
            .with_complexity_pattern(lang, pattern)
            .expect("valid regex literal");
    }
    catalog
});

/// Extension table plus the comment and complexity rules keyed by language.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    extensions: BTreeMap<String, String>,
    comments: BTreeMap<String, RegexSet>,
    complexity: BTreeMap<String, Regex>,
}

impl LanguageCatalog {
    /// Catalog with the given `(extension, language)` pairs and no rules.
    ///
    /// Extensions are given without the leading dot and matched
    /// case-insensitively.
    pub fn new<'a>(extensions: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            extensions: extensions
                .into_iter()
                .map(|(ext, lang)| (ext.trim_start_matches('.').to_lowercase(), lang.to_string()))
                .collect(),
            comments: BTreeMap::new(),
            complexity: BTreeMap::new(),
        }
    }

    /// The process-wide default catalog.
    pub fn default_catalog() -> &'static LanguageCatalog {
        &DEFAULT_CATALOG
    }

    /// Register line-start comment patterns for `language`.
    pub fn with_comment_patterns(
        mut self,
        language: &str,
        patterns: &[&str],
    ) -> Result<Self, regex::Error> {
        let set = RegexSet::new(patterns)?;
        self.comments.insert(language.to_string(), set);
        Ok(self)
    }

    /// Register the complexity-marker pattern for `language`.
    pub fn with_complexity_pattern(
        mut self,
        language: &str,
        pattern: &str,
    ) -> Result<Self, regex::Error> {
        self.complexity
            .insert(language.to_string(), Regex::new(pattern)?);
        Ok(self)
    }

    /// Classify a path by its file name.
    pub fn classify(&self, path: &Path) -> &str {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        self.classify_name(&name)
    }

    /// Classify a bare file name.
    ///
    /// Extension lookup is case-insensitive. A name without extension that
    /// mentions LICENSE/LICENCE is the License pseudo-language; anything
    /// unknown is `Other`.
    pub fn classify_name(&self, name: &str) -> &str {
        let Some(ext) = extension_of(name) else {
            if is_license_name(name) {
                return LICENSE_LANGUAGE;
            }
            return OTHER_LANGUAGE;
        };

        self.extensions
            .get(&ext.to_lowercase())
            .map(String::as_str)
            .unwrap_or(OTHER_LANGUAGE)
    }

    /// Comment patterns for `language`, if any are registered.
    pub fn comment_syntax(&self, language: &str) -> Option<&RegexSet> {
        self.comments.get(language)
    }

    /// Complexity-marker pattern for `language`, if one is registered.
    pub fn complexity_rule(&self, language: &str) -> Option<&Regex> {
        self.complexity.get(language)
    }

    /// Every distinct language label reachable through the extension table.
    pub fn languages(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.extensions.values().map(String::as_str).collect();
        out.sort_unstable();
        out.dedup();
        out
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        DEFAULT_CATALOG.clone()
    }
}

/// Text after the last `.`, unless only dots precede it (`.gitignore`).
///
/// A trailing dot is an empty extension, not a missing one.
fn extension_of(name: &str) -> Option<&str> {
    let idx = name.rfind('.')?;
    if name[..idx].chars().all(|c| c == '.') {
        return None;
    }
    Some(&name[idx + 1..])
}

fn is_license_name(name: &str) -> bool {
    let upper = name.to_uppercase();
    upper.contains("LICENSE") || upper.contains("LICENCE")
}
