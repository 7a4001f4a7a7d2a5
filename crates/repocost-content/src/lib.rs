//! # repocost-content
//!
//! **Tier 1 (Content Accounting)**
//!
//! Reads one file and turns its lines into [`LineCounts`] plus the
//! complexity proxy.
//!
//! The complexity figure is a count of lines that mention a control-flow or
//! definition keyword. It is a rough size signal, not cyclomatic complexity:
//! a line with three `if`s counts once, and keywords inside strings or
//! comments count too.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::{Regex, RegexSet};
use repocost_lang::LanguageCatalog;
use repocost_types::LineCounts;

/// Decoded file content, split into lines.
///
/// Each line keeps its terminator, normalized to `\n`; the final line may
/// have none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLines {
    lines: Vec<String>,
}

impl TextLines {
    /// Split decoded text on `\r\n`, `\n` or a lone `\r`.
    ///
    /// A final line without a terminator counts; a trailing terminator does
    /// not open an extra empty line.
    ///
    /// # Examples
    ///
    /// ```
    /// use repocost_content::TextLines;
    ///
    /// assert_eq!(TextLines::from_text("a\r\nb").len(), 2);
    /// assert_eq!(TextLines::from_text("a\rb\r").len(), 2);
    /// assert_eq!(TextLines::from_text("a\n\n").len(), 2);
    /// assert!(TextLines::from_text("").is_empty());
    /// ```
    pub fn from_text(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\r' | '\n' => {
                    if ch == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    current.push('\n');
                    lines.push(std::mem::take(&mut current));
                }
                _ => current.push(ch),
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        Self { lines }
    }

    /// UTF-8 decode that drops invalid bytes, then [`TextLines::from_text`].
    ///
    /// ```
    /// use repocost_content::TextLines;
    ///
    /// let lines = TextLines::from_bytes(b"a\xffb\n");
    /// assert_eq!(lines.iter().next(), Some("ab"));
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let text: String = bytes.utf8_chunks().map(|chunk| chunk.valid()).collect();
        Self::from_text(&text)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines without their terminator.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .map(|l| l.strip_suffix('\n').unwrap_or(l))
    }

    /// Lines with their `\n` terminator, where they had one.
    pub fn iter_terminated(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

/// Read and decode a whole file.
pub fn read_text(path: &Path) -> Result<TextLines> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(TextLines::from_bytes(&bytes))
}

/// Whitespace-only (or empty) line.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Count total, blank and comment lines.
///
/// A line is a comment when at least one pattern in `comments` matches it;
/// it is counted once however many match. `None` means the language has no
/// comment syntax and every non-blank line is code.
pub fn count_lines(lines: &TextLines, comments: Option<&RegexSet>) -> LineCounts {
    let mut counts = LineCounts {
        lines: lines.len(),
        ..LineCounts::default()
    };
    for line in lines.iter() {
        if is_blank(line) {
            counts.blanks += 1;
        }
        if comments.is_some_and(|set| set.is_match(line)) {
            counts.comments += 1;
        }
    }
    counts
}

/// Lines containing at least one complexity marker; 0 without a rule.
///
/// Markers are matched against the line with its terminator, so a keyword
/// that ends the line (`... if\n`) still meets a trailing `\s+`.
pub fn complexity(lines: &TextLines, rule: Option<&Regex>) -> usize {
    match rule {
        Some(re) => lines.iter_terminated().filter(|l| re.is_match(l)).count(),
        None => 0,
    }
}

/// Line counts and complexity of `lines` under `language`'s rules.
pub fn measure(
    lines: &TextLines,
    language: &str,
    catalog: &LanguageCatalog,
) -> (LineCounts, usize) {
    let counts = count_lines(lines, catalog.comment_syntax(language));
    let cx = complexity(lines, catalog.complexity_rule(language));
    (counts, cx)
}
