//! Path normalization shared by the walker, the exclusion filter and the
//! report rows.

use std::path::Path;

/// Normalize path separators to `/`.
///
/// # Examples
///
/// ```
/// use repocost_path::normalize_slashes;
///
/// assert_eq!(normalize_slashes(r"foo\bar\baz.r"), "foo/bar/baz.r");
/// assert_eq!(normalize_slashes("already/fine"), "already/fine");
/// ```
#[must_use]
pub fn normalize_slashes(path: &str) -> String {
    if path.contains('\\') {
        path.replace('\\', "/")
    } else {
        path.to_string()
    }
}

/// Normalize a relative path for display:
/// - converts `\` to `/`
/// - strips one leading `./`
///
/// # Examples
///
/// ```
/// use repocost_path::normalize_rel_path;
///
/// assert_eq!(normalize_rel_path("./R/app.R"), "R/app.R");
/// assert_eq!(normalize_rel_path(r".\R\app.R"), "R/app.R");
/// assert_eq!(normalize_rel_path("R/app.R"), "R/app.R");
/// ```
#[must_use]
pub fn normalize_rel_path(path: &str) -> String {
    let normalized = normalize_slashes(path);
    if let Some(stripped) = normalized.strip_prefix("./") {
        stripped.to_string()
    } else {
        normalized
    }
}

/// Form of `path` used for fragment matching: `/` separators and always a
/// leading `/`, so a fragment like `/.git/` also hits `.git/config` at the
/// scan root.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use repocost_path::match_form;
///
/// assert_eq!(match_form(Path::new(".git/config")), "/.git/config");
/// assert_eq!(match_form(Path::new("./src/main.py")), "/src/main.py");
/// assert_eq!(match_form(Path::new("/abs/repo/x.r")), "/abs/repo/x.r");
/// ```
#[must_use]
pub fn match_form(path: &Path) -> String {
    let rel = normalize_rel_path(&path.to_string_lossy());
    if rel.starts_with('/') {
        rel
    } else {
        format!("/{rel}")
    }
}
