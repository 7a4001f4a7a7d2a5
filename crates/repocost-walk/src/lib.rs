//! # repocost-walk
//!
//! **Tier 2 (Utilities)**
//!
//! Lists the regular files under a scan root, relative to it, in sorted
//! order.
//!
//! ## What belongs here
//! * Filesystem traversal
//! * Optional ignore-file handling
//!
//! ## What does NOT belong here
//! * Exclusion and binary checks (use repocost-exclude)
//! * Reading file content (use repocost-content)

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use ignore::WalkBuilder;
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Honour `.gitignore`, `.ignore` and the global git excludes.
    pub respect_gitignore: bool,
}

/// Every regular file under `root`, relative to `root`, sorted by path.
///
/// Hidden files are included. Symlinked directories are not descended
/// into; a symlink whose target is a file is listed like a file. Entries
/// the walker cannot read are logged and skipped.
pub fn list_files(root: &Path, options: &WalkOptions) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        bail!("Path not found: {}", root.display());
    }
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.hidden(false);
    builder.follow_links(false);
    if options.respect_gitignore {
        builder.git_ignore(true);
        builder.git_exclude(true);
        builder.git_global(true);
        builder.ignore(true);
        builder.parents(true);
        builder.require_git(false);
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable walk entry");
                continue;
            }
        };
        let is_file = match entry.file_type() {
            Some(t) if t.is_symlink() => entry.path().is_file(),
            Some(t) => t.is_file(),
            None => false,
        };
        if !is_file {
            continue;
        }
        let path = entry.path();
        let rel = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        // a file given as the root lists as the empty path
        if rel.as_os_str().is_empty() {
            continue;
        }
        files.push(rel);
    }

    files.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("R")).unwrap();
        fs::create_dir_all(dir.path().join(".hidden")).unwrap();
        fs::write(dir.path().join("R/b.R"), "x\n").unwrap();
        fs::write(dir.path().join("a.py"), "x\n").unwrap();
        fs::write(dir.path().join(".hidden/c.sh"), "x\n").unwrap();
        dir
    }

    #[test]
    fn lists_hidden_files_in_sorted_order() {
        let dir = tree();
        let files = list_files(dir.path(), &WalkOptions::default()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(names, vec![".hidden/c.sh", "R/b.R", "a.py"]);
    }

    #[test]
    fn gitignore_is_ignored_by_default() {
        let dir = tree();
        fs::write(dir.path().join(".gitignore"), "a.py\n").unwrap();
        let files = list_files(dir.path(), &WalkOptions::default()).unwrap();
        assert!(files.iter().any(|p| p == Path::new("a.py")));
    }

    #[test]
    fn gitignore_is_honoured_on_request() {
        let dir = tree();
        fs::write(dir.path().join(".gitignore"), "a.py\n").unwrap();
        let options = WalkOptions {
            respect_gitignore: true,
            ..WalkOptions::default()
        };
        let files = list_files(dir.path(), &options).unwrap();
        assert!(!files.iter().any(|p| p == Path::new("a.py")));
        assert!(files.iter().any(|p| p == Path::new(".gitignore")));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_file_is_listed_but_symlinked_dir_is_not_entered() {
        let dir = tree();
        let outside = tempfile::tempdir().unwrap();
        fs::write(outside.path().join("lib.py"), "x\n").unwrap();
        std::os::unix::fs::symlink(dir.path().join("a.py"), dir.path().join("link.py")).unwrap();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("linked_dir")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.py"), dir.path().join("dangling.py"))
            .unwrap();

        let files = list_files(dir.path(), &WalkOptions::default()).unwrap();

        assert!(files.iter().any(|p| p == Path::new("link.py")));
        assert!(!files.iter().any(|p| p.starts_with("linked_dir")));
        assert!(!files.iter().any(|p| p == Path::new("dangling.py")));
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_files(&dir.path().join("nope"), &WalkOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Path not found"));
    }
}
