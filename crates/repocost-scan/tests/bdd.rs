//! Given/When/Then scenarios for whole-tree scans.

use std::fs;

use repocost_exclude::ExclusionRules;
use repocost_lang::LanguageCatalog;
use repocost_model::create_lang_report;
use repocost_scan::{Scanner, scan};
use repocost_settings::ScanOptions;

#[test]
fn given_single_r_file_when_scanned_and_aggregated_then_row_matches_line_kinds() {
    // Given a tree with one 10-line R file: 2 blank, 3 comment
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("script.R"),
        "# a\nx <- 1\n\n# b\ny <- 2\n\n# c\nz <- 3\nprint(x)\nprint(y)\n",
    )
    .unwrap();

    // When it is scanned and aggregated
    let outcome = scan(dir.path(), &ScanOptions::default()).unwrap();
    let report = create_lang_report(&outcome.records);

    // Then one R row carries the counts
    assert_eq!(report.rows.len(), 1);
    let row = &report.rows[0];
    assert_eq!(row.lang, "R");
    assert_eq!(row.files, 1);
    assert_eq!(row.lines, 10);
    assert_eq!(row.blanks, 2);
    assert_eq!(row.comments, 3);
    assert_eq!(row.code, 5);
    assert_eq!(report.total.code, 5);
}

#[test]
fn given_gitignored_file_when_respect_flag_set_then_it_is_not_walked() {
    // Given an ignored build artefact
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "build.js\n").unwrap();
    fs::write(dir.path().join("build.js"), "var x = 1;\n").unwrap();
    fs::write(dir.path().join("app.js"), "var y = 2;\n").unwrap();

    // When scanned with and without ignore handling
    let all = scan(dir.path(), &ScanOptions::default()).unwrap();
    let filtered = scan(
        dir.path(),
        &ScanOptions {
            respect_gitignore: true,
        },
    )
    .unwrap();

    // Then only the honouring scan drops it
    assert!(all.records.iter().any(|r| r.path == "build.js"));
    assert!(!filtered.records.iter().any(|r| r.path == "build.js"));
    assert!(filtered.records.iter().any(|r| r.path == "app.js"));
}

#[test]
fn given_custom_tables_when_scanned_then_they_replace_the_defaults() {
    // Given a catalog that only knows Rust and rules that exclude nothing
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(".git/lib.rs"), "// c\nfn main() {}\n").unwrap();
    let catalog = LanguageCatalog::new([("rs", "Rust")])
        .with_comment_patterns("Rust", &[r"^\s*//"])
        .unwrap();
    let rules = ExclusionRules::new(Vec::<&str>::new(), Vec::<&str>::new());

    // When scanned
    let outcome = Scanner::new(&catalog, &rules)
        .scan(dir.path(), &ScanOptions::default())
        .unwrap();

    // Then the VCS file is counted under the custom language
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].language, "Rust");
    assert_eq!(outcome.records[0].comments, 1);
}

#[test]
fn given_nested_tree_when_scanned_then_paths_use_forward_slashes() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/b")).unwrap();
    fs::write(dir.path().join("a/b/c.py"), "pass\n").unwrap();

    let outcome = scan(dir.path(), &ScanOptions::default()).unwrap();

    assert_eq!(outcome.records[0].path, "a/b/c.py");
}
