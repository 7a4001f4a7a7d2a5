use std::fs;
use std::path::Path;

use repocost_exclude::ExclusionRules;

#[test]
fn given_r_project_files_when_filtered_then_session_artifacts_are_excluded() {
    let rules = ExclusionRules::default();
    assert!(rules.is_excluded(Path::new("proj/.Rhistory")));
    assert!(rules.is_excluded(Path::new("proj/.RData")));
    assert!(rules.is_excluded(Path::new("proj/.Rproj.user/abc/sources")));
    assert!(!rules.is_excluded(Path::new("proj/R/model.R")));
}

#[test]
fn given_absolute_scan_paths_when_filtered_then_fragments_still_match() {
    let rules = ExclusionRules::default();
    let dir = tempfile::tempdir().unwrap();
    let cached = dir.path().join("pkg").join("__pycache__").join("m.pyc");
    assert!(rules.is_excluded(&cached));
    assert!(!rules.is_excluded(&dir.path().join("pkg").join("m.py")));
}

#[test]
fn given_text_and_binary_payloads_when_sniffed_then_only_null_bytes_count() {
    let dir = tempfile::tempdir().unwrap();
    let text = dir.path().join("notes.unknown");
    let blob = dir.path().join("blob.unknown");
    fs::write(&text, "ünïcödé is still text\n").unwrap();
    fs::write(&blob, [0x89, b'P', b'N', b'G', 0x00, 0x01]).unwrap();

    let rules = ExclusionRules::default();
    assert!(!rules.is_binary(&text));
    assert!(rules.is_binary(&blob));
}
