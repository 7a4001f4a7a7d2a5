use std::path::Path;

use repocost_path::{match_form, normalize_rel_path};

#[test]
fn given_windows_separators_when_normalized_then_forward_slashes_are_used() {
    assert_eq!(normalize_rel_path(r".\R\utils\helpers.R"), "R/utils/helpers.R");
}

#[test]
fn given_nested_vcs_dir_when_match_form_is_built_then_fragment_is_visible() {
    let form = match_form(Path::new("pkg/.git/HEAD"));
    assert!(form.contains("/.git/"));
}
