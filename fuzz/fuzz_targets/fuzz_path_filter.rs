//! Exclusion and slash normalization over arbitrary path strings.

#![no_main]
use libfuzzer_sys::fuzz_target;
use repocost_exclude::ExclusionRules;
use repocost_path::{match_form, normalize_rel_path};
use std::path::Path;

const MAX_INPUT_SIZE: usize = 4 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    if let Ok(s) = std::str::from_utf8(data) {
        let path = Path::new(s);
        let rules = ExclusionRules::default();
        let _ = rules.is_excluded(path);
        let _ = rules.has_binary_extension(path);
        assert!(match_form(path).starts_with('/'));
        let rel = normalize_rel_path(s);
        assert!(!rel.contains('\\'));
    }
});
