//! Line accounting over arbitrary bytes for every language with rules.

#![no_main]
use libfuzzer_sys::fuzz_target;
use repocost_content::{TextLines, measure};
use repocost_lang::LanguageCatalog;

const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let lines = TextLines::from_bytes(data);
    let catalog = LanguageCatalog::default_catalog();
    for lang in catalog.languages() {
        let (counts, cx) = measure(&lines, lang, catalog);
        assert_eq!(counts.lines, lines.len());
        assert!(counts.code() <= counts.lines);
        assert!(cx <= counts.lines);
    }
});
