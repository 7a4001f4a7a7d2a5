#![no_main]
use libfuzzer_sys::fuzz_target;
use repocost_lang::LanguageCatalog;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        let catalog = LanguageCatalog::default_catalog();
        let first = catalog.classify_name(name);
        // Pure: same input, same label.
        assert_eq!(first, catalog.classify_name(name));
        assert!(!first.is_empty());
    }
});
