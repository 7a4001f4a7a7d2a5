//! `TomlConfig::parse` on arbitrary input: errors are fine, panics are not.

#![no_main]
use libfuzzer_sys::fuzz_target;
use repocost_settings::TomlConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = TomlConfig::parse(s);
    }
});
