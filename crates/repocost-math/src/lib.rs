//! Deterministic numeric helpers.
//!
//! Presentation rounding is round-half-to-even everywhere, so a figure
//! printed on the console, in the CSV and in the HTML report is the same
//! number.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places, ties to even.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// Round a non-negative amount to a whole number, ties to even.
///
/// Negative and non-finite inputs map to 0.
#[must_use]
pub fn round_whole(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round_ties_even() as u64
}

/// `numer / denom`, or `fallback` when `denom` is not strictly positive.
#[must_use]
pub fn guarded_div(numer: f64, denom: f64, fallback: f64) -> f64 {
    if denom > 0.0 { numer / denom } else { fallback }
}

/// Bytes expressed in SI megabytes (10^6).
#[must_use]
pub fn si_megabytes(bytes: u64) -> f64 {
    bytes as f64 / 1_000_000.0
}
