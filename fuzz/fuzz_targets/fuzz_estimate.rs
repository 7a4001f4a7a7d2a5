//! The estimator must never panic and must keep its caps on any input.

#![no_main]
use libfuzzer_sys::fuzz_target;
use repocost_estimate::estimate;
use repocost_types::{Complexity, EstimationParameters, MAX_REALISTIC_TEAM, SizeInput};

fn f64_at(data: &[u8], i: usize) -> f64 {
    let mut buf = [0u8; 8];
    for (k, b) in buf.iter_mut().enumerate() {
        *b = data.get(i * 8 + k).copied().unwrap_or(0);
    }
    f64::from_le_bytes(buf)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }
    let lines = i64::from_le_bytes(data[..8].try_into().unwrap_or([0; 8]));
    let complexity = match data[8] % 3 {
        0 => Complexity::Low,
        1 => Complexity::Medium,
        _ => Complexity::High,
    };
    let params = EstimationParameters {
        complexity,
        team_experience: data[9],
        reuse_factor: f64_at(data, 2),
        tool_support: f64_at(data, 3),
        max_team_size: u32::from(data[10]),
        max_schedule_months: u32::from(data[11]),
        maintenance_years: u32::from(data[12] % 50),
        avg_wage: f64_at(data, 4),
        ..EstimationParameters::default()
    };

    if let Ok(r) = estimate(&SizeInput::CodeLines(lines), &params) {
        assert!(r.final_people <= f64::from(MAX_REALISTIC_TEAM));
        assert!(r.final_schedule <= f64::from(params.max_schedule_months));
        assert!(r.confidence.low <= r.confidence.high);
    }
});
