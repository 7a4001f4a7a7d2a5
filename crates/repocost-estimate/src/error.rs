use thiserror::Error;

/// Why a set of estimation inputs was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error("code_lines must be a non-negative number (got {0})")]
    NegativeCodeLines(i64),

    #[error("{name} must be between {min} and {max} (got {value})")]
    OutOfRange {
        name: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("{name} must be greater than 0 (got {value})")]
    NotPositive { name: &'static str, value: f64 },
}

impl EstimateError {
    /// Name of the offending input.
    pub fn parameter(&self) -> &'static str {
        match self {
            EstimateError::NegativeCodeLines(_) => "code_lines",
            EstimateError::OutOfRange { name, .. } | EstimateError::NotPositive { name, .. } => {
                name
            }
        }
    }
}
