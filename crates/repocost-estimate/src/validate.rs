use repocost_types::{EstimationParameters, SizeInput};

use crate::EstimateError;

/// Inclusive bounds for each bounded parameter.
pub const TEAM_EXPERIENCE_RANGE: (f64, f64) = (1.0, 5.0);
pub const REUSE_RANGE: (f64, f64) = (0.7, 1.3);
pub const TOOLS_RANGE: (f64, f64) = (0.8, 1.2);
pub const RELY_RANGE: (f64, f64) = (0.82, 1.26);
pub const CPLX_RANGE: (f64, f64) = (0.73, 1.74);
pub const RUSE_RANGE: (f64, f64) = (0.95, 1.24);
pub const PCON_RANGE: (f64, f64) = (0.81, 1.29);
pub const APEX_RANGE: (f64, f64) = (0.81, 1.22);
pub const MAINTENANCE_RATE_RANGE: (f64, f64) = (0.0, 1.0);

fn in_range(name: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), EstimateError> {
    // NaN fails both comparisons
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(EstimateError::OutOfRange {
            name,
            min,
            max,
            value,
        })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), EstimateError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EstimateError::NotPositive { name, value })
    }
}

/// Check every parameter against its documented range.
///
/// The first violation wins, in declaration order.
pub fn validate(params: &EstimationParameters) -> Result<(), EstimateError> {
    in_range(
        "team_experience",
        f64::from(params.team_experience),
        TEAM_EXPERIENCE_RANGE,
    )?;
    in_range("reuse_factor", params.reuse_factor, REUSE_RANGE)?;
    in_range("tool_support", params.tool_support, TOOLS_RANGE)?;
    in_range("rely", params.rely, RELY_RANGE)?;
    in_range("cplx", params.cplx, CPLX_RANGE)?;
    in_range("ruse", params.ruse, RUSE_RANGE)?;
    in_range("pcon", params.pcon, PCON_RANGE)?;
    in_range("apex", params.apex, APEX_RANGE)?;
    positive("avg_wage", params.avg_wage)?;
    positive("max_team_size", f64::from(params.max_team_size))?;
    positive("max_schedule_months", f64::from(params.max_schedule_months))?;
    in_range(
        "maintenance_rate",
        params.maintenance_rate,
        MAINTENANCE_RATE_RANGE,
    )?;
    Ok(())
}

/// Reject negative raw line counts.
pub fn validate_size(size: &SizeInput) -> Result<(), EstimateError> {
    match size {
        SizeInput::CodeLines(n) if *n < 0 => Err(EstimateError::NegativeCodeLines(*n)),
        _ => Ok(()),
    }
}
