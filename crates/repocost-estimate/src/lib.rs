//! # repocost-estimate
//!
//! **Tier 2 (Cost Model)**
//!
//! A COCOMO-style effort model with a "realistic constraints" layer on top.
//!
//! 1. Size: KLOC, optionally weighted by per-language productivity.
//! 2. Effort: `2.5 * KLOC^B` times nine effort multipliers.
//! 3. Schedule: `3.5 * effort^D`, nominal people = effort / schedule.
//! 4. Constraints: the team is capped at `min(max_team_size, 8)`; the
//!    schedule that team would need is capped at `max_schedule_months`.
//! 5. Pricing: compressing the schedule costs a tiered premium; a large
//!    uncompressed team pays a coordination premium.
//! 6. A +/-30% confidence band and an optional maintenance/TCO projection.
//!
//! Everything here is a pure function of its inputs. Results carry
//! unrounded values; rounding happens when rendering.

use std::collections::BTreeMap;

use repocost_math::{guarded_div, round_whole};
use repocost_types::{
    Complexity, ConfidenceInterval, EstimationParameters, EstimationResult, LanguageShare,
    MAX_REALISTIC_TEAM, MaintenanceProjection, MultiplierBreakdown, PricingAdjustment, SizeInput,
};

mod error;
mod validate;

pub use error::EstimateError;
pub use validate::{validate, validate_size};

/// Effort coefficient `A`.
pub const EFFORT_COEFFICIENT: f64 = 2.50;
/// Schedule coefficient `C`.
pub const SCHEDULE_COEFFICIENT: f64 = 3.50;
/// Fixed multiplier for modern languages and practices.
pub const MODERNIZATION_MULTIPLIER: f64 = 0.85;
/// Flat monthly rate behind the nominal cost figure.
pub const NOMINAL_MONTHLY_RATE: f64 = 12_000.0;
pub const COORDINATION_MULTIPLIER: f64 = 1.1;
/// Smallest (fractional) team that pays the coordination premium.
pub const COORDINATION_TEAM_THRESHOLD: f64 = 6.0;
pub const CONFIDENCE_LOW: f64 = 0.70;
pub const CONFIDENCE_HIGH: f64 = 1.30;
/// Yearly growth of maintenance cost.
pub const MAINTENANCE_INFLATION: f64 = 1.05;

const DEFAULT_PRODUCTIVITY: &[(&str, f64)] = &[
    ("R", 1.0),
    ("Python", 1.1),
    ("SQL", 1.3),
    ("JavaScript", 0.9),
    ("CSS", 1.2),
    ("HTML", 1.3),
    ("Markdown", 1.5),
    ("Quarto", 1.5),
    ("YAML", 1.5),
    ("JSON", 1.5),
];

/// Effort exponent `B` for a complexity class.
#[must_use]
pub fn effort_exponent(complexity: Complexity) -> f64 {
    match complexity {
        Complexity::Low => 1.02,
        Complexity::Medium => 1.10,
        Complexity::High => 1.18,
    }
}

/// Schedule exponent `D` derived from `B`.
#[must_use]
pub fn schedule_exponent(effort_exponent: f64) -> f64 {
    0.28 + 0.2 * (effort_exponent - 1.01)
}

/// Experience multiplier: 1.15 for a novice team down to 0.95 for experts.
#[must_use]
pub fn experience_multiplier(team_experience: u8) -> f64 {
    1.2 - 0.05 * f64::from(team_experience)
}

/// Premium for squeezing the natural schedule by `compression_ratio`.
///
/// Tier lower bounds are inclusive: 4.0 and up is 2.0, 3.0 is 1.7, 2.0 is
/// 1.4, anything below is 1.2.
#[must_use]
pub fn schedule_premium(compression_ratio: f64) -> f64 {
    if compression_ratio >= 4.0 {
        2.0
    } else if compression_ratio >= 3.0 {
        1.7
    } else if compression_ratio >= 2.0 {
        1.4
    } else {
        1.2
    }
}

/// Maintenance projection for `years` years, or `None` for zero years.
///
/// Each year is `annual * 1.05^y` rounded to whole dollars; the total is the
/// sum of the rounded years and TCO adds the rounded development cost.
#[must_use]
pub fn project_maintenance(
    realistic_cost: f64,
    rate: f64,
    years: u32,
) -> Option<MaintenanceProjection> {
    if years == 0 {
        return None;
    }
    let annual = realistic_cost * rate;
    let yearly_costs: Vec<u64> = (0..years)
        .map(|y| round_whole(annual * MAINTENANCE_INFLATION.powf(f64::from(y))))
        .collect();
    let total_maintenance: u64 = yearly_costs.iter().sum();
    Some(MaintenanceProjection {
        annual_maintenance: annual,
        rate,
        years,
        yearly_costs,
        total_maintenance,
        total_cost_of_ownership: round_whole(realistic_cost) + total_maintenance,
    })
}

/// The cost model with its language productivity table.
#[derive(Debug, Clone, PartialEq)]
pub struct CostModel {
    productivity: BTreeMap<String, f64>,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            productivity: DEFAULT_PRODUCTIVITY
                .iter()
                .map(|(lang, p)| ((*lang).to_string(), *p))
                .collect(),
        }
    }
}

impl CostModel {
    /// Model with an empty productivity table (every language weighs 1.0).
    pub fn uniform() -> Self {
        Self {
            productivity: BTreeMap::new(),
        }
    }

    /// Set the productivity factor for `language`. Lines of that language
    /// are divided by the factor when sizing a language mix.
    pub fn with_productivity(mut self, language: &str, factor: f64) -> Self {
        self.productivity.insert(language.to_string(), factor);
        self
    }

    /// Productivity factor for `language`; 1.0 when unlisted.
    pub fn productivity(&self, language: &str) -> f64 {
        self.productivity.get(language).copied().unwrap_or(1.0)
    }

    /// Effective size in thousands of lines.
    pub fn kloc(&self, size: &SizeInput) -> f64 {
        match size {
            SizeInput::CodeLines(n) => (*n).max(0) as f64 / 1000.0,
            SizeInput::LanguageMix(mix) => self.weighted_lines(mix) / 1000.0,
        }
    }

    fn weighted_lines(&self, mix: &[LanguageShare]) -> f64 {
        mix.iter()
            .map(|share| {
                let lines = share.code as f64;
                guarded_div(lines, self.productivity(&share.language), lines)
            })
            .sum()
    }

    /// Run the full model.
    pub fn estimate(
        &self,
        size: &SizeInput,
        params: &EstimationParameters,
    ) -> Result<EstimationResult, EstimateError> {
        validate_size(size)?;
        validate(params)?;

        let kloc = self.kloc(size);
        let b = effort_exponent(params.complexity);
        let base_effort = EFFORT_COEFFICIENT * kloc.powf(b);

        let multipliers = multiplier_breakdown(params);
        let effort = base_effort * multipliers.total;

        let d = schedule_exponent(b);
        let schedule = SCHEDULE_COEFFICIENT * effort.powf(d);
        let people = guarded_div(effort, schedule, effort);
        let nominal_cost = effort * NOMINAL_MONTHLY_RATE;

        let people_cap = params.max_team_size.min(MAX_REALISTIC_TEAM);
        let final_people = people.min(f64::from(people_cap));
        let natural_schedule = guarded_div(effort, final_people, effort);
        let schedule_cap = f64::from(params.max_schedule_months);
        let final_schedule = natural_schedule.min(schedule_cap);

        let pricing = if natural_schedule > schedule_cap {
            let compression_ratio = guarded_div(natural_schedule, final_schedule, natural_schedule);
            PricingAdjustment::SchedulePremium {
                compression_ratio,
                multiplier: schedule_premium(compression_ratio),
            }
        } else if final_people >= COORDINATION_TEAM_THRESHOLD {
            PricingAdjustment::CoordinationPremium {
                multiplier: COORDINATION_MULTIPLIER,
            }
        } else {
            PricingAdjustment::None
        };

        let monthly_wage = params.avg_wage / 12.0;
        let realistic_cost = effort * monthly_wage * pricing.multiplier();
        let average_monthly_cost = guarded_div(realistic_cost, final_schedule, 0.0);
        let confidence = ConfidenceInterval {
            low: realistic_cost * CONFIDENCE_LOW,
            high: realistic_cost * CONFIDENCE_HIGH,
        };
        let maintenance = project_maintenance(
            realistic_cost,
            params.maintenance_rate,
            params.maintenance_years,
        );

        Ok(EstimationResult {
            code_lines: size.code_lines(),
            kloc,
            base_effort,
            multipliers,
            effort,
            schedule,
            people,
            nominal_cost,
            final_people,
            people_cap,
            natural_schedule,
            final_schedule,
            schedule_cap: params.max_schedule_months,
            pricing,
            realistic_cost,
            average_monthly_cost,
            confidence,
            maintenance,
            parameters: params.clone(),
        })
    }
}

fn multiplier_breakdown(params: &EstimationParameters) -> MultiplierBreakdown {
    let experience = experience_multiplier(params.team_experience);
    let total = experience
        * params.reuse_factor
        * params.tool_support
        * MODERNIZATION_MULTIPLIER
        * params.rely
        * params.cplx
        * params.ruse
        * params.pcon
        * params.apex;
    MultiplierBreakdown {
        experience,
        reuse: params.reuse_factor,
        tools: params.tool_support,
        modernization: MODERNIZATION_MULTIPLIER,
        rely: params.rely,
        cplx: params.cplx,
        ruse: params.ruse,
        pcon: params.pcon,
        apex: params.apex,
        total,
    }
}

/// [`CostModel::estimate`] with the default productivity table.
pub fn estimate(
    size: &SizeInput,
    params: &EstimationParameters,
) -> Result<EstimationResult, EstimateError> {
    CostModel::default().estimate(size, params)
}
