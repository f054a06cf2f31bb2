//! Closed-form geometric series projection
//!
//! Equivalent to the iterative engine up to floating-point rounding. The
//! iterative sequence is the one reported; this form is kept for cross-checks
//! and for callers that need a single year without building the sequence.

use super::request::{validate_inputs, ProjectionPoint};
use crate::error::Result;

/// Cumulative cost through `year` as `cost * ((1 + r)^n - 1) / r`
///
/// Falls back to `cost * n` when the rate is zero.
pub fn closed_form_cumulative(annual_base_cost: f64, annual_growth_rate: f64, year: u32) -> f64 {
    let n = f64::from(year);
    if annual_growth_rate == 0.0 {
        return annual_base_cost * n;
    }

    // exp_m1/ln_1p keep precision for small rates; below -100% the base is
    // negative and only powf is defined
    let growth_minus_one = if annual_growth_rate > -1.0 {
        (n * annual_growth_rate.ln_1p()).exp_m1()
    } else {
        (1.0 + annual_growth_rate).powf(n) - 1.0
    };

    annual_base_cost * growth_minus_one / annual_growth_rate
}

/// Full sequence computed point by point from the closed form
pub fn project_closed_form(
    annual_base_cost: f64,
    annual_growth_rate: f64,
    horizon_years: i64,
) -> Result<Vec<ProjectionPoint>> {
    let years = validate_inputs(annual_base_cost, annual_growth_rate, horizon_years)?;

    Ok((1..=years)
        .map(|year| ProjectionPoint {
            year,
            cumulative_cost: closed_form_cumulative(annual_base_cost, annual_growth_rate, year),
        })
        .collect())
}
