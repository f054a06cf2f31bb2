//! Projection inputs and outputs

use super::{DEFAULT_ANNUAL_BASE_COST, DEFAULT_ANNUAL_GROWTH_RATE, DEFAULT_HORIZON_YEARS};
use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};

/// Inputs for a single projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    /// First-year rental spend in currency units
    #[serde(default = "default_annual_base_cost")]
    pub annual_base_cost: f64,

    /// Fractional year-over-year growth (0.04 = 4%)
    /// Negative values model deflation and are accepted
    #[serde(default = "default_annual_growth_rate")]
    pub annual_growth_rate: f64,

    /// Number of years to project
    /// Signed: zero and negative horizons are rejected by `validate`, not by parsing
    #[serde(default = "default_horizon_years")]
    pub horizon_years: i64,
}

fn default_annual_base_cost() -> f64 { DEFAULT_ANNUAL_BASE_COST }
fn default_annual_growth_rate() -> f64 { DEFAULT_ANNUAL_GROWTH_RATE }
fn default_horizon_years() -> i64 { DEFAULT_HORIZON_YEARS }

impl Default for ProjectionRequest {
    fn default() -> Self {
        Self {
            annual_base_cost: DEFAULT_ANNUAL_BASE_COST,
            annual_growth_rate: DEFAULT_ANNUAL_GROWTH_RATE,
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

impl ProjectionRequest {
    pub fn new(annual_base_cost: f64, annual_growth_rate: f64, horizon_years: i64) -> Self {
        Self {
            annual_base_cost,
            annual_growth_rate,
            horizon_years,
        }
    }

    /// Check the inputs and return the horizon as a year count
    pub fn validate(&self) -> Result<u32> {
        validate_inputs(self.annual_base_cost, self.annual_growth_rate, self.horizon_years)
    }
}

/// Shared input check for both projection formulations
pub(crate) fn validate_inputs(
    annual_base_cost: f64,
    annual_growth_rate: f64,
    horizon_years: i64,
) -> Result<u32> {
    if horizon_years <= 0 {
        return Err(ProjectionError::InvalidArgument(format!(
            "horizon_years must be a positive integer, got {horizon_years}"
        )));
    }
    if !annual_base_cost.is_finite() {
        return Err(ProjectionError::InvalidArgument(format!(
            "annual_base_cost must be finite, got {annual_base_cost}"
        )));
    }
    if !annual_growth_rate.is_finite() {
        return Err(ProjectionError::InvalidArgument(format!(
            "annual_growth_rate must be finite, got {annual_growth_rate}"
        )));
    }
    u32::try_from(horizon_years).map_err(|_| {
        ProjectionError::InvalidArgument(format!(
            "horizon_years {horizon_years} exceeds the supported maximum of {}",
            u32::MAX
        ))
    })
}

/// One year of a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// 1-indexed projection year
    pub year: u32,
    /// Total spend from year 1 through `year`
    pub cumulative_cost: f64,
}
