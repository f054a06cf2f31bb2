//! Headline figures for a completed projection

use super::format::{doubling_time_years, format_currency};
use crate::error::{ProjectionError, Result};
use crate::projection::{project_request, ProjectionPoint, ProjectionRequest};
use serde::{Deserialize, Serialize};

/// Summary of a projection for display next to the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub horizon_years: u32,
    pub annual_base_cost: f64,
    pub annual_growth_rate: f64,

    /// Total spend through the last year
    pub final_cumulative_cost: f64,

    /// Spend in the last year alone
    pub final_year_cost: f64,

    /// Total spend had the cost never grown (base × years)
    pub flat_cumulative_cost: f64,

    /// Portion of the total attributable to growth
    pub inflation_premium: f64,

    /// Years for the yearly cost to double, if it grows at all
    pub doubling_time_years: Option<f64>,

    /// `final_cumulative_cost` formatted as whole currency
    pub final_cumulative_display: String,
}

impl ProjectionSummary {
    /// Build from a request and the points it produced
    ///
    /// # Errors
    /// `InvalidArgument` if the request is invalid, or if `points` does not
    /// end at the request's horizon.
    pub fn from_points(request: &ProjectionRequest, points: &[ProjectionPoint]) -> Result<Self> {
        let horizon_years = request.validate()?;
        let last = points.last().ok_or_else(|| {
            ProjectionError::InvalidArgument("cannot summarize an empty projection".to_string())
        })?;
        if points.len() != horizon_years as usize || last.year != horizon_years {
            return Err(ProjectionError::InvalidArgument(format!(
                "{} points ending at year {} do not match horizon {}",
                points.len(),
                last.year,
                horizon_years
            )));
        }

        let final_year_cost = request.annual_base_cost
            * (1.0 + request.annual_growth_rate).powf(f64::from(horizon_years - 1));
        let flat_cumulative_cost = request.annual_base_cost * f64::from(horizon_years);

        Ok(Self {
            horizon_years,
            annual_base_cost: request.annual_base_cost,
            annual_growth_rate: request.annual_growth_rate,
            final_cumulative_cost: last.cumulative_cost,
            final_year_cost,
            flat_cumulative_cost,
            inflation_premium: last.cumulative_cost - flat_cumulative_cost,
            doubling_time_years: doubling_time_years(request.annual_growth_rate),
            final_cumulative_display: format_currency(last.cumulative_cost),
        })
    }
}

/// Project a request and summarize it
pub fn summarize(request: &ProjectionRequest) -> Result<ProjectionSummary> {
    let points = project_request(request)?;
    ProjectionSummary::from_points(request, &points)
}
