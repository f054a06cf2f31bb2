//! Iterative cumulative cost projection

use super::request::{validate_inputs, ProjectionPoint, ProjectionRequest};
use crate::error::Result;
use log::debug;

/// Project cumulative rental cost year by year
///
/// Year 1 costs `annual_base_cost`; each later year costs the previous year's
/// amount times `(1 + annual_growth_rate)`. Each point carries the running sum
/// through its year.
///
/// # Errors
/// `InvalidArgument` when `horizon_years` is not positive or either amount is
/// not finite.
pub fn project(
    annual_base_cost: f64,
    annual_growth_rate: f64,
    horizon_years: i64,
) -> Result<Vec<ProjectionPoint>> {
    let years = validate_inputs(annual_base_cost, annual_growth_rate, horizon_years)?;

    let growth_factor = 1.0 + annual_growth_rate;
    let mut points = Vec::with_capacity(years as usize);
    let mut year_cost = annual_base_cost;
    let mut cumulative_cost = 0.0;

    for year in 1..=years {
        cumulative_cost += year_cost;
        points.push(ProjectionPoint { year, cumulative_cost });
        year_cost *= growth_factor;
    }

    debug!(
        "Projected {} years: base={:.2}, rate={:.4}, final={:.2}",
        years, annual_base_cost, annual_growth_rate, cumulative_cost
    );

    Ok(points)
}

/// Project from a request value
pub fn project_request(request: &ProjectionRequest) -> Result<Vec<ProjectionPoint>> {
    project(
        request.annual_base_cost,
        request.annual_growth_rate,
        request.horizon_years,
    )
}

/// Cumulative cost at the end of the horizon
pub fn final_value(request: &ProjectionRequest) -> Result<f64> {
    let points = project_request(request)?;
    // A validated horizon always yields at least one point
    Ok(points.last().map(|p| p.cumulative_cost).unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_three_year_scenario() {
        let points = project(4000.0, 0.04, 3).expect("valid inputs");

        assert_eq!(points.len(), 3);
        assert_abs_diff_eq!(points[0].cumulative_cost, 4000.0, epsilon = 0.01);
        assert_abs_diff_eq!(points[1].cumulative_cost, 8160.0, epsilon = 0.01);
        assert_abs_diff_eq!(points[2].cumulative_cost, 12486.4, epsilon = 0.01);
    }

    #[test]
    fn test_years_are_one_indexed_and_ordered() {
        let points = project(3000.0, 0.04, 20).expect("valid inputs");
        for (i, point) in points.iter().enumerate() {
            assert_eq!(point.year, i as u32 + 1);
        }
    }

    #[test]
    fn test_first_year_has_no_growth() {
        let points = project(3500.0, 0.25, 1).expect("valid inputs");
        assert_eq!(points, vec![ProjectionPoint { year: 1, cumulative_cost: 3500.0 }]);
    }

    #[test]
    fn test_zero_and_negative_horizon_rejected() {
        assert!(matches!(
            project(4000.0, 0.04, 0),
            Err(ProjectionError::InvalidArgument(_))
        ));
        assert!(matches!(
            project(4000.0, 0.04, -1),
            Err(ProjectionError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_zero_cost_stays_zero() {
        let points = project(0.0, 0.04, 10).expect("valid inputs");
        assert!(points.iter().all(|p| p.cumulative_cost == 0.0));
    }

    #[test]
    fn test_zero_rate_is_linear() {
        let points = project(3000.0, 0.0, 30).expect("valid inputs");
        for point in &points {
            assert_abs_diff_eq!(point.cumulative_cost, 3000.0 * point.year as f64, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_deflation_still_increases_cumulative() {
        // Positive yearly costs keep the running sum rising even as they shrink
        let points = project(4000.0, -0.5, 5).expect("valid inputs");
        assert_abs_diff_eq!(points[1].cumulative_cost, 6000.0, epsilon = 1e-9);
        assert!(points.windows(2).all(|w| w[1].cumulative_cost > w[0].cumulative_cost));
    }

    #[test]
    fn test_final_value_matches_last_point() {
        let request = ProjectionRequest::new(3000.0, 0.04, 20);
        let points = project_request(&request).expect("valid inputs");
        let last = points.last().expect("non-empty").cumulative_cost;
        assert_eq!(final_value(&request), Ok(last));

        // 3000 * (1.04^20 - 1) / 0.04
        assert_abs_diff_eq!(last, 89_334.24, epsilon = 0.01);
    }

    #[test]
    fn test_final_value_rejects_bad_horizon() {
        let request = ProjectionRequest::new(3000.0, 0.04, 0);
        assert!(final_value(&request).is_err());
    }

    #[test]
    fn test_repeat_calls_are_bit_identical() {
        let a = project(3750.25, 0.0375, 30).expect("valid inputs");
        let b = project(3750.25, 0.0375, 30).expect("valid inputs");
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.cumulative_cost.to_bits(), y.cumulative_cost.to_bits());
        }
    }
}
