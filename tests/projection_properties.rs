//! Property-based tests for the projection engine.
//!
//! Covers: determinism, sequence shape, monotonicity, the zero-rate reduction,
//! horizon rejection and scale invariance, plus agreement with the closed form.

use approx::assert_abs_diff_eq;
use inflation_projection::projection::closed_form_cumulative;
use inflation_projection::{final_value, project, ProjectionError, ProjectionRequest};
use proptest::prelude::*;

fn relative_close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
}

// ── Sequence Shape ───────────────────────────────────────────────────

proptest! {
    /// One point per year, numbered 1..=years.
    #[test]
    fn length_and_year_index(
        cost in 0.0f64..100_000.0,
        rate in -0.5f64..0.5,
        years in 1i64..200,
    ) {
        let points = project(cost, rate, years).unwrap();

        prop_assert_eq!(points.len() as i64, years);
        for (i, point) in points.iter().enumerate() {
            prop_assert_eq!(point.year as usize, i + 1);
        }
    }

    /// Identical inputs give bit-identical outputs.
    #[test]
    fn deterministic(
        cost in -10_000.0f64..100_000.0,
        rate in -1.0f64..1.0,
        years in 1i64..100,
    ) {
        let a = project(cost, rate, years).unwrap();
        let b = project(cost, rate, years).unwrap();

        prop_assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            prop_assert_eq!(x.year, y.year);
            prop_assert_eq!(x.cumulative_cost.to_bits(), y.cumulative_cost.to_bits());
        }
    }
}

// ── Monotonicity ─────────────────────────────────────────────────────

proptest! {
    /// Positive spend with non-negative growth strictly increases the total.
    #[test]
    fn strictly_increasing_for_positive_cost(
        cost in 1.0f64..100_000.0,
        rate in 0.0f64..0.25,
        years in 1i64..60,
    ) {
        let points = project(cost, rate, years).unwrap();

        prop_assert!(points[0].cumulative_cost > 0.0);
        for pair in points.windows(2) {
            prop_assert!(pair[1].cumulative_cost > pair[0].cumulative_cost);
        }
    }

    /// Zero spend stays zero at any rate.
    #[test]
    fn zero_cost_is_zero(rate in -1.0f64..1.0, years in 1i64..60) {
        let points = project(0.0, rate, years).unwrap();
        prop_assert!(points.iter().all(|p| p.cumulative_cost == 0.0));
    }
}

// ── Closed Forms ─────────────────────────────────────────────────────

proptest! {
    /// Without growth the total is spend × year.
    #[test]
    fn zero_rate_is_linear(cost in 0.0f64..100_000.0, years in 1i64..100) {
        let points = project(cost, 0.0, years).unwrap();
        for point in &points {
            let expected = cost * f64::from(point.year);
            prop_assert!(relative_close(point.cumulative_cost, expected, 1e-12));
        }
    }

    /// The iterative sum agrees with the geometric series formula.
    #[test]
    fn matches_geometric_series(
        cost in 0.0f64..100_000.0,
        rate in -0.9f64..0.5,
        years in 1i64..40,
    ) {
        let points = project(cost, rate, years).unwrap();
        for point in &points {
            let closed = closed_form_cumulative(cost, rate, point.year);
            prop_assert!(relative_close(point.cumulative_cost, closed, 1e-9));
        }
    }

    /// Scaling the spend scales the final total.
    #[test]
    fn scale_invariance(
        cost in 1.0f64..10_000.0,
        k in 0.01f64..100.0,
        rate in 0.0f64..0.2,
        years in 1i64..40,
    ) {
        let base = final_value(&ProjectionRequest::new(cost, rate, years)).unwrap();
        let scaled = final_value(&ProjectionRequest::new(k * cost, rate, years)).unwrap();
        prop_assert!(relative_close(scaled, k * base, 1e-9));
    }
}

// ── Rejection ────────────────────────────────────────────────────────

proptest! {
    /// Zero and negative horizons fail with InvalidArgument.
    #[test]
    fn non_positive_horizon_rejected(
        cost in 0.0f64..100_000.0,
        rate in 0.0f64..0.1,
        years in -1000i64..=0,
    ) {
        prop_assert!(matches!(
            project(cost, rate, years),
            Err(ProjectionError::InvalidArgument(_))
        ));
        prop_assert!(final_value(&ProjectionRequest::new(cost, rate, years)).is_err());
    }
}

#[test]
fn calculator_scenario() {
    let points = project(4000.0, 0.04, 3).unwrap();

    assert_eq!(points.len(), 3);
    assert_abs_diff_eq!(points[0].cumulative_cost, 4000.0, epsilon = 0.01);
    assert_abs_diff_eq!(points[1].cumulative_cost, 8160.0, epsilon = 0.01);
    assert_abs_diff_eq!(points[2].cumulative_cost, 12486.4, epsilon = 0.01);
}

#[test]
fn slider_range_projects() {
    for years in 5..=30 {
        let request = ProjectionRequest::new(3000.0, 0.04, years);
        let last = final_value(&request).unwrap();
        assert!(last > 3000.0 * years as f64);
    }
}
