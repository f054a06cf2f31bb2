//! Projection engine for cumulative rental cost under inflation

mod closed_form;
mod engine;
mod request;

pub use closed_form::{closed_form_cumulative, project_closed_form};
pub use engine::{final_value, project, project_request};
pub use request::{ProjectionPoint, ProjectionRequest};

// ============================================================================
// Calculator Defaults
// ============================================================================
// Values the calculator starts from when the caller supplies nothing.

/// Default annual growth rate applied to rental cost (4% historical average)
pub const DEFAULT_ANNUAL_GROWTH_RATE: f64 = 0.04;

/// Default first-year rental spend
pub const DEFAULT_ANNUAL_BASE_COST: f64 = 3000.0;

/// Default projection horizon in years
pub const DEFAULT_HORIZON_YEARS: i64 = 20;
