//! Rental cost projection under annual inflation
//!
//! Projects the cumulative nominal cost of renting (rather than owning) over a
//! horizon of years, where the yearly spend grows geometrically with inflation.
//! The engine is a pure function; the report, scenario and api modules wrap it
//! for display, batch runs and the HTTP front end.

pub mod api;
pub mod assumptions;
pub mod error;
pub mod projection;
pub mod report;
pub mod scenario;

pub use assumptions::{CalculatorConfig, NightlyRates};
pub use error::{ApiError, ConfigError, ProjectionError, ScenarioError};
pub use projection::{
    final_value, project, project_closed_form, project_request, ProjectionPoint,
    ProjectionRequest,
};
pub use report::{format_currency, ProjectionSummary};
