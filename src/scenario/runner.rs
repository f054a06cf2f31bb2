//! Parallel batch projection

use super::Scenario;
use crate::error::ProjectionError;
use crate::projection::{project_request, ProjectionPoint, ProjectionRequest};
use crate::report::ProjectionSummary;
use log::warn;
use rayon::prelude::*;
use serde::Serialize;

/// Points and summary for a scenario that projected successfully
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioProjection {
    pub points: Vec<ProjectionPoint>,
    pub summary: ProjectionSummary,
}

/// Outcome of one scenario
///
/// A rejected request is recorded here rather than failing the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioResult {
    pub name: String,
    pub request: ProjectionRequest,
    pub outcome: Result<ScenarioProjection, ProjectionError>,
}

/// Project a single scenario
pub fn run_scenario(scenario: &Scenario) -> ScenarioResult {
    let outcome = project_request(&scenario.request).and_then(|points| {
        let summary = ProjectionSummary::from_points(&scenario.request, &points)?;
        Ok(ScenarioProjection { points, summary })
    });

    if let Err(e) = &outcome {
        warn!("Scenario '{}' rejected: {}", scenario.name, e);
    }

    ScenarioResult {
        name: scenario.name.clone(),
        request: scenario.request,
        outcome,
    }
}

/// Project every scenario in parallel; results keep input order
pub fn run_scenarios(scenarios: &[Scenario]) -> Vec<ScenarioResult> {
    scenarios.par_iter().map(run_scenario).collect()
}
