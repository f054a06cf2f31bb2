//! Scenario CSV loading
//!
//! Expected headers: `name,annual_base_cost,annual_growth_rate,horizon_years`.
//! Rate and horizon may be left blank to use the calculator defaults.

use crate::error::ScenarioError;
use crate::projection::{ProjectionRequest, DEFAULT_ANNUAL_GROWTH_RATE, DEFAULT_HORIZON_YEARS};
use log::info;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// A named projection request
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub request: ProjectionRequest,
}

impl Scenario {
    pub fn new(name: impl Into<String>, request: ProjectionRequest) -> Self {
        Self {
            name: name.into(),
            request,
        }
    }
}

/// Raw CSV row
#[derive(Debug, Deserialize)]
struct ScenarioRecord {
    name: String,
    annual_base_cost: f64,
    annual_growth_rate: Option<f64>,
    horizon_years: Option<i64>,
}

impl From<ScenarioRecord> for Scenario {
    fn from(record: ScenarioRecord) -> Self {
        Scenario::new(
            record.name,
            ProjectionRequest::new(
                record.annual_base_cost,
                record.annual_growth_rate.unwrap_or(DEFAULT_ANNUAL_GROWTH_RATE),
                record.horizon_years.unwrap_or(DEFAULT_HORIZON_YEARS),
            ),
        )
    }
}

/// Load scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, ScenarioError> {
    let file = std::fs::File::open(path.as_ref())?;
    let scenarios = load_scenarios_from_reader(file)?;
    info!(
        "Loaded {} scenarios from {}",
        scenarios.len(),
        path.as_ref().display()
    );
    Ok(scenarios)
}

/// Load scenarios from any reader
///
/// Rows are parsed but not validated; a zero or negative horizon loads and
/// fails when projected. Non-numeric fields and duplicate names fail the load.
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>, ScenarioError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut seen = HashSet::new();
    let mut scenarios = Vec::new();
    for result in rdr.deserialize() {
        let record: ScenarioRecord = result?;
        if !seen.insert(record.name.clone()) {
            return Err(ScenarioError::DuplicateName(record.name));
        }
        scenarios.push(Scenario::from(record));
    }

    Ok(scenarios)
}
