//! Named scenarios loaded from CSV and projected as a batch

mod loader;
mod runner;

pub use loader::{load_scenarios, load_scenarios_from_reader, Scenario};
pub use runner::{run_scenario, run_scenarios, ScenarioProjection, ScenarioResult};
