//! Calculator configuration
//!
//! Mirrors the inputs offered to the user: a yearly spend field with a step,
//! a horizon slider and a fixed growth rate. Loadable from JSON; any field left
//! out falls back to its default.

use super::NightlyRates;
use crate::error::ConfigError;
use crate::projection::{
    ProjectionRequest, DEFAULT_ANNUAL_BASE_COST, DEFAULT_ANNUAL_GROWTH_RATE, DEFAULT_HORIZON_YEARS,
};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Yearly spend shown before the user edits it
    #[serde(default = "default_annual_spend")]
    pub default_annual_spend: f64,

    /// Increment for the spend input
    #[serde(default = "default_spend_step")]
    pub spend_step: f64,

    /// Slider lower bound (years)
    #[serde(default = "default_min_horizon")]
    pub min_horizon_years: i64,

    /// Slider upper bound (years)
    #[serde(default = "default_max_horizon")]
    pub max_horizon_years: i64,

    /// Slider starting position (years)
    #[serde(default = "default_horizon")]
    pub default_horizon_years: i64,

    /// Growth rate applied to every projection (0.04 = 4%)
    #[serde(default = "default_growth_rate")]
    pub annual_growth_rate: f64,

    #[serde(default)]
    pub nightly_rates: NightlyRates,
}

fn default_annual_spend() -> f64 { DEFAULT_ANNUAL_BASE_COST }
fn default_spend_step() -> f64 { 500.0 }
fn default_min_horizon() -> i64 { 5 }
fn default_max_horizon() -> i64 { 30 }
fn default_horizon() -> i64 { DEFAULT_HORIZON_YEARS }
fn default_growth_rate() -> f64 { DEFAULT_ANNUAL_GROWTH_RATE }

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_annual_spend: DEFAULT_ANNUAL_BASE_COST,
            spend_step: 500.0,
            min_horizon_years: 5,
            max_horizon_years: 30,
            default_horizon_years: DEFAULT_HORIZON_YEARS,
            annual_growth_rate: DEFAULT_ANNUAL_GROWTH_RATE,
            nightly_rates: NightlyRates::default(),
        }
    }
}

impl CalculatorConfig {
    /// Load and validate a JSON config file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_horizon_years <= 0 {
            return Err(ConfigError::Invalid(format!(
                "min_horizon_years must be positive, got {}",
                self.min_horizon_years
            )));
        }
        if self.min_horizon_years > self.max_horizon_years {
            return Err(ConfigError::Invalid(format!(
                "min_horizon_years {} exceeds max_horizon_years {}",
                self.min_horizon_years, self.max_horizon_years
            )));
        }
        if !self.horizon_in_range(self.default_horizon_years) {
            return Err(ConfigError::Invalid(format!(
                "default_horizon_years {} outside [{}, {}]",
                self.default_horizon_years, self.min_horizon_years, self.max_horizon_years
            )));
        }
        if !(self.spend_step.is_finite() && self.spend_step > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "spend_step must be positive, got {}",
                self.spend_step
            )));
        }
        if !(self.default_annual_spend.is_finite() && self.default_annual_spend >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "default_annual_spend must be non-negative, got {}",
                self.default_annual_spend
            )));
        }
        if !self.annual_growth_rate.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "annual_growth_rate must be finite, got {}",
                self.annual_growth_rate
            )));
        }
        Ok(())
    }

    /// Whether a horizon lies on the slider
    pub fn horizon_in_range(&self, years: i64) -> bool {
        (self.min_horizon_years..=self.max_horizon_years).contains(&years)
    }

    /// Request built from the configured defaults
    pub fn default_request(&self) -> ProjectionRequest {
        ProjectionRequest::new(
            self.default_annual_spend,
            self.annual_growth_rate,
            self.default_horizon_years,
        )
    }

    /// Request for user-supplied values, falling back to the configured defaults
    ///
    /// A horizon off the slider is passed through with a warning; the engine
    /// decides whether it can be projected.
    pub fn request_for(&self, annual_spend: Option<f64>, horizon_years: Option<i64>) -> ProjectionRequest {
        let horizon_years = horizon_years.unwrap_or(self.default_horizon_years);
        if !self.horizon_in_range(horizon_years) {
            warn!(
                "Horizon {} is outside the calculator range [{}, {}]",
                horizon_years, self.min_horizon_years, self.max_horizon_years
            );
        }
        ProjectionRequest::new(
            annual_spend.unwrap_or(self.default_annual_spend),
            self.annual_growth_rate,
            horizon_years,
        )
    }
}
