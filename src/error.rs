//! Error types for projection, configuration and scenario loading

use thiserror::Error;

/// Errors raised by the projection engine
///
/// The engine has a single failure mode: inputs it cannot project.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, ProjectionError>;

/// Errors raised while loading or validating a calculator config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Errors raised while loading a scenario file
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Duplicate scenario name '{0}'")]
    DuplicateName(String),
}

/// Errors raised while turning an HTTP request into a projection
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Malformed request body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("Invalid query parameter '{name}': {value}")]
    Query { name: String, value: String },

    #[error("horizon_years {years} exceeds the service limit of {max}")]
    HorizonTooLarge { years: i64, max: i64 },

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}
