//! Request handling for the HTTP projection service
//!
//! A request is a JSON `ProjectionRequest` body, optionally overridden by the
//! query parameters `cost`, `rate` and `years`. Kept free of any runtime types
//! so the Lambda binary only moves bytes in and out.

use crate::error::ApiError;
use crate::projection::{project_request, ProjectionPoint, ProjectionRequest};
use crate::report::ProjectionSummary;
use log::{error, info};
use serde::Serialize;
use std::collections::HashMap;

/// Largest horizon accepted from HTTP and CLI callers
///
/// The engine itself projects any positive horizon.
pub const MAX_API_HORIZON_YEARS: i64 = 1_000;

/// Successful projection payload
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionResponse {
    pub request: ProjectionRequest,
    pub points: Vec<ProjectionPoint>,
    pub summary: ProjectionSummary,
}

#[derive(Debug, Clone, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Status code and JSON body to send back
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: String,
}

/// Build a request from a body and query parameters
pub fn parse_request(body: &[u8], query: &HashMap<String, String>) -> Result<ProjectionRequest, ApiError> {
    let mut request = if body.iter().all(u8::is_ascii_whitespace) {
        ProjectionRequest::default()
    } else {
        serde_json::from_slice(body)?
    };

    if let Some(cost) = query.get("cost") {
        request.annual_base_cost = parse_param("cost", cost)?;
    }
    if let Some(rate) = query.get("rate") {
        request.annual_growth_rate = parse_param("rate", rate)?;
    }
    if let Some(years) = query.get("years") {
        request.horizon_years = parse_param("years", years)?;
    }

    Ok(request)
}

fn parse_param<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ApiError> {
    value.trim().parse().map_err(|_| ApiError::Query {
        name: name.to_string(),
        value: value.to_string(),
    })
}

/// Reject horizons above `MAX_API_HORIZON_YEARS`
pub fn check_horizon_limit(horizon_years: i64) -> Result<(), ApiError> {
    if horizon_years > MAX_API_HORIZON_YEARS {
        return Err(ApiError::HorizonTooLarge {
            years: horizon_years,
            max: MAX_API_HORIZON_YEARS,
        });
    }
    Ok(())
}

/// Project a parsed request
pub fn respond(request: ProjectionRequest) -> Result<ProjectionResponse, ApiError> {
    check_horizon_limit(request.horizon_years)?;
    let points = project_request(&request)?;
    let summary = ProjectionSummary::from_points(&request, &points)?;
    Ok(ProjectionResponse {
        request,
        points,
        summary,
    })
}

/// Full request cycle: parse, project, serialize
///
/// Client mistakes map to 400 with an `{"error": ...}` body.
pub fn handle(body: &[u8], query: &HashMap<String, String>) -> ApiReply {
    let outcome = parse_request(body, query).and_then(respond);

    match outcome {
        Ok(response) => {
            info!(
                "Projected {} years, final {}",
                response.summary.horizon_years, response.summary.final_cumulative_display
            );
            match serde_json::to_string(&response) {
                Ok(body) => ApiReply { status: 200, body },
                Err(e) => {
                    error!("Failed to serialize projection: {}", e);
                    error_reply(500, "internal error")
                }
            }
        }
        Err(e) => {
            info!("Rejected request: {}", e);
            error_reply(400, &e.to_string())
        }
    }
}

fn error_reply(status: u16, message: &str) -> ApiReply {
    let body = serde_json::to_string(&ErrorResponse {
        error: message.to_string(),
    })
    .unwrap_or_else(|_| r#"{"error":"internal error"}"#.to_string());
    ApiReply { status, body }
}
