//! Response types for the Courier Earnings API.
//!
//! This module defines the error response structures and the mapping from
//! [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Message returned by the health check.
pub const HEALTH_CHECK_MESSAGE: &str = "All AOK!";

/// Body of `GET /health_check`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always [`HEALTH_CHECK_MESSAGE`].
    pub message: String,
}

impl HealthResponse {
    /// Creates the healthy response.
    pub fn ok() -> Self {
        Self {
            message: HEALTH_CHECK_MESSAGE.to_string(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an unknown rate card error response.
    pub fn invalid_rate_card_id(id: &str) -> Self {
        Self::with_details(
            "INVALID_RATE_CARD_ID",
            format!("Invalid rate card id provided: {id}"),
            "Expected one of bronze_tier, silver_tier, gold_tier, platinum_tier",
        )
    }

    /// Creates an error response for a known path called with the wrong method.
    pub fn method_not_allowed(method: &str, path: &str) -> Self {
        Self::new(
            "METHOD_NOT_ALLOWED",
            format!("Method {method} is not allowed for {path}"),
        )
    }

    /// Creates a not found error response for an unknown path.
    pub fn not_found(path: &str) -> Self {
        Self::new("NOT_FOUND", format!("No route for {path}"))
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::UnknownRateCardId { id } => {
                Self::new(StatusCode::BAD_REQUEST, ApiError::invalid_rate_card_id(&id))
            }
            EngineError::EmptyAttemptLog => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("INVALID_PAYLOAD", error.to_string()),
            ),
            EngineError::InvalidAttempt { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(error.to_string()),
            ),
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidSetting { .. }
            | EngineError::Telemetry { .. } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", error.to_string()),
            ),
            EngineError::MissingRateCard { .. } | EngineError::MissingRate { .. } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Calculation failed",
                    error.to_string(),
                ),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineItemKind, Tier};

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_health_response_message() {
        let json = serde_json::to_value(HealthResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "All AOK!" }));
    }

    #[test]
    fn test_method_not_allowed_names_method_and_path() {
        let error = ApiError::method_not_allowed("GET", "/earning/gold_tier");
        assert_eq!(error.code, "METHOD_NOT_ALLOWED");
        assert_eq!(
            error.message,
            "Method GET is not allowed for /earning/gold_tier"
        );
    }

    #[test]
    fn test_unknown_rate_card_maps_to_400() {
        let response: ApiErrorResponse = EngineError::UnknownRateCardId {
            id: "diamond_tier".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_RATE_CARD_ID");
        assert!(response.error.message.contains("diamond_tier"));
    }

    #[test]
    fn test_empty_log_maps_to_422() {
        let response: ApiErrorResponse = EngineError::EmptyAttemptLog.into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "INVALID_PAYLOAD");
        assert_eq!(response.error.message, "No activity logs found");
    }

    #[test]
    fn test_invalid_attempt_maps_to_validation_error() {
        let response: ApiErrorResponse = EngineError::InvalidAttempt {
            index: 3,
            message: "route_id must not be blank".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_registry_faults_map_to_500() {
        let response: ApiErrorResponse = EngineError::MissingRate {
            tier: Tier::Gold,
            item: LineItemKind::ConsistencyBonus,
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CALCULATION_ERROR");

        let response: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "missing.yaml".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
    }
}
