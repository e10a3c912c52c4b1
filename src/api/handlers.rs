//! HTTP request handlers for the Courier Earnings API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_statement;
use crate::models::Tier;

use super::request::{AttemptRecordRequest, into_attempt_log};
use super::response::{ApiError, ApiErrorResponse, HealthResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/earning/:rate_card_id",
            post(earning_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/health_check",
            get(health_check_handler).fallback(method_not_allowed_handler),
        )
        .fallback(not_found_handler)
        .with_state(state)
}

/// Handler for `POST /earning/{rate_card_id}`.
///
/// Accepts a JSON array of attempt records and returns the earnings
/// statement for the tier named in the path.
async fn earning_handler(
    State(state): State<AppState>,
    Path(rate_card_id): Path<String>,
    payload: Result<Json<Vec<AttemptRecordRequest>>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        rate_card_id = %rate_card_id,
        "Processing earning request"
    );

    let tier: Tier = match rate_card_id.parse() {
        Ok(tier) => tier,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Unknown rate card id");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let requests = match payload {
        Ok(Json(requests)) => requests,
        Err(rejection) => return rejection_error(correlation_id, rejection).into_response(),
    };

    let log = match into_attempt_log(requests) {
        Ok(log) => log,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected attempt records");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    match compute_statement(state.registry(), tier, &log) {
        Ok(statement) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                tier = %tier,
                attempts = log.len(),
                final_earnings = %statement.final_earnings,
                minimum_applied = statement.minimum_applied(),
                duration_us = duration.as_micros(),
                "Statement computed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(statement),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Statement computation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Classifies a body that could not be read as a list of attempt records.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {err}"))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        JsonRejection::BytesRejection(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Request body could not be read"
            );
            if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
                return ApiErrorResponse::new(
                    StatusCode::PAYLOAD_TOO_LARGE,
                    ApiError::new("PAYLOAD_TOO_LARGE", body_text),
                );
            }
            ApiError::malformed_json(format!("Failed to read request body: {body_text}"))
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error)
}

/// Handler for `GET /health_check`.
async fn health_check_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

async fn method_not_allowed_handler(method: Method, uri: Uri) -> ApiErrorResponse {
    ApiErrorResponse::new(
        StatusCode::METHOD_NOT_ALLOWED,
        ApiError::method_not_allowed(method.as_str(), uri.path()),
    )
}

async fn not_found_handler(uri: Uri) -> ApiErrorResponse {
    ApiErrorResponse::new(StatusCode::NOT_FOUND, ApiError::not_found(uri.path()))
}
