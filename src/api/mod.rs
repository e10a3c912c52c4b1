//! HTTP API module for the Courier Earnings Engine.
//!
//! This module provides the REST endpoints that compute earnings statements
//! from delivery attempt records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttemptRecordRequest, into_attempt_log};
pub use response::{ApiError, ApiErrorResponse, HEALTH_CHECK_MESSAGE, HealthResponse};
pub use state::AppState;
