//! Request types for the Courier Earnings API.
//!
//! The body of `POST /earning/{rate_card_id}` is a JSON array of
//! [`AttemptRecordRequest`]s.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttemptLog, AttemptRecord};

/// One attempt record as submitted over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptRecordRequest {
    /// The route the attempt belongs to. Must not be blank.
    pub route_id: String,
    /// ISO-8601 date-time with a UTC offset.
    pub attempt_date_time: DateTime<FixedOffset>,
    /// Whether the delivery succeeded.
    pub success: bool,
}

impl AttemptRecordRequest {
    /// Validates the request and converts it to a domain record.
    ///
    /// `index` is the record's position in the submitted array and is only
    /// used for error reporting.
    pub fn into_record(self, index: usize) -> EngineResult<AttemptRecord> {
        if self.route_id.trim().is_empty() {
            return Err(EngineError::InvalidAttempt {
                index,
                message: "route_id must not be blank".to_string(),
            });
        }

        Ok(AttemptRecord {
            route_id: self.route_id,
            attempt_date_time: self.attempt_date_time,
            success: self.success,
        })
    }
}

/// Converts a submitted array into an [`AttemptLog`].
///
/// # Errors
///
/// - [`EngineError::EmptyAttemptLog`] if the array is empty
/// - [`EngineError::InvalidAttempt`] for the first record with a blank route
pub fn into_attempt_log(requests: Vec<AttemptRecordRequest>) -> EngineResult<AttemptLog> {
    if requests.is_empty() {
        return Err(EngineError::EmptyAttemptLog);
    }

    let records = requests
        .into_iter()
        .enumerate()
        .map(|(index, request)| request.into_record(index))
        .collect::<EngineResult<Vec<_>>>()?;

    AttemptLog::new(records)
}
