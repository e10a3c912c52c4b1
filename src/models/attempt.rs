//! Delivery attempt records.
//!
//! This module defines the [`AttemptRecord`] struct and the non-empty
//! [`AttemptLog`] collection that the tier calculator consumes.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One logged delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// The route the attempt belongs to.
    pub route_id: String,
    /// When the attempt happened, with its UTC offset.
    pub attempt_date_time: DateTime<FixedOffset>,
    /// Whether the delivery succeeded.
    pub success: bool,
}

/// A non-empty, ordered list of attempt records for one statement.
///
/// The only way to build an `AttemptLog` is through [`AttemptLog::new`] (or
/// `TryFrom`), which rejects an empty list. Calculations over a log can
/// therefore divide by the record count without checking it.
///
/// # Example
///
/// ```
/// use courier_earnings::models::{AttemptLog, AttemptRecord};
///
/// let record = AttemptRecord {
///     route_id: "RT5QHQ6M3A937H".to_string(),
///     attempt_date_time: "2023-12-18T08:33:18.588934+00:00".parse().unwrap(),
///     success: true,
/// };
///
/// let log = AttemptLog::new(vec![record]).unwrap();
/// assert_eq!(log.len(), 1);
/// assert!(AttemptLog::new(vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptLog(Vec<AttemptRecord>);

impl AttemptLog {
    /// Wraps a list of records, failing with [`EngineError::EmptyAttemptLog`]
    /// when the list is empty.
    pub fn new(records: Vec<AttemptRecord>) -> EngineResult<Self> {
        if records.is_empty() {
            return Err(EngineError::EmptyAttemptLog);
        }
        Ok(Self(records))
    }

    /// Returns the records in submission order.
    pub fn records(&self) -> &[AttemptRecord] {
        &self.0
    }

    /// Returns the number of records. Always at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the records in submission order.
    pub fn iter(&self) -> std::slice::Iter<'_, AttemptRecord> {
        self.0.iter()
    }
}

impl TryFrom<Vec<AttemptRecord>> for AttemptLog {
    type Error = EngineError;

    fn try_from(records: Vec<AttemptRecord>) -> Result<Self, Self::Error> {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a AttemptLog {
    type Item = &'a AttemptRecord;
    type IntoIter = std::slice::Iter<'a, AttemptRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
