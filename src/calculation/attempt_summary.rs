//! Attempt aggregation.
//!
//! Every rule in the pipeline reads the same few aggregates: counts by
//! outcome, and per-route attempt counts and time spans. [`AttemptSummary`]
//! builds them in a single pass over an [`AttemptLog`].

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, TimeDelta};
use rust_decimal::Decimal;

use crate::models::AttemptLog;

/// Aggregates for the attempts on one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteStats {
    /// Number of attempts on the route.
    pub attempts: usize,
    /// Number of successful attempts on the route.
    pub successful: usize,
    /// Earliest attempt timestamp.
    pub first_attempt: DateTime<FixedOffset>,
    /// Latest attempt timestamp.
    pub last_attempt: DateTime<FixedOffset>,
}

impl RouteStats {
    fn starting_at(at: DateTime<FixedOffset>) -> Self {
        Self {
            attempts: 0,
            successful: 0,
            first_attempt: at,
            last_attempt: at,
        }
    }

    /// Time between the first and last attempt. Zero for a single attempt.
    pub fn elapsed(&self) -> TimeDelta {
        self.last_attempt - self.first_attempt
    }
}

/// Aggregated view of an attempt log.
///
/// # Example
///
/// ```
/// use courier_earnings::calculation::AttemptSummary;
/// use courier_earnings::models::{AttemptLog, AttemptRecord};
///
/// let record = |route: &str, at: &str, success| AttemptRecord {
///     route_id: route.to_string(),
///     attempt_date_time: at.parse().unwrap(),
///     success,
/// };
/// let log = AttemptLog::new(vec![
///     record("A", "2023-12-18T08:00:00+00:00", true),
///     record("A", "2023-12-18T09:30:00+00:00", false),
///     record("B", "2023-12-18T10:00:00+00:00", true),
/// ])
/// .unwrap();
///
/// let summary = AttemptSummary::from_log(&log);
/// assert_eq!(summary.total_attempts(), 3);
/// assert_eq!(summary.successful_attempts(), 2);
/// assert_eq!(summary.route_count(), 2);
/// assert_eq!(summary.route("A").unwrap().elapsed().num_minutes(), 90);
/// ```
#[derive(Debug, Clone)]
pub struct AttemptSummary<'a> {
    routes: BTreeMap<&'a str, RouteStats>,
    total_attempts: usize,
    successful_attempts: usize,
}

impl<'a> AttemptSummary<'a> {
    /// Aggregates a log in one pass.
    pub fn from_log(log: &'a AttemptLog) -> Self {
        let mut routes: BTreeMap<&'a str, RouteStats> = BTreeMap::new();
        let mut successful_attempts = 0;

        for record in log {
            let at = record.attempt_date_time;
            let stats = routes
                .entry(record.route_id.as_str())
                .or_insert_with(|| RouteStats::starting_at(at));

            stats.attempts += 1;
            stats.first_attempt = stats.first_attempt.min(at);
            stats.last_attempt = stats.last_attempt.max(at);

            if record.success {
                stats.successful += 1;
                successful_attempts += 1;
            }
        }

        Self {
            routes,
            total_attempts: log.len(),
            successful_attempts,
        }
    }

    /// Total number of attempts. Always at least one.
    pub fn total_attempts(&self) -> usize {
        self.total_attempts
    }

    /// Number of successful attempts.
    pub fn successful_attempts(&self) -> usize {
        self.successful_attempts
    }

    /// Number of unsuccessful attempts.
    pub fn unsuccessful_attempts(&self) -> usize {
        self.total_attempts - self.successful_attempts
    }

    /// Number of distinct routes.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Returns the aggregates for one route.
    pub fn route(&self, route_id: &str) -> Option<&RouteStats> {
        self.routes.get(route_id)
    }

    /// Iterates over every route with its aggregates, ordered by route id.
    pub fn routes(&self) -> impl Iterator<Item = (&'a str, &RouteStats)> + '_ {
        self.routes.iter().map(|(route_id, stats)| (*route_id, stats))
    }

    /// Successful attempts as a percentage of all attempts.
    ///
    /// Computed as `successful * 100 / total` in decimal arithmetic, so exact
    /// percentages such as 96.5 compare exactly against thresholds.
    pub fn success_rate(&self) -> Decimal {
        Decimal::from(self.successful_attempts) * Decimal::ONE_HUNDRED
            / Decimal::from(self.total_attempts)
    }
}
