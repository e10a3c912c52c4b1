//! Hourly minimum guarantee.
//!
//! Hours worked are the sum, over routes, of the time between each route's
//! first and last attempt. The guarantee is those hours at the tier's hourly
//! minimum. This step emits no line item.

use chrono::TimeDelta;
use rust_decimal::Decimal;
use tracing::debug;

use super::AttemptSummary;

const SECONDS_PER_HOUR: Decimal = Decimal::from_parts(3600, 0, 0, false, 0);

/// The hours worked and the earnings they guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourlyMinimum {
    /// Hours worked across every route.
    pub hours_worked: Decimal,
    /// hours_worked x the hourly minimum rate.
    pub minimum_earnings: Decimal,
}

/// Converts an elapsed duration to decimal hours at nanosecond precision.
///
/// # Example
///
/// ```
/// use chrono::TimeDelta;
/// use courier_earnings::calculation::elapsed_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(elapsed_hours(TimeDelta::minutes(90)), Decimal::new(15, 1));
/// ```
pub fn elapsed_hours(elapsed: TimeDelta) -> Decimal {
    let seconds =
        Decimal::from(elapsed.num_seconds()) + Decimal::new(i64::from(elapsed.subsec_nanos()), 9);
    seconds / SECONDS_PER_HOUR
}

/// Computes hours worked and the minimum earnings they guarantee.
///
/// Route spans are summed before converting to hours. A route with a single
/// attempt contributes zero.
pub fn calculate_hourly_minimum(
    summary: &AttemptSummary<'_>,
    hourly_minimum_earnings: Decimal,
) -> HourlyMinimum {
    let elapsed = summary
        .routes()
        .fold(TimeDelta::zero(), |total, (_, stats)| total + stats.elapsed());
    let hours_worked = elapsed_hours(elapsed);
    let minimum_earnings = hours_worked * hourly_minimum_earnings;

    debug!(
        routes = summary.route_count(),
        %hours_worked,
        %hourly_minimum_earnings,
        %minimum_earnings,
        "hourly minimum"
    );

    HourlyMinimum {
        hours_worked,
        minimum_earnings,
    }
}
