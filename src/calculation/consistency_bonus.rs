//! Consistency bonus.
//!
//! Earned by working at least [`CONSISTENCY_MIN_ROUTES`] distinct routes with
//! an overall success rate of at least [`CONSISTENCY_MIN_SUCCESS_RATE`] percent.

use rust_decimal::Decimal;
use tracing::debug;

use super::AttemptSummary;

/// Minimum number of distinct routes.
pub const CONSISTENCY_MIN_ROUTES: usize = 2;

/// Minimum overall success rate, in percent (96.5).
pub const CONSISTENCY_MIN_SUCCESS_RATE: Decimal = Decimal::from_parts(965, 0, 0, false, 1);

/// Returns true for two or more routes with at least 96.5% of attempts succeeding.
pub fn consistency_bonus_earned(summary: &AttemptSummary<'_>) -> bool {
    let routes = summary.route_count();
    let success_rate = summary.success_rate();
    let earned = routes >= CONSISTENCY_MIN_ROUTES && success_rate >= CONSISTENCY_MIN_SUCCESS_RATE;

    debug!(routes, %success_rate, earned, "consistency bonus");
    earned
}
