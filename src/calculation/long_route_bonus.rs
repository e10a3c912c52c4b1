//! Long route bonus.
//!
//! Earned when any single route carries more than
//! [`LONG_ROUTE_ATTEMPT_THRESHOLD`] attempts. All attempts count, not only
//! successful ones.

use tracing::debug;

use super::AttemptSummary;

/// A route needs strictly more attempts than this to count as long.
pub const LONG_ROUTE_ATTEMPT_THRESHOLD: usize = 30;

/// Returns true if some route has more than 30 attempts.
pub fn long_route_bonus_earned(summary: &AttemptSummary<'_>) -> bool {
    let longest_route = summary
        .routes()
        .map(|(_, stats)| stats.attempts)
        .max()
        .unwrap_or(0);
    let earned = longest_route > LONG_ROUTE_ATTEMPT_THRESHOLD;

    debug!(longest_route, earned, "long route bonus");
    earned
}
