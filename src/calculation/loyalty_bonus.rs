//! Loyalty bonuses.
//!
//! Two independent rules reward volume: one counts distinct routes, the other
//! counts successful attempts.

use tracing::debug;

use super::AttemptSummary;

/// Strictly more distinct routes than this earn the route loyalty bonus.
pub const LOYALTY_ROUTE_THRESHOLD: usize = 10;

/// At least this many successful attempts earn the attempt loyalty bonus.
pub const LOYALTY_SUCCESSFUL_ATTEMPTS_THRESHOLD: usize = 150;

/// Returns true if the log covers more than 10 distinct routes.
pub fn loyalty_routes_bonus_earned(summary: &AttemptSummary<'_>) -> bool {
    let routes = summary.route_count();
    let earned = routes > LOYALTY_ROUTE_THRESHOLD;

    debug!(routes, earned, "loyalty bonus (routes)");
    earned
}

/// Returns true if the log has 150 or more successful attempts.
pub fn loyalty_attempts_bonus_earned(summary: &AttemptSummary<'_>) -> bool {
    let successful = summary.successful_attempts();
    let earned = successful >= LOYALTY_SUCCESSFUL_ATTEMPTS_THRESHOLD;

    debug!(successful, earned, "loyalty bonus (attempts)");
    earned
}
