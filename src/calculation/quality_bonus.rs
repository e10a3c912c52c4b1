//! Quality bonus.
//!
//! Earned with at least [`QUALITY_MIN_ATTEMPTS`] attempts and a success rate
//! of at least [`QUALITY_MIN_SUCCESS_RATE`] percent.

use rust_decimal::Decimal;
use tracing::debug;

use super::AttemptSummary;

/// Minimum number of attempts before the quality bonus applies.
pub const QUALITY_MIN_ATTEMPTS: usize = 20;

/// Minimum success rate, in percent (97.0).
pub const QUALITY_MIN_SUCCESS_RATE: Decimal = Decimal::from_parts(970, 0, 0, false, 1);

/// Returns true for 20 or more attempts with at least 97% succeeding.
pub fn quality_bonus_earned(summary: &AttemptSummary<'_>) -> bool {
    let total_attempts = summary.total_attempts();
    let success_rate = summary.success_rate();
    let earned =
        total_attempts >= QUALITY_MIN_ATTEMPTS && success_rate >= QUALITY_MIN_SUCCESS_RATE;

    debug!(total_attempts, %success_rate, earned, "quality bonus");
    earned
}
