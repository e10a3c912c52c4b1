//! Earnings calculation for the courier statement engine.
//!
//! This module contains the attempt aggregation shared by every rule, the
//! base pay and hourly minimum steps, one module per bonus rule, and the
//! [`TierCalculator`] that runs them in a tier's statement order.

mod attempt_summary;
mod base_pay;
mod consistency_bonus;
mod hourly_minimum;
mod long_route_bonus;
mod loyalty_bonus;
mod quality_bonus;
mod tier_calculator;

pub use attempt_summary::{AttemptSummary, RouteStats};
pub use base_pay::{successful_attempt_pay, unsuccessful_attempt_pay};
pub use consistency_bonus::{
    CONSISTENCY_MIN_ROUTES, CONSISTENCY_MIN_SUCCESS_RATE, consistency_bonus_earned,
};
pub use hourly_minimum::{HourlyMinimum, calculate_hourly_minimum, elapsed_hours};
pub use long_route_bonus::{LONG_ROUTE_ATTEMPT_THRESHOLD, long_route_bonus_earned};
pub use loyalty_bonus::{
    LOYALTY_ROUTE_THRESHOLD, LOYALTY_SUCCESSFUL_ATTEMPTS_THRESHOLD, loyalty_attempts_bonus_earned,
    loyalty_routes_bonus_earned,
};
pub use quality_bonus::{QUALITY_MIN_ATTEMPTS, QUALITY_MIN_SUCCESS_RATE, quality_bonus_earned};
pub use tier_calculator::{TierCalculator, bonus_earned, compute_statement};
