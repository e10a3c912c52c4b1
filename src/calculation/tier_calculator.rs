//! The tier calculator.
//!
//! [`TierCalculator`] runs the base pipeline (successful attempts,
//! unsuccessful attempts, hourly minimum) and then the tier's bonus plan, in
//! the order [`Tier::bonus_plan`] lists it. Rates are resolved from the rate
//! card once, when the calculator is built, so computing a statement cannot
//! fail.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{RateCard, RateCardRegistry};
use crate::error::{EngineError, EngineResult};
use crate::models::{AttemptLog, Bonus, EarningStatement, LineItem, LineItemKind, Tier};

use super::{
    AttemptSummary, calculate_hourly_minimum, consistency_bonus_earned, long_route_bonus_earned,
    loyalty_attempts_bonus_earned, loyalty_routes_bonus_earned, quality_bonus_earned,
    successful_attempt_pay, unsuccessful_attempt_pay,
};

/// Computes earnings statements for one tier.
///
/// # Example
///
/// ```
/// use courier_earnings::calculation::TierCalculator;
/// use courier_earnings::config::RateCardRegistry;
/// use courier_earnings::models::{AttemptLog, AttemptRecord, Tier};
/// use rust_decimal::Decimal;
///
/// let registry = RateCardRegistry::standard();
/// let calculator = TierCalculator::new(Tier::Gold, registry.rate_card_for(Tier::Gold)).unwrap();
///
/// let log = AttemptLog::new(vec![AttemptRecord {
///     route_id: "RT1".to_string(),
///     attempt_date_time: "2023-12-18T08:00:00+00:00".parse().unwrap(),
///     success: true,
/// }])
/// .unwrap();
///
/// let statement = calculator.compute(&log);
/// assert_eq!(statement.line_items.len(), 3);
/// assert_eq!(statement.line_item_subtotal, Decimal::new(511, 3));
/// assert_eq!(statement.hours_worked, Decimal::ZERO);
/// assert_eq!(statement.final_earnings, Decimal::new(511, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierCalculator {
    tier: Tier,
    hourly_minimum_earnings: Decimal,
    per_successful_attempt: Decimal,
    per_unsuccessful_attempt: Decimal,
    bonuses: Vec<(Bonus, Decimal)>,
}

impl TierCalculator {
    /// Builds a calculator for `tier`, resolving every rate its pipeline needs.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingRate`] if the rate card does not price
    /// base pay or one of the tier's bonuses.
    pub fn new(tier: Tier, rate_card: &RateCard) -> EngineResult<Self> {
        let rate = |item: LineItemKind| {
            rate_card
                .rate(item)
                .ok_or(EngineError::MissingRate { tier, item })
        };

        let bonuses = tier
            .bonus_plan()
            .iter()
            .map(|&bonus| Ok((bonus, rate(bonus.line_item_kind())?)))
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Self {
            tier,
            hourly_minimum_earnings: rate_card.hourly_minimum_earnings(),
            per_successful_attempt: rate(LineItemKind::PerSuccessfulAttempt)?,
            per_unsuccessful_attempt: rate(LineItemKind::PerUnsuccessfulAttempt)?,
            bonuses,
        })
    }

    /// Returns the tier this calculator prices.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Computes the earnings statement for a log of attempts.
    pub fn compute(&self, log: &AttemptLog) -> EarningStatement {
        let summary = AttemptSummary::from_log(log);
        debug!(
            tier = %self.tier,
            attempts = summary.total_attempts(),
            routes = summary.route_count(),
            "computing earnings statement"
        );

        let mut line_items = Vec::with_capacity(2 + self.bonuses.len());
        line_items.push(successful_attempt_pay(&summary, self.per_successful_attempt));
        line_items.push(unsuccessful_attempt_pay(&summary, self.per_unsuccessful_attempt));

        let hourly = calculate_hourly_minimum(&summary, self.hourly_minimum_earnings);

        for &(bonus, rate) in &self.bonuses {
            let quantity = u64::from(bonus_earned(bonus, &summary));
            line_items.push(LineItem::priced(bonus.line_item_kind(), quantity, rate));
        }

        EarningStatement::new(line_items, hourly.hours_worked, hourly.minimum_earnings)
    }
}

/// Evaluates one bonus rule against a summary.
pub fn bonus_earned(bonus: Bonus, summary: &AttemptSummary<'_>) -> bool {
    match bonus {
        Bonus::LongRoute => long_route_bonus_earned(summary),
        Bonus::LoyaltyRoutes => loyalty_routes_bonus_earned(summary),
        Bonus::LoyaltyAttempts => loyalty_attempts_bonus_earned(summary),
        Bonus::Quality => quality_bonus_earned(summary),
        Bonus::Consistency => consistency_bonus_earned(summary),
    }
}

/// Computes a statement for `tier` using the registry's rate card.
///
/// A registry validates its rate cards on construction, so this only fails
/// for a registry whose cards were not built through
/// [`RateCardRegistry::from_rate_cards`] or [`RateCardRegistry::standard`].
///
/// # Example
///
/// ```
/// use courier_earnings::calculation::compute_statement;
/// use courier_earnings::config::RateCardRegistry;
/// use courier_earnings::models::{AttemptLog, AttemptRecord, Tier};
///
/// let log = AttemptLog::new(vec![AttemptRecord {
///     route_id: "RT1".to_string(),
///     attempt_date_time: "2023-12-18T08:00:00+00:00".parse().unwrap(),
///     success: false,
/// }])
/// .unwrap();
///
/// let statement = compute_statement(&RateCardRegistry::standard(), Tier::Silver, &log).unwrap();
/// let names: Vec<&str> = statement.line_items.iter().map(|i| i.name.as_str()).collect();
/// assert_eq!(
///     names,
///     [
///         "Per successful attempt",
///         "Per unsuccessful attempt",
///         "Loyalty Bonus (attempts)",
///         "Quality Bonus",
///     ]
/// );
/// ```
pub fn compute_statement(
    registry: &RateCardRegistry,
    tier: Tier,
    log: &AttemptLog,
) -> EngineResult<EarningStatement> {
    let calculator = TierCalculator::new(tier, registry.rate_card_for(tier))?;
    Ok(calculator.compute(log))
}
