//! The rate card registry.
//!
//! [`RateCardRegistry`] maps every [`Tier`] to its [`RateCard`]. A registry is
//! validated when it is built, so lookups never fail afterwards.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{LineItemKind, Tier};

use super::types::RateCard;

/// Immutable tier to rate card table.
///
/// # Example
///
/// ```
/// use courier_earnings::config::RateCardRegistry;
/// use courier_earnings::models::{LineItemKind, Tier};
/// use rust_decimal::Decimal;
///
/// let registry = RateCardRegistry::standard();
/// let gold = registry.rate_card_for(Tier::Gold);
///
/// assert_eq!(gold.hourly_minimum_earnings(), Decimal::new(1500, 2));
/// assert_eq!(gold.rate(LineItemKind::ConsistencyBonus), Some(Decimal::new(3200, 2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateCardRegistry {
    bronze: RateCard,
    silver: RateCard,
    gold: RateCard,
    platinum: RateCard,
}

impl RateCardRegistry {
    /// Returns the built-in rate cards.
    pub fn standard() -> Self {
        use LineItemKind::*;

        Self {
            bronze: RateCard::new(
                Decimal::new(1450, 2),
                [
                    (PerSuccessfulAttempt, Decimal::new(459, 3)),
                    (PerUnsuccessfulAttempt, Decimal::new(229, 3)),
                    (LongRouteBonus, Decimal::new(1000, 2)),
                    (LoyaltyBonusRoutes, Decimal::new(2000, 2)),
                ],
            ),
            silver: RateCard::new(
                Decimal::new(1350, 2),
                [
                    (PerSuccessfulAttempt, Decimal::new(65, 2)),
                    (PerUnsuccessfulAttempt, Decimal::new(0, 2)),
                    (LoyaltyBonusAttempts, Decimal::new(1900, 2)),
                    (QualityBonus, Decimal::new(2500, 2)),
                ],
            ),
            gold: RateCard::new(
                Decimal::new(1500, 2),
                [
                    (PerSuccessfulAttempt, Decimal::new(511, 3)),
                    (PerUnsuccessfulAttempt, Decimal::new(126, 3)),
                    (ConsistencyBonus, Decimal::new(3200, 2)),
                ],
            ),
            platinum: RateCard::new(
                Decimal::new(1525, 2),
                [
                    (PerSuccessfulAttempt, Decimal::new(667, 3)),
                    (PerUnsuccessfulAttempt, Decimal::new(155, 3)),
                    (LongRouteBonus, Decimal::new(1200, 2)),
                    (LoyaltyBonusAttempts, Decimal::new(1900, 2)),
                    (ConsistencyBonus, Decimal::new(3200, 2)),
                ],
            ),
        }
    }

    /// Builds a registry from a tier to rate card map.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingRateCard`] if a tier has no rate card
    /// - [`EngineError::MissingRate`] if a rate card lacks a rate for base pay
    ///   or for one of the tier's bonuses
    pub fn from_rate_cards(mut cards: HashMap<Tier, RateCard>) -> EngineResult<Self> {
        let mut take = |tier: Tier| -> EngineResult<RateCard> {
            let card = cards
                .remove(&tier)
                .ok_or(EngineError::MissingRateCard { tier })?;
            validate_rate_card(tier, &card)?;
            Ok(card)
        };

        Ok(Self {
            bronze: take(Tier::Bronze)?,
            silver: take(Tier::Silver)?,
            gold: take(Tier::Gold)?,
            platinum: take(Tier::Platinum)?,
        })
    }

    /// Returns the rate card for a tier.
    pub fn rate_card_for(&self, tier: Tier) -> &RateCard {
        match tier {
            Tier::Bronze => &self.bronze,
            Tier::Silver => &self.silver,
            Tier::Gold => &self.gold,
            Tier::Platinum => &self.platinum,
        }
    }

    /// Iterates over every tier with its rate card.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &RateCard)> + '_ {
        Tier::ALL
            .into_iter()
            .map(move |tier| (tier, self.rate_card_for(tier)))
    }
}

impl Default for RateCardRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Checks that a rate card prices everything its tier's pipeline emits.
fn validate_rate_card(tier: Tier, card: &RateCard) -> EngineResult<()> {
    for item in tier.required_line_items() {
        if card.rate(item).is_none() {
            return Err(EngineError::MissingRate { tier, item });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn standard_cards() -> HashMap<Tier, RateCard> {
        let registry = RateCardRegistry::standard();
        registry
            .iter()
            .map(|(tier, card)| (tier, card.clone()))
            .collect()
    }

    #[test]
    fn test_standard_bronze_rates() {
        let registry = RateCardRegistry::standard();
        let card = registry.rate_card_for(Tier::Bronze);

        assert_eq!(card.hourly_minimum_earnings(), dec("14.50"));
        assert_eq!(
            card.rate(LineItemKind::PerSuccessfulAttempt),
            Some(dec("0.459"))
        );
        assert_eq!(
            card.rate(LineItemKind::PerUnsuccessfulAttempt),
            Some(dec("0.229"))
        );
        assert_eq!(card.rate(LineItemKind::LongRouteBonus), Some(dec("10.00")));
        assert_eq!(
            card.rate(LineItemKind::LoyaltyBonusRoutes),
            Some(dec("20.00"))
        );
        assert_eq!(card.rate(LineItemKind::LoyaltyBonusAttempts), None);
        assert_eq!(card.rate(LineItemKind::QualityBonus), None);
        assert_eq!(card.rate(LineItemKind::ConsistencyBonus), None);
    }

    #[test]
    fn test_standard_silver_rates() {
        let registry = RateCardRegistry::standard();
        let card = registry.rate_card_for(Tier::Silver);

        assert_eq!(card.hourly_minimum_earnings(), dec("13.50"));
        assert_eq!(
            card.rate(LineItemKind::PerSuccessfulAttempt),
            Some(dec("0.65"))
        );
        assert_eq!(
            card.rate(LineItemKind::PerUnsuccessfulAttempt),
            Some(dec("0.00"))
        );
        assert_eq!(
            card.rate(LineItemKind::LoyaltyBonusAttempts),
            Some(dec("19.00"))
        );
        assert_eq!(card.rate(LineItemKind::QualityBonus), Some(dec("25.00")));
        assert_eq!(card.line_items().len(), 4);
    }

    #[test]
    fn test_standard_gold_rates() {
        let registry = RateCardRegistry::standard();
        let card = registry.rate_card_for(Tier::Gold);

        assert_eq!(card.hourly_minimum_earnings(), dec("15.00"));
        assert_eq!(
            card.rate(LineItemKind::PerSuccessfulAttempt),
            Some(dec("0.511"))
        );
        assert_eq!(
            card.rate(LineItemKind::PerUnsuccessfulAttempt),
            Some(dec("0.126"))
        );
        assert_eq!(
            card.rate(LineItemKind::ConsistencyBonus),
            Some(dec("32.00"))
        );
        assert_eq!(card.line_items().len(), 3);
    }

    #[test]
    fn test_standard_platinum_rates() {
        let registry = RateCardRegistry::standard();
        let card = registry.rate_card_for(Tier::Platinum);

        assert_eq!(card.hourly_minimum_earnings(), dec("15.25"));
        assert_eq!(
            card.rate(LineItemKind::PerSuccessfulAttempt),
            Some(dec("0.667"))
        );
        assert_eq!(
            card.rate(LineItemKind::PerUnsuccessfulAttempt),
            Some(dec("0.155"))
        );
        assert_eq!(card.rate(LineItemKind::LongRouteBonus), Some(dec("12.00")));
        assert_eq!(
            card.rate(LineItemKind::LoyaltyBonusAttempts),
            Some(dec("19.00"))
        );
        assert_eq!(
            card.rate(LineItemKind::ConsistencyBonus),
            Some(dec("32.00"))
        );
        assert_eq!(card.line_items().len(), 5);
    }

    #[test]
    fn test_standard_cards_pass_validation() {
        let rebuilt = RateCardRegistry::from_rate_cards(standard_cards()).unwrap();
        assert_eq!(rebuilt, RateCardRegistry::standard());
    }

    #[test]
    fn test_missing_tier_is_rejected() {
        let mut cards = standard_cards();
        cards.remove(&Tier::Silver);

        let err = RateCardRegistry::from_rate_cards(cards).unwrap_err();
        assert!(matches!(
            err,
            EngineError::MissingRateCard { tier: Tier::Silver }
        ));
    }

    #[test]
    fn test_missing_bonus_rate_is_rejected() {
        let mut cards = standard_cards();
        cards.insert(
            Tier::Gold,
            RateCard::new(
                dec("15.00"),
                [
                    (LineItemKind::PerSuccessfulAttempt, dec("0.511")),
                    (LineItemKind::PerUnsuccessfulAttempt, dec("0.126")),
                ],
            ),
        );

        let err = RateCardRegistry::from_rate_cards(cards).unwrap_err();
        assert!(matches!(
            err,
            EngineError::MissingRate {
                tier: Tier::Gold,
                item: LineItemKind::ConsistencyBonus
            }
        ));
    }

    #[test]
    fn test_missing_base_rate_is_rejected() {
        let mut cards = standard_cards();
        cards.insert(
            Tier::Bronze,
            RateCard::new(
                dec("14.50"),
                [
                    (LineItemKind::PerSuccessfulAttempt, dec("0.459")),
                    (LineItemKind::LongRouteBonus, dec("10.00")),
                    (LineItemKind::LoyaltyBonusRoutes, dec("20.00")),
                ],
            ),
        );

        let err = RateCardRegistry::from_rate_cards(cards).unwrap_err();
        assert!(matches!(
            err,
            EngineError::MissingRate {
                tier: Tier::Bronze,
                item: LineItemKind::PerUnsuccessfulAttempt
            }
        ));
    }

    #[test]
    fn test_iter_visits_every_tier_in_order() {
        let registry = RateCardRegistry::default();
        let tiers: Vec<Tier> = registry.iter().map(|(tier, _)| tier).collect();
        assert_eq!(tiers, Tier::ALL.to_vec());
    }
}
