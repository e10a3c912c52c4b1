//! Tier, bonus and line item kind definitions.
//!
//! A [`Tier`] selects a rate card and an ordered bonus plan. The plan is plain
//! data: [`Tier::bonus_plan`] lists the [`Bonus`] rules a tier earns, in the
//! order their line items appear on the statement.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A courier's service level.
///
/// Tiers are identified on the wire by their rate card id
/// (`bronze_tier`, `silver_tier`, `gold_tier`, `platinum_tier`).
///
/// # Example
///
/// ```
/// use courier_earnings::models::Tier;
///
/// let tier: Tier = "gold_tier".parse().unwrap();
/// assert_eq!(tier, Tier::Gold);
/// assert_eq!(tier.to_string(), "gold_tier");
/// assert!("GOLD".parse::<Tier>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    /// Entry level tier.
    #[serde(rename = "bronze_tier")]
    Bronze,
    /// Second tier.
    #[serde(rename = "silver_tier")]
    Silver,
    /// Third tier.
    #[serde(rename = "gold_tier")]
    Gold,
    /// Highest tier.
    #[serde(rename = "platinum_tier")]
    Platinum,
}

impl Tier {
    /// Every tier, in ascending order.
    pub const ALL: [Tier; 4] = [Tier::Bronze, Tier::Silver, Tier::Gold, Tier::Platinum];

    /// Returns the rate card identifier for this tier.
    pub fn rate_card_id(&self) -> &'static str {
        match self {
            Tier::Bronze => "bronze_tier",
            Tier::Silver => "silver_tier",
            Tier::Gold => "gold_tier",
            Tier::Platinum => "platinum_tier",
        }
    }

    /// Returns the bonus rules this tier earns, in statement order.
    ///
    /// # Example
    ///
    /// ```
    /// use courier_earnings::models::{Bonus, Tier};
    ///
    /// assert_eq!(
    ///     Tier::Platinum.bonus_plan(),
    ///     &[Bonus::LongRoute, Bonus::LoyaltyAttempts, Bonus::Consistency]
    /// );
    /// ```
    pub fn bonus_plan(&self) -> &'static [Bonus] {
        match self {
            Tier::Bronze => &[Bonus::LongRoute, Bonus::LoyaltyRoutes],
            Tier::Silver => &[Bonus::LoyaltyAttempts, Bonus::Quality],
            Tier::Gold => &[Bonus::Consistency],
            Tier::Platinum => &[Bonus::LongRoute, Bonus::LoyaltyAttempts, Bonus::Consistency],
        }
    }

    /// Returns every line item kind a rate card for this tier must price.
    pub fn required_line_items(&self) -> Vec<LineItemKind> {
        let mut kinds = vec![
            LineItemKind::PerSuccessfulAttempt,
            LineItemKind::PerUnsuccessfulAttempt,
        ];
        kinds.extend(self.bonus_plan().iter().map(Bonus::line_item_kind));
        kinds
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rate_card_id())
    }
}

impl FromStr for Tier {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.rate_card_id() == s)
            .ok_or_else(|| EngineError::UnknownRateCardId { id: s.to_string() })
    }
}

/// A conditional bonus rule. Each rule contributes one line item with a
/// quantity of 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bonus {
    /// Some route has more than 30 attempts.
    LongRoute,
    /// More than 10 distinct routes.
    LoyaltyRoutes,
    /// At least 150 successful attempts.
    LoyaltyAttempts,
    /// At least 20 attempts with a success rate of 97% or more.
    Quality,
    /// At least 2 routes with a success rate of 96.5% or more.
    Consistency,
}

impl Bonus {
    /// Returns the line item kind this bonus is priced under.
    pub fn line_item_kind(&self) -> LineItemKind {
        match self {
            Bonus::LongRoute => LineItemKind::LongRouteBonus,
            Bonus::LoyaltyRoutes => LineItemKind::LoyaltyBonusRoutes,
            Bonus::LoyaltyAttempts => LineItemKind::LoyaltyBonusAttempts,
            Bonus::Quality => LineItemKind::QualityBonus,
            Bonus::Consistency => LineItemKind::ConsistencyBonus,
        }
    }
}

/// The kinds of line item a rate card can price.
///
/// Serialized in camelCase (`perSuccessfulAttempt`, `longRouteBonus`, ...),
/// which is also the key format used in rate card files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineItemKind {
    /// Pay for each successful attempt.
    PerSuccessfulAttempt,
    /// Pay for each unsuccessful attempt.
    PerUnsuccessfulAttempt,
    /// Long route bonus.
    LongRouteBonus,
    /// Loyalty bonus earned on distinct routes.
    LoyaltyBonusRoutes,
    /// Loyalty bonus earned on successful attempts.
    LoyaltyBonusAttempts,
    /// Quality bonus.
    QualityBonus,
    /// Consistency bonus.
    ConsistencyBonus,
}

impl LineItemKind {
    /// Returns the name printed on an earnings statement.
    pub fn display_name(&self) -> &'static str {
        match self {
            LineItemKind::PerSuccessfulAttempt => "Per successful attempt",
            LineItemKind::PerUnsuccessfulAttempt => "Per unsuccessful attempt",
            LineItemKind::LongRouteBonus => "Long route bonus",
            LineItemKind::LoyaltyBonusRoutes => "Loyalty Bonus (routes)",
            LineItemKind::LoyaltyBonusAttempts => "Loyalty Bonus (attempts)",
            LineItemKind::QualityBonus => "Quality Bonus",
            LineItemKind::ConsistencyBonus => "Consistency Bonus",
        }
    }

    /// Returns the key used for this kind in rate card files.
    pub fn config_key(&self) -> &'static str {
        match self {
            LineItemKind::PerSuccessfulAttempt => "perSuccessfulAttempt",
            LineItemKind::PerUnsuccessfulAttempt => "perUnsuccessfulAttempt",
            LineItemKind::LongRouteBonus => "longRouteBonus",
            LineItemKind::LoyaltyBonusRoutes => "loyaltyBonusRoutes",
            LineItemKind::LoyaltyBonusAttempts => "loyaltyBonusAttempts",
            LineItemKind::QualityBonus => "qualityBonus",
            LineItemKind::ConsistencyBonus => "consistencyBonus",
        }
    }
}

impl fmt::Display for LineItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_rate_card_id() {
        assert_eq!("bronze_tier".parse::<Tier>().unwrap(), Tier::Bronze);
        assert_eq!("silver_tier".parse::<Tier>().unwrap(), Tier::Silver);
        assert_eq!("gold_tier".parse::<Tier>().unwrap(), Tier::Gold);
        assert_eq!("platinum_tier".parse::<Tier>().unwrap(), Tier::Platinum);
    }

    #[test]
    fn test_parse_rejects_unknown_and_differently_cased_ids() {
        for id in ["diamond_tier", "BRONZE", "Bronze_tier", "bronze", ""] {
            let err = id.parse::<Tier>().unwrap_err();
            assert!(
                matches!(err, EngineError::UnknownRateCardId { id: ref got } if got == id),
                "expected UnknownRateCardId for {id:?}"
            );
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for tier in Tier::ALL {
            assert_eq!(tier.to_string().parse::<Tier>().unwrap(), tier);
        }
    }

    #[test]
    fn test_bonus_plans_follow_tier_order() {
        assert_eq!(
            Tier::Bronze.bonus_plan(),
            &[Bonus::LongRoute, Bonus::LoyaltyRoutes]
        );
        assert_eq!(
            Tier::Silver.bonus_plan(),
            &[Bonus::LoyaltyAttempts, Bonus::Quality]
        );
        assert_eq!(Tier::Gold.bonus_plan(), &[Bonus::Consistency]);
        assert_eq!(
            Tier::Platinum.bonus_plan(),
            &[Bonus::LongRoute, Bonus::LoyaltyAttempts, Bonus::Consistency]
        );
    }

    #[test]
    fn test_required_line_items_start_with_base_pay() {
        assert_eq!(
            Tier::Gold.required_line_items(),
            vec![
                LineItemKind::PerSuccessfulAttempt,
                LineItemKind::PerUnsuccessfulAttempt,
                LineItemKind::ConsistencyBonus,
            ]
        );
    }

    #[test]
    fn test_tier_serializes_as_rate_card_id() {
        let json = serde_json::to_string(&Tier::Platinum).unwrap();
        assert_eq!(json, "\"platinum_tier\"");
        let tier: Tier = serde_json::from_str("\"silver_tier\"").unwrap();
        assert_eq!(tier, Tier::Silver);
    }

    #[test]
    fn test_line_item_kind_serde_matches_config_key() {
        let kinds = [
            LineItemKind::PerSuccessfulAttempt,
            LineItemKind::PerUnsuccessfulAttempt,
            LineItemKind::LongRouteBonus,
            LineItemKind::LoyaltyBonusRoutes,
            LineItemKind::LoyaltyBonusAttempts,
            LineItemKind::QualityBonus,
            LineItemKind::ConsistencyBonus,
        ];
        for kind in kinds {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.config_key()));
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(
            LineItemKind::LoyaltyBonusAttempts.display_name(),
            "Loyalty Bonus (attempts)"
        );
        assert_eq!(
            LineItemKind::LongRouteBonus.display_name(),
            "Long route bonus"
        );
        assert_eq!(
            Bonus::Quality.line_item_kind().display_name(),
            "Quality Bonus"
        );
    }
}
