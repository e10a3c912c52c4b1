//! Configuration types for rate cards.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML rate card files.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{LineItemKind, Tier};

/// The pay rates for one tier.
///
/// A rate card holds the guaranteed hourly minimum and a rate for every
/// line item kind the tier can earn. Kinds a tier never earns have no rate.
///
/// # Example
///
/// ```
/// use courier_earnings::config::RateCard;
/// use courier_earnings::models::LineItemKind;
/// use rust_decimal::Decimal;
///
/// let card = RateCard::new(
///     Decimal::new(1500, 2),
///     [(LineItemKind::PerSuccessfulAttempt, Decimal::new(511, 3))],
/// );
/// assert_eq!(card.rate(LineItemKind::PerSuccessfulAttempt), Some(Decimal::new(511, 3)));
/// assert_eq!(card.rate(LineItemKind::QualityBonus), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateCard {
    /// Guaranteed earnings per hour worked.
    hourly_minimum_earnings: Decimal,
    /// Rate per line item kind.
    line_items: BTreeMap<LineItemKind, Decimal>,
}

impl RateCard {
    /// Creates a rate card from an hourly minimum and a set of line item rates.
    pub fn new(
        hourly_minimum_earnings: Decimal,
        line_items: impl IntoIterator<Item = (LineItemKind, Decimal)>,
    ) -> Self {
        Self {
            hourly_minimum_earnings,
            line_items: line_items.into_iter().collect(),
        }
    }

    /// Returns the guaranteed earnings per hour worked.
    pub fn hourly_minimum_earnings(&self) -> Decimal {
        self.hourly_minimum_earnings
    }

    /// Returns the rate for a line item kind, if this card prices it.
    pub fn rate(&self, kind: LineItemKind) -> Option<Decimal> {
        self.line_items.get(&kind).copied()
    }

    /// Returns every priced line item kind with its rate.
    pub fn line_items(&self) -> &BTreeMap<LineItemKind, Decimal> {
        &self.line_items
    }
}

/// Rate card file structure.
///
/// ```yaml
/// rate_cards:
///   gold_tier:
///     hourly_minimum_earnings: "15.00"
///     line_items:
///       perSuccessfulAttempt: "0.511"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateCardsFile {
    /// Map of tier to its rate card.
    pub rate_cards: HashMap<Tier, RateCard>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_rate_card_with_string_decimals() {
        let yaml = r#"
hourly_minimum_earnings: "14.50"
line_items:
  perSuccessfulAttempt: "0.459"
  longRouteBonus: "10.00"
"#;
        let card: RateCard = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(card.hourly_minimum_earnings(), dec("14.50"));
        assert_eq!(
            card.rate(LineItemKind::PerSuccessfulAttempt),
            Some(dec("0.459"))
        );
        assert_eq!(card.rate(LineItemKind::LongRouteBonus), Some(dec("10.00")));
        assert_eq!(card.line_items().len(), 2);
    }

    #[test]
    fn test_deserialize_rejects_unknown_line_item_kind() {
        let yaml = r#"
hourly_minimum_earnings: "14.50"
line_items:
  perMileDriven: "0.10"
"#;
        assert!(serde_yaml::from_str::<RateCard>(yaml).is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_field() {
        let yaml = r#"
hourly_minimum_earnings: "14.50"
currency: "USD"
line_items: {}
"#;
        assert!(serde_yaml::from_str::<RateCard>(yaml).is_err());
    }

    #[test]
    fn test_deserialize_rate_cards_file_keyed_by_rate_card_id() {
        let yaml = r#"
rate_cards:
  gold_tier:
    hourly_minimum_earnings: "15.00"
    line_items:
      perSuccessfulAttempt: "0.511"
"#;
        let file: RateCardsFile = serde_yaml::from_str(yaml).unwrap();
        let gold = &file.rate_cards[&Tier::Gold];
        assert_eq!(gold.hourly_minimum_earnings(), dec("15.00"));
    }
}
