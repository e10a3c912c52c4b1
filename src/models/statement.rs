//! Earnings statement models.
//!
//! This module contains the [`EarningStatement`] type and its [`LineItem`]s,
//! the output of a tier calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LineItemKind;

/// One priced component of a statement: base pay or a bonus.
///
/// Decimal fields are serialized as JSON numbers.
///
/// # Example
///
/// ```
/// use courier_earnings::models::{LineItem, LineItemKind};
/// use rust_decimal::Decimal;
///
/// let item = LineItem::priced(LineItemKind::PerSuccessfulAttempt, 5, Decimal::new(667, 3));
/// assert_eq!(item.name, "Per successful attempt");
/// assert_eq!(item.total, Decimal::new(3335, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The statement name of the line item.
    pub name: String,
    /// Count of attempts, or 0/1 for a bonus.
    pub quantity: u64,
    /// The rate paid per unit.
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    /// quantity x rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl LineItem {
    /// Creates a line item for `kind`, pricing `quantity` units at `rate`.
    pub fn priced(kind: LineItemKind, quantity: u64, rate: Decimal) -> Self {
        Self {
            name: kind.display_name().to_string(),
            quantity,
            rate,
            total: Decimal::from(quantity) * rate,
        }
    }
}

/// The result of an earnings computation.
///
/// Line items keep the order the tier's pipeline emitted them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningStatement {
    /// Line items in calculation order.
    pub line_items: Vec<LineItem>,
    /// Sum of every line item total.
    #[serde(with = "rust_decimal::serde::float")]
    pub line_item_subtotal: Decimal,
    /// Hours worked, summed over each route's first-to-last attempt span.
    #[serde(with = "rust_decimal::serde::float")]
    pub hours_worked: Decimal,
    /// hours_worked x the tier's hourly minimum.
    #[serde(with = "rust_decimal::serde::float")]
    pub minimum_earnings: Decimal,
    /// The amount paid out.
    #[serde(with = "rust_decimal::serde::float")]
    pub final_earnings: Decimal,
}

impl EarningStatement {
    /// Assembles a statement from its line items and hourly guarantee.
    ///
    /// The subtotal is the sum of the line item totals. The final amount is the
    /// subtotal only when it is strictly greater than the minimum earnings;
    /// a tie pays the minimum earnings.
    ///
    /// # Example
    ///
    /// ```
    /// use courier_earnings::models::{EarningStatement, LineItem, LineItemKind};
    /// use rust_decimal::Decimal;
    ///
    /// let items = vec![LineItem::priced(LineItemKind::PerSuccessfulAttempt, 2, Decimal::ONE)];
    /// let statement = EarningStatement::new(items, Decimal::ONE, Decimal::new(15, 0));
    ///
    /// assert_eq!(statement.line_item_subtotal, Decimal::new(2, 0));
    /// assert_eq!(statement.final_earnings, Decimal::new(15, 0));
    /// ```
    pub fn new(
        line_items: Vec<LineItem>,
        hours_worked: Decimal,
        minimum_earnings: Decimal,
    ) -> Self {
        let line_item_subtotal: Decimal = line_items.iter().map(|item| item.total).sum();
        let final_earnings = if line_item_subtotal > minimum_earnings {
            line_item_subtotal
        } else {
            minimum_earnings
        };

        Self {
            line_items,
            line_item_subtotal,
            hours_worked,
            minimum_earnings,
            final_earnings,
        }
    }

    /// Returns true when the hourly guarantee, not the itemized pay, set the
    /// final amount.
    pub fn minimum_applied(&self) -> bool {
        self.line_item_subtotal <= self.minimum_earnings
    }
}
