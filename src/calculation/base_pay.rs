//! Per-attempt base pay.
//!
//! Every tier pays a rate per successful attempt and a (possibly zero) rate
//! per unsuccessful attempt. These two line items always open a statement.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{LineItem, LineItemKind};

use super::AttemptSummary;

/// Prices the successful attempts.
///
/// # Example
///
/// ```
/// use courier_earnings::calculation::{AttemptSummary, successful_attempt_pay};
/// use courier_earnings::models::{AttemptLog, AttemptRecord};
/// use rust_decimal::Decimal;
///
/// let log = AttemptLog::new(vec![AttemptRecord {
///     route_id: "RT1".to_string(),
///     attempt_date_time: "2023-12-18T08:00:00+00:00".parse().unwrap(),
///     success: true,
/// }])
/// .unwrap();
///
/// let item = successful_attempt_pay(&AttemptSummary::from_log(&log), Decimal::new(667, 3));
/// assert_eq!(item.quantity, 1);
/// assert_eq!(item.total, Decimal::new(667, 3));
/// ```
pub fn successful_attempt_pay(summary: &AttemptSummary<'_>, rate: Decimal) -> LineItem {
    let quantity = attempt_quantity(summary.successful_attempts());
    debug!(quantity, %rate, "per successful attempt");
    LineItem::priced(LineItemKind::PerSuccessfulAttempt, quantity, rate)
}

/// Prices the unsuccessful attempts.
pub fn unsuccessful_attempt_pay(summary: &AttemptSummary<'_>, rate: Decimal) -> LineItem {
    let quantity = attempt_quantity(summary.unsuccessful_attempts());
    debug!(quantity, %rate, "per unsuccessful attempt");
    LineItem::priced(LineItemKind::PerUnsuccessfulAttempt, quantity, rate)
}

// usize is at most 64 bits wide, so the cast is lossless.
fn attempt_quantity(count: usize) -> u64 {
    count as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttemptLog, AttemptRecord};
    use chrono::DateTime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn log_with_outcomes(outcomes: &[bool]) -> AttemptLog {
        let records = outcomes
            .iter()
            .map(|&success| AttemptRecord {
                route_id: "RT5QHQ6M3A937H".to_string(),
                attempt_date_time: DateTime::parse_from_rfc3339("2023-12-18T08:00:00+00:00")
                    .unwrap(),
                success,
            })
            .collect();
        AttemptLog::new(records).unwrap()
    }

    #[test]
    fn test_five_successes_at_platinum_rate() {
        let log = log_with_outcomes(&[true, true, true, false, true, true]);
        let item = successful_attempt_pay(&AttemptSummary::from_log(&log), dec("0.667"));

        assert_eq!(item.name, "Per successful attempt");
        assert_eq!(item.quantity, 5);
        assert_eq!(item.rate, dec("0.667"));
        assert_eq!(item.total, dec("3.335"));
    }

    #[test]
    fn test_one_failure_at_gold_rate() {
        let log = log_with_outcomes(&[true, true, true, false, true, true]);
        let item = unsuccessful_attempt_pay(&AttemptSummary::from_log(&log), dec("0.126"));

        assert_eq!(item.name, "Per unsuccessful attempt");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.total, dec("0.126"));
    }

    #[test]
    fn test_no_successes_yields_zero_quantity() {
        let log = log_with_outcomes(&[false, false]);
        let item = successful_attempt_pay(&AttemptSummary::from_log(&log), dec("0.459"));

        assert_eq!(item.quantity, 0);
        assert_eq!(item.total, Decimal::ZERO);
    }

    #[test]
    fn test_no_failures_yields_zero_quantity() {
        let log = log_with_outcomes(&[true, true, true]);
        let item = unsuccessful_attempt_pay(&AttemptSummary::from_log(&log), dec("0.229"));

        assert_eq!(item.quantity, 0);
        assert_eq!(item.total, Decimal::ZERO);
    }

    #[test]
    fn test_zero_failure_rate_still_counts_failures() {
        let log = log_with_outcomes(&[false, true]);
        let item = unsuccessful_attempt_pay(&AttemptSummary::from_log(&log), dec("0.00"));

        assert_eq!(item.quantity, 1);
        assert_eq!(item.total, Decimal::ZERO);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_attempt_quantity_does_not_saturate() {
        let count: usize = 5_000_000_000;
        assert_eq!(attempt_quantity(count), 5_000_000_000u64);
    }

    #[test]
    fn test_quantities_sum_to_record_count() {
        let log = log_with_outcomes(&[true, false, true, false, false, true, true]);
        let summary = AttemptSummary::from_log(&log);

        let success = successful_attempt_pay(&summary, dec("0.511"));
        let failure = unsuccessful_attempt_pay(&summary, dec("0.126"));
        assert_eq!((success.quantity + failure.quantity) as usize, log.len());
    }
}
