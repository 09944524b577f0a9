//! Order Number Minting
//!
//! Order numbers have the form `{F|S}-YYMM-N`: a type prefix (`F` for
//! fertigung, `S` for service), the creation year/month, and a suffix that
//! counts up per prefix and period. The next suffix is the maximum existing
//! suffix for the same prefix+period plus one, or 1 when the period is
//! fresh.
//!
//! The scan and the insert are not atomic; `create_order` relies on the
//! UNIQUE constraint on `order_number` and retries the scan on a conflict.

use chrono::{DateTime, Datelike, Utc};
use sqlx::{Row, SqlitePool};

use crate::shared::orders::OrderType;

/// `YYMM` period key for a point in time
pub fn period_key(at: DateTime<Utc>) -> String {
    format!("{:02}{:02}", at.year() % 100, at.month())
}

/// Render a full order number
pub fn format_order_number(prefix: char, period: &str, suffix: u32) -> String {
    format!("{}-{}-{}", prefix, period, suffix)
}

/// Numeric suffix of `number`, if it belongs to the given prefix+period
pub fn parse_suffix(number: &str, prefix: char, period: &str) -> Option<u32> {
    let rest = number.strip_prefix(prefix)?.strip_prefix('-')?;
    let suffix = rest.strip_prefix(period)?.strip_prefix('-')?;
    suffix.parse().ok()
}

/// Next suffix given the numbers already taken in this prefix+period
pub fn next_suffix<'a>(
    existing: impl Iterator<Item = &'a str>,
    prefix: char,
    period: &str,
) -> u32 {
    existing
        .filter_map(|number| parse_suffix(number, prefix, period))
        .max()
        .unwrap_or(0)
        + 1
}

/// Mint the next order number for `order_type` at time `at`
pub async fn mint_order_number(
    pool: &SqlitePool,
    order_type: OrderType,
    at: DateTime<Utc>,
) -> Result<String, sqlx::Error> {
    let prefix = order_type.number_prefix();
    let period = period_key(at);
    let pattern = format!("{}-{}-%", prefix, period);

    let rows = sqlx::query("SELECT order_number FROM orders WHERE order_number LIKE ?")
        .bind(&pattern)
        .fetch_all(pool)
        .await?;

    let taken: Vec<String> = rows
        .into_iter()
        .map(|row| row.get::<String, _>("order_number"))
        .collect();
    let suffix = next_suffix(taken.iter().map(|s| s.as_str()), prefix, &period);

    Ok(format_order_number(prefix, &period, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_period_key() {
        let at = Utc.with_ymd_and_hms(2025, 7, 14, 12, 0, 0).unwrap();
        assert_eq!(period_key(at), "2507");

        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(period_key(at), "2601");
    }

    #[test]
    fn test_parse_suffix() {
        assert_eq!(parse_suffix("F-2507-3", 'F', "2507"), Some(3));
        assert_eq!(parse_suffix("F-2507-12", 'F', "2507"), Some(12));
        // Wrong prefix, wrong period, garbage suffix
        assert_eq!(parse_suffix("S-2507-3", 'F', "2507"), None);
        assert_eq!(parse_suffix("F-2506-3", 'F', "2507"), None);
        assert_eq!(parse_suffix("F-2507-x", 'F', "2507"), None);
    }

    #[test]
    fn test_next_suffix_counts_per_prefix_and_period() {
        let taken = ["F-2507-1", "F-2507-4", "S-2507-9", "F-2506-7"];
        assert_eq!(next_suffix(taken.iter().copied(), 'F', "2507"), 5);
        assert_eq!(next_suffix(taken.iter().copied(), 'S', "2507"), 10);
        assert_eq!(next_suffix(taken.iter().copied(), 'S', "2508"), 1);
    }

    #[test]
    fn test_first_number_of_a_period_is_one() {
        assert_eq!(next_suffix(std::iter::empty(), 'F', "2507"), 1);
        assert_eq!(format_order_number('F', "2507", 1), "F-2507-1");
    }
}
