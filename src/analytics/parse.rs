use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

/// A run of ASCII digits with at most one decimal point ("14", "14.5", ".5", "5.").
static RE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]*)?|\.[0-9]+").unwrap());

/// Inclusive bounds read from a reference-range string, in source order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub low: f64,
    pub high: f64,
}

/// Extract the leading magnitude from a measurement string.
/// Handles: "14.5 g/dL", "<0.5", "Value: 7", "150,000/uL" (reads 150).
pub fn parse_value(raw: &str) -> Option<f64> {
    RE_NUMBER
        .find(raw)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Extract the first two numbers of a range string as (low, high).
/// Order is kept as written; "17.5 - 13.5" yields low 17.5, high 13.5.
pub fn parse_range(raw: &str) -> Option<ValueRange> {
    let mut numbers = RE_NUMBER
        .find_iter(raw)
        .filter_map(|m| m.as_str().parse::<f64>().ok());
    let low = numbers.next()?;
    let high = numbers.next()?;
    Some(ValueRange { low, high })
}

/// Parse a report or medication date.
/// Handles: RFC 3339 (normalised to UTC), "2024-03-01T09:30:00[.fff]",
/// "2024-03-01 09:30:00", "2024-03-01" (midnight).
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_with_unit() {
        assert_eq!(parse_value("14.5 g/dL"), Some(14.5));
    }

    #[test]
    fn value_with_prefix_text() {
        assert_eq!(parse_value("approx. 7 x10^9/L"), Some(7.0));
        assert_eq!(parse_value("<0.5 mg/L"), Some(0.5));
    }

    #[test]
    fn value_stops_at_second_decimal_point() {
        assert_eq!(parse_value("1.2.3"), Some(1.2));
    }

    #[test]
    fn value_leading_decimal_point() {
        assert_eq!(parse_value(".75"), Some(0.75));
    }

    #[test]
    fn value_skips_non_ascii_digits() {
        assert_eq!(parse_value("\u{0661}\u{0664} (14.5 g/dL)"), Some(14.5));
        assert_eq!(parse_value("\u{ff11}\u{ff14} / 14 g/dL"), Some(14.0));
        assert_eq!(parse_value("\u{0661}\u{0664}"), None);
    }

    #[test]
    fn value_absent() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("not detected"), None);
        assert_eq!(parse_value("."), None);
    }

    #[test]
    fn range_with_dash() {
        assert_eq!(
            parse_range("13.5 - 17.5 g/dL"),
            Some(ValueRange { low: 13.5, high: 17.5 })
        );
    }

    #[test]
    fn range_keeps_source_order() {
        assert_eq!(
            parse_range("17.5 to 13.5"),
            Some(ValueRange { low: 17.5, high: 13.5 })
        );
    }

    #[test]
    fn range_needs_two_numbers() {
        assert_eq!(parse_range("< 200 mg/dL"), None);
        assert_eq!(parse_range(""), None);
    }

    #[test]
    fn range_skips_non_ascii_digits() {
        assert_eq!(
            parse_range("\u{0661}\u{0663} 13.5 - 17.5"),
            Some(ValueRange { low: 13.5, high: 17.5 })
        );
    }

    #[test]
    fn range_ignores_extra_numbers() {
        assert_eq!(
            parse_range("4.5-5.5 (ages 18-65)"),
            Some(ValueRange { low: 4.5, high: 5.5 })
        );
    }

    #[test]
    fn timestamp_formats() {
        let midnight = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2024-03-01"), Some(midnight));
        assert_eq!(parse_timestamp("2024-03-01T00:00:00.000Z"), Some(midnight));
        assert_eq!(parse_timestamp("2024-03-01T02:00:00+02:00"), Some(midnight));
        assert_eq!(parse_timestamp("2024-03-01T00:00:00"), Some(midnight));
    }

    #[test]
    fn timestamp_invalid() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("last Tuesday"), None);
        assert_eq!(parse_timestamp("2024-13-01"), None);
    }
}
