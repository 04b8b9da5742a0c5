//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::{DateTime, NaiveDate, Utc};

/// Format a date as `15 Mar 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Format a timestamp as `15 Mar 2024 14:02`
pub fn format_datetime(datetime: DateTime<Utc>) -> String {
    datetime.format("%d %b %Y %H:%M").to_string()
}

pub fn format_opt_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "—".to_string())
}

/// ISO `2024-03-15` or `2024-03-15T14:02:26Z` to `15 Mar 2024`; anything
/// else is returned unchanged.
pub fn format_iso_date(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(format_date)
        .unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(date), "15 Mar 2024");
        assert_eq!(format_opt_date(None), "—");
    }

    #[test]
    fn test_format_datetime() {
        let ts: DateTime<Utc> = "2024-12-31T23:59:59Z".parse().unwrap();
        assert_eq!(format_datetime(ts), "31 Dec 2024 23:59");
    }

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_iso_date("2024-03-15T14:02:26.123Z"), "15 Mar 2024");
        assert_eq!(format_iso_date("invalid"), "invalid");
    }
}
