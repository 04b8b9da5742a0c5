//! Month keys and reporting periods.
//!
//! Every period-aware endpoint takes `startPeriod`/`endPeriod` formatted as
//! `MMMyyyy` (for example `Jan2025`). [`MonthKey`] is the typed form of that
//! string; [`Period`] is the pair of dates held by the period filter.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodParseError {
    #[error("month key '{0}' is not in MMMyyyy format")]
    Format(String),
    #[error("month {0} is out of range 1..=12")]
    MonthOutOfRange(u32),
    #[error("year {0} is out of range 1..=9999")]
    YearOutOfRange(i32),
}

/// A calendar month, serialized as `MMMyyyy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::MonthOutOfRange(month));
        }
        if !(1..=9999).contains(&year) {
            return Err(PeriodParseError::YearOutOfRange(year));
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse `Jan2025`. The month abbreviation is matched case-insensitively.
    pub fn parse(value: &str) -> Result<Self, PeriodParseError> {
        let value = value.trim();
        if value.len() < 4 || !value.is_char_boundary(3) {
            return Err(PeriodParseError::Format(value.to_string()));
        }
        let (name, year) = value.split_at(3);
        let month = MONTH_ABBR
            .iter()
            .position(|abbr| abbr.eq_ignore_ascii_case(name))
            .ok_or_else(|| PeriodParseError::Format(value.to_string()))?;
        if year.is_empty() || !year.chars().all(|c| c.is_ascii_digit()) {
            return Err(PeriodParseError::Format(value.to_string()));
        }
        let year = year
            .parse::<i32>()
            .map_err(|_| PeriodParseError::Format(value.to_string()))?;
        Self::new(year, month as u32 + 1)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // year/month are validated at construction, day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day() - Duration::days(1)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn abbr(&self) -> &'static str {
        MONTH_ABBR[(self.month - 1) as usize]
    }

    /// Human readable label, e.g. "Jan 2025".
    pub fn label(&self) -> String {
        format!("{} {}", self.abbr(), self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.abbr(), self.year)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = PeriodParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MonthKey> for String {
    fn from(value: MonthKey) -> Self {
        value.to_string()
    }
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    MonthKey::from_date(date).first_day()
}

/// Reporting period selected in the period filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub start_period: Option<NaiveDate>,
    pub end_period: Option<NaiveDate>,
}

impl Period {
    pub fn new(start_period: Option<NaiveDate>, end_period: Option<NaiveDate>) -> Self {
        Self {
            start_period,
            end_period,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.start_period.is_some() && self.end_period.is_some()
    }

    /// `false` only when both bounds are set and the end falls before the
    /// first day of the start month.
    pub fn is_ordered(&self) -> bool {
        match (self.start_period, self.end_period) {
            (Some(start), Some(end)) => end >= start_of_month(start),
            _ => true,
        }
    }

    pub fn bounds(&self) -> Option<(MonthKey, MonthKey)> {
        match (self.start_period, self.end_period) {
            (Some(start), Some(end)) if self.is_ordered() => {
                Some((MonthKey::from_date(start), MonthKey::from_date(end)))
            }
            _ => None,
        }
    }

    /// Months covered by the period, inclusive. Empty when incomplete.
    pub fn months(&self) -> Vec<MonthKey> {
        let Some((first, last)) = self.bounds() else {
            return Vec::new();
        };
        let mut months = Vec::new();
        let mut current = first;
        while current <= last {
            months.push(current);
            current = current.next();
        }
        months
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_key_formats_as_mmmyyyy() {
        let key = MonthKey::from_date(date(2025, 1, 17));
        assert_eq!(key.to_string(), "Jan2025");
        assert_eq!(MonthKey::new(2024, 12).unwrap().to_string(), "Dec2024");
        assert_eq!(key.label(), "Jan 2025");
    }

    #[test]
    fn month_key_parses_case_insensitively() {
        assert_eq!(MonthKey::parse("mar2025").unwrap(), MonthKey::new(2025, 3).unwrap());
        assert!(matches!(
            MonthKey::parse("Foo2025"),
            Err(PeriodParseError::Format(_))
        ));
        assert!(MonthKey::parse("Jan").is_err());
        assert!(MonthKey::parse("Jan20x5").is_err());
        assert_eq!(
            MonthKey::new(2025, 13),
            Err(PeriodParseError::MonthOutOfRange(13))
        );
    }

    #[test]
    fn years_outside_the_calendar_are_rejected() {
        assert_eq!(
            MonthKey::parse("Jan999999"),
            Err(PeriodParseError::YearOutOfRange(999_999))
        );
        assert_eq!(
            MonthKey::parse("Jan0000"),
            Err(PeriodParseError::YearOutOfRange(0))
        );
        let last = MonthKey::parse("Dec9999").unwrap();
        assert_eq!(last.first_day(), date(9999, 12, 1));
        assert_eq!(last.last_day(), date(9999, 12, 31));
    }

    #[test]
    fn month_key_serde_uses_string_form() {
        let key = MonthKey::new(2025, 2).unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"Feb2025\"");
        let back: MonthKey = serde_json::from_str("\"Feb2025\"").unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<MonthKey>("\"2025-02\"").is_err());
    }

    #[test]
    fn month_navigation_wraps_years() {
        let dec = MonthKey::new(2024, 12).unwrap();
        assert_eq!(dec.next(), MonthKey::new(2025, 1).unwrap());
        assert_eq!(dec.next().prev(), dec);
        assert_eq!(dec.last_day(), date(2024, 12, 31));
        assert_eq!(MonthKey::new(2024, 2).unwrap().last_day(), date(2024, 2, 29));
    }

    #[test]
    fn period_ordering_compares_against_start_of_month() {
        // end inside the start month but before the start day is still valid
        let same_month = Period::new(Some(date(2025, 1, 20)), Some(date(2025, 1, 5)));
        assert!(same_month.is_ordered());

        let inverted = Period::new(Some(date(2025, 1, 1)), Some(date(2024, 12, 1)));
        assert!(!inverted.is_ordered());
        assert_eq!(inverted.bounds(), None);

        assert!(Period::new(Some(date(2025, 1, 1)), None).is_ordered());
    }

    #[test]
    fn period_months_are_inclusive() {
        let period = Period::new(Some(date(2024, 11, 1)), Some(date(2025, 2, 1)));
        let labels: Vec<String> = period.months().iter().map(|m| m.to_string()).collect();
        assert_eq!(labels, vec!["Nov2024", "Dec2024", "Jan2025", "Feb2025"]);
        assert!(Period::default().months().is_empty());
    }
}
