use contracts::shared::filters::{FilterDimension, FilterSet};
use contracts::shared::period::{MonthKey, Period};
use std::fmt;

/// Identity of a cached query: a scope followed by the inputs it depends on.
///
/// Two hooks with equal keys share one cache entry and one in-flight
/// request; invalidation works on key prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new(scope: impl Into<String>) -> Self {
        Self(vec![scope.into()])
    }

    pub fn with(mut self, part: impl ToString) -> Self {
        self.0.push(part.to_string());
        self
    }

    /// Absent values still occupy a slot so positions stay comparable.
    pub fn with_opt<P: ToString>(self, part: Option<P>) -> Self {
        match part {
            Some(part) => self.with(part),
            None => self.with(""),
        }
    }

    /// A list becomes one JSON-encoded part, so `["A,B"]` and `["A","B"]` differ.
    pub fn with_list<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values: Vec<String> = parts.into_iter().map(|p| p.as_ref().to_string()).collect();
        let encoded = serde_json::to_string(&values).unwrap_or_default();
        self.0.push(encoded);
        self
    }

    /// Start and end month; unset bounds keep their slot.
    pub fn with_period(self, period: &Period) -> Self {
        self.with_opt(period.start_period.map(MonthKey::from_date))
            .with_opt(period.end_period.map(MonthKey::from_date))
    }

    /// One list part per filter dimension, in the same order as the query string.
    pub fn with_filters(self, filters: &FilterSet) -> Self {
        FilterDimension::ALL
            .into_iter()
            .fold(self, |key, dimension| key.with_list(filters.values(dimension)))
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }

    pub fn scope(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or_default()
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}
