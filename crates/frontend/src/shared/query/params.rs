use contracts::shared::filters::{FilterDimension, FilterSet};
use contracts::shared::paging::PageState;
use contracts::shared::period::{MonthKey, Period};

/// Ordered query-string parameters.
///
/// Arrays are sent as repeated keys (`a=1&a=2`), never as `a[]=` or a
/// comma-joined value, so a list is pushed one entry per element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, name: &str, value: impl ToString) -> Self {
        self.0.push((name.to_string(), value.to_string()));
        self
    }

    pub fn push_opt<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.push(name, value),
            None => self,
        }
    }

    /// Repeat `name` for every element, in input order.
    pub fn push_all<I, S>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for value in values {
            self.0.push((name.to_string(), value.as_ref().to_string()));
        }
        self
    }

    /// `startPeriod` / `endPeriod` as `MMMyyyy`; unset bounds are omitted.
    pub fn push_period(self, period: &Period) -> Self {
        self.push_opt("startPeriod", period.start_period.map(MonthKey::from_date))
            .push_opt("endPeriod", period.end_period.map(MonthKey::from_date))
    }

    pub fn push_filters(self, filters: &FilterSet) -> Self {
        FilterDimension::ALL
            .into_iter()
            .fold(self, |params, dimension| {
                params.push_all(dimension.param_name(), filters.values(dimension))
            })
    }

    /// `page`, `limit` and, when sorted, `orderBy` / `orderDir`.
    pub fn push_page(self, page: &PageState) -> Self {
        self.push("page", page.current_page)
            .push("limit", page.limit)
            .push_opt("orderBy", page.order_by())
            .push_opt("orderDir", page.order_dir())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}
