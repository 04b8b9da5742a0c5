use serde::{Deserialize, Serialize};

/// One column of the sort order, as sent by the data table (`{id, desc}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub id: String,
    pub desc: bool,
}

impl SortSpec {
    pub fn asc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: false,
        }
    }

    pub fn desc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: true,
        }
    }

    pub fn direction(&self) -> &'static str {
        if self.desc {
            "desc"
        } else {
            "asc"
        }
    }
}

/// Pagination and sorting of a server-side table. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    pub current_page: u32,
    pub limit: u32,
    #[serde(default)]
    pub sorting: Vec<SortSpec>,
}

impl PageState {
    pub const DEFAULT_LIMIT: u32 = 10;

    pub fn new(limit: u32) -> Self {
        Self {
            current_page: 1,
            limit: limit.max(1),
            sorting: Vec::new(),
        }
    }

    /// Zero-based row offset of the current page.
    pub fn offset(&self) -> u64 {
        u64::from(self.current_page.saturating_sub(1)) * u64::from(self.limit)
    }

    pub fn total_pages(&self, total_records: u64) -> u32 {
        if total_records == 0 {
            return 1;
        }
        let limit = u64::from(self.limit.max(1));
        total_records.div_ceil(limit).min(u64::from(u32::MAX)) as u32
    }

    /// Primary sort column, sent as `orderBy`.
    pub fn order_by(&self) -> Option<&str> {
        self.sorting.first().map(|s| s.id.as_str())
    }

    /// Direction of the primary sort column, sent as `orderDir`.
    pub fn order_dir(&self) -> Option<&'static str> {
        self.sorting.first().map(SortSpec::direction)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_and_total_pages() {
        let mut page = PageState::new(20);
        assert_eq!(page.offset(), 0);
        page.current_page = 3;
        assert_eq!(page.offset(), 40);
        assert_eq!(page.total_pages(0), 1);
        assert_eq!(page.total_pages(41), 3);
        assert_eq!(page.total_pages(40), 2);
    }

    #[test]
    fn order_params_follow_first_sort_column() {
        let mut page = PageState::default();
        assert_eq!(page.order_by(), None);
        page.sorting = vec![SortSpec::desc("invoiceDate"), SortSpec::asc("customerName")];
        assert_eq!(page.order_by(), Some("invoiceDate"));
        assert_eq!(page.order_dir(), Some("desc"));
    }

    #[test]
    fn zero_limit_is_clamped() {
        assert_eq!(PageState::new(0).limit, 1);
    }
}
