use contracts::shared::paging::{PageState, SortSpec};
use serde::{Deserialize, Serialize};

use crate::shared::storage::PersistedState;

/// Paging and sorting of one server-side table, stored as `table:<id>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableState {
    page: PageState,
}

impl PersistedState for TableState {
    /// Prefix only; tables load with [`TableState::storage_key`].
    const STORAGE_KEY: &'static str = "table";
}

/// The page to request for `inputs`. When they differ from the inputs of
/// the last request the list starts over at page 1, before the table store
/// itself has been reset.
pub fn page_for_inputs<S: PartialEq>(
    previous: Option<&(S, PageState)>,
    inputs: &S,
    mut page: PageState,
) -> PageState {
    if previous.is_some_and(|(last, _)| last != inputs) {
        page.current_page = 1;
    }
    page
}

impl TableState {
    pub fn storage_key(table_id: &str) -> String {
        format!("{}:{}", Self::STORAGE_KEY, table_id)
    }

    pub fn with_limit(limit: u32) -> Self {
        Self {
            page: PageState::new(limit),
        }
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn current_page(&self) -> u32 {
        self.page.current_page
    }

    pub fn limit(&self) -> u32 {
        self.page.limit
    }

    pub fn sorting(&self) -> &[SortSpec] {
        &self.page.sorting
    }

    pub fn set_page(&mut self, page: u32) {
        self.page.current_page = page.max(1);
    }

    /// A new page size invalidates the current page number.
    pub fn set_limit(&mut self, limit: u32) {
        self.page.limit = limit.max(1);
        self.page.current_page = 1;
    }

    pub fn set_sorting(&mut self, sorting: Vec<SortSpec>) {
        self.page.sorting = sorting;
        self.page.current_page = 1;
    }

    /// Header click: ascending, then descending, then unsorted.
    pub fn toggle_sort(&mut self, column: &str) {
        let next = match self.page.sorting.first() {
            Some(current) if current.id == column && !current.desc => Some(SortSpec::desc(column)),
            Some(current) if current.id == column => None,
            _ => Some(SortSpec::asc(column)),
        };
        self.set_sorting(next.into_iter().collect());
    }

    pub fn sort_direction(&self, column: &str) -> Option<bool> {
        self.page
            .sorting
            .first()
            .filter(|s| s.id == column)
            .map(|s| s.desc)
    }

    pub fn offset(&self) -> u64 {
        self.page.offset()
    }

    pub fn total_pages(&self, total_records: u64) -> u32 {
        self.page.total_pages(total_records)
    }

    pub fn reset(&mut self) {
        self.page = PageState::new(self.page.limit);
    }
}
