use contracts::shared::filters::{FilterDimension, FilterSet};
use serde::{Deserialize, Serialize};

use crate::shared::storage::PersistedState;

/// Paid status, PO type and salesperson selections of the sales reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesFilter {
    filters: FilterSet,
}

impl PersistedState for SalesFilter {
    const STORAGE_KEY: &'static str = "sales-filter";
}

impl SalesFilter {
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn set_paid_status(&mut self, values: Vec<String>) {
        self.filters.set(FilterDimension::PaidStatus, values);
    }

    pub fn set_po_type(&mut self, values: Vec<String>) {
        self.filters.set(FilterDimension::PoType, values);
    }

    pub fn set_sales_person_name(&mut self, values: Vec<String>) {
        self.filters.set(FilterDimension::SalesPersonName, values);
    }

    /// Returns `true` when the value is selected afterwards.
    pub fn toggle(&mut self, dimension: FilterDimension, value: &str) -> bool {
        self.filters.toggle(dimension, value)
    }

    pub fn clear(&mut self, dimension: FilterDimension) {
        self.filters.clear(dimension);
    }

    pub fn active_count(&self) -> usize {
        self.filters.active_count()
    }

    pub fn reset(&mut self) {
        self.filters = FilterSet::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_replace_one_dimension() {
        let mut filter = SalesFilter::default();
        filter.set_paid_status(vec!["Paid".into(), "Paid".into()]);
        filter.set_sales_person_name(vec!["Bob".into(), "Alice".into()]);
        assert_eq!(filter.filters().values(FilterDimension::PaidStatus), ["Paid"]);
        assert_eq!(filter.active_count(), 2);

        filter.set_sales_person_name(Vec::new());
        assert_eq!(filter.active_count(), 1);
        assert_eq!(filter.filters().values(FilterDimension::PaidStatus), ["Paid"]);
    }

    #[test]
    fn toggle_and_clear() {
        let mut filter = SalesFilter::default();
        assert!(filter.toggle(FilterDimension::PoType, "Retail"));
        assert!(!filter.toggle(FilterDimension::PoType, "Retail"));
        filter.toggle(FilterDimension::PoType, "Export");
        filter.clear(FilterDimension::PoType);
        assert_eq!(filter.active_count(), 0);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut filter = SalesFilter::default();
        filter.set_po_type(vec!["Retail".into()]);
        filter.reset();
        let once = filter.clone();
        filter.reset();
        assert_eq!(filter, once);
        assert!(filter.filters().is_empty());
    }
}
