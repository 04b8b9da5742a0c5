//! Multi-select filter dimensions shared by the sales reports.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterDimension {
    PaidStatus,
    PoType,
    SalesPersonName,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 3] = [
        FilterDimension::PaidStatus,
        FilterDimension::PoType,
        FilterDimension::SalesPersonName,
    ];

    /// Query-string key used by the report endpoints.
    pub fn param_name(&self) -> &'static str {
        match self {
            FilterDimension::PaidStatus => "paidStatus",
            FilterDimension::PoType => "poType",
            FilterDimension::SalesPersonName => "salesPersonName",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FilterDimension::PaidStatus => "Paid Status",
            FilterDimension::PoType => "PO Type",
            FilterDimension::SalesPersonName => "Sales Person",
        }
    }
}

/// Selected values per dimension.
///
/// Each list behaves like a set (no duplicates) but keeps insertion order so
/// the serialized query string is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    #[serde(default)]
    pub paid_status: Vec<String>,
    #[serde(default)]
    pub po_type: Vec<String>,
    #[serde(default)]
    pub sales_person_name: Vec<String>,
}

impl FilterSet {
    pub fn values(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::PaidStatus => &self.paid_status,
            FilterDimension::PoType => &self.po_type,
            FilterDimension::SalesPersonName => &self.sales_person_name,
        }
    }

    fn values_mut(&mut self, dimension: FilterDimension) -> &mut Vec<String> {
        match dimension {
            FilterDimension::PaidStatus => &mut self.paid_status,
            FilterDimension::PoType => &mut self.po_type,
            FilterDimension::SalesPersonName => &mut self.sales_person_name,
        }
    }

    /// Replace the selection of one dimension; duplicates are dropped,
    /// first occurrence wins.
    pub fn set(&mut self, dimension: FilterDimension, values: Vec<String>) {
        let mut unique: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        *self.values_mut(dimension) = unique;
    }

    pub fn contains(&self, dimension: FilterDimension, value: &str) -> bool {
        self.values(dimension).iter().any(|v| v == value)
    }

    /// Add the value if absent, remove it otherwise. Returns `true` when
    /// the value is selected afterwards.
    pub fn toggle(&mut self, dimension: FilterDimension, value: &str) -> bool {
        let values = self.values_mut(dimension);
        if let Some(pos) = values.iter().position(|v| v == value) {
            values.remove(pos);
            false
        } else {
            values.push(value.to_string());
            true
        }
    }

    pub fn clear(&mut self, dimension: FilterDimension) {
        self.values_mut(dimension).clear();
    }

    /// Number of dimensions with at least one selected value.
    pub fn active_count(&self) -> usize {
        FilterDimension::ALL
            .iter()
            .filter(|d| !self.values(**d).is_empty())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_deduplicates_and_keeps_order() {
        let mut filters = FilterSet::default();
        filters.set(
            FilterDimension::SalesPersonName,
            vec!["B".into(), "A".into(), "B".into()],
        );
        assert_eq!(filters.sales_person_name, vec!["B", "A"]);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut filters = FilterSet::default();
        assert!(filters.toggle(FilterDimension::PoType, "STD"));
        assert!(filters.contains(FilterDimension::PoType, "STD"));
        assert!(!filters.toggle(FilterDimension::PoType, "STD"));
        assert!(filters.is_empty());
    }

    #[test]
    fn active_count_counts_dimensions() {
        let mut filters = FilterSet::default();
        filters.toggle(FilterDimension::PaidStatus, "PAID");
        filters.toggle(FilterDimension::PaidStatus, "UNPAID");
        filters.toggle(FilterDimension::SalesPersonName, "A");
        assert_eq!(filters.active_count(), 2);
        filters.clear(FilterDimension::PaidStatus);
        assert_eq!(filters.active_count(), 1);
    }

    #[test]
    fn persisted_shape_is_camel_case() {
        let json = serde_json::to_value(FilterSet::default()).unwrap();
        assert!(json.get("salesPersonName").is_some());
        assert!(json.get("paidStatus").is_some());
        let back: FilterSet = serde_json::from_str(r#"{"poType":["X"]}"#).unwrap();
        assert_eq!(back.po_type, vec!["X"]);
    }
}
