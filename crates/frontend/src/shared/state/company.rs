use serde::{Deserialize, Serialize};

use crate::shared::storage::PersistedState;

/// Companies the reports are scoped to. Most screens use only the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFilter {
    #[serde(default)]
    company_ids: Vec<String>,
}

impl PersistedState for CompanyFilter {
    const STORAGE_KEY: &'static str = "company-filter";
}

impl CompanyFilter {
    /// Replace the selection. Blank and repeated ids are dropped.
    pub fn set_companies(&mut self, ids: Vec<String>) {
        let mut unique: Vec<String> = Vec::with_capacity(ids.len());
        for id in ids {
            let id = id.trim().to_string();
            if !id.is_empty() && !unique.contains(&id) {
                unique.push(id);
            }
        }
        self.company_ids = unique;
    }

    pub fn toggle_company(&mut self, id: &str) {
        let mut ids = self.company_ids.clone();
        match ids.iter().position(|c| c == id) {
            Some(pos) => {
                ids.remove(pos);
            }
            None => ids.push(id.to_string()),
        }
        self.set_companies(ids);
    }

    pub fn selected(&self) -> &[String] {
        &self.company_ids
    }

    /// The selection, or `[fallback]` when nothing is selected.
    pub fn company_ids(&self, fallback: &str) -> Vec<String> {
        if self.company_ids.is_empty() {
            vec![fallback.to_string()]
        } else {
            self.company_ids.clone()
        }
    }

    pub fn primary_company(&self, fallback: &str) -> String {
        self.company_ids
            .first()
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }

    pub fn reset(&mut self) {
        self.company_ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_reads_as_fallback() {
        let filter = CompanyFilter::default();
        assert_eq!(filter.company_ids("BIS"), vec!["BIS"]);
        assert_eq!(filter.primary_company("BIS"), "BIS");
    }

    #[test]
    fn set_and_toggle_keep_set_semantics() {
        let mut filter = CompanyFilter::default();
        filter.set_companies(vec!["KMS".into(), " ".into(), "KMS".into(), "BIS".into()]);
        assert_eq!(filter.selected(), ["KMS", "BIS"]);
        assert_eq!(filter.primary_company("XXX"), "KMS");

        filter.toggle_company("KMS");
        assert_eq!(filter.selected(), ["BIS"]);
        filter.toggle_company("ABC");
        assert_eq!(filter.company_ids("XXX"), vec!["BIS", "ABC"]);

        filter.reset();
        filter.reset();
        assert_eq!(filter, CompanyFilter::default());
    }
}
