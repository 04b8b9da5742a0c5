use contracts::shared::filters::FilterSet;
use contracts::shared::period::Period;
use leptos::prelude::*;

use crate::shared::api_utils::api_base;
use crate::shared::config::use_config;
use crate::shared::state::use_filter_stores;

/// Store values every report request is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportScope {
    pub base: String,
    pub company_id: String,
    pub period: Period,
    pub filters: FilterSet,
}

/// Memoised [`ReportScope`]; hooks derived from it only re-run when one of
/// the underlying stores actually changes.
pub fn use_report_scope() -> Memo<ReportScope> {
    let stores = use_filter_stores();
    let config = use_config();
    let base = api_base(&config.api);
    let fallback = config.filters.default_company;

    Memo::new(move |_| ReportScope {
        base: base.clone(),
        company_id: stores.company.with(|c| c.primary_company(&fallback)),
        period: stores.period.with(|p| p.period()),
        filters: stores.sales.with(|s| s.filters().clone()),
    })
}
