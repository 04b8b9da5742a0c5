use contracts::projections::p200_inventory::InventoryItemDto;
use contracts::shared::envelope::ApiEnvelope;
use contracts::shared::paging::PageState;
use leptos::prelude::*;

use crate::shared::query::{
    require_company, use_query, use_report_scope, ApiRoute, Endpoint, QueryError, QueryHandle,
    QueryKey, QueryParams, QueryRequest,
};
use crate::shared::state::{page_for_inputs, StoreHandle, TableState};

pub const LIST: Endpoint = Endpoint::new("inv", "stock", "getInventory");

pub type InventoryPage = ApiEnvelope<InventoryItemDto>;

/// Search inputs of the inventory screen. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryFilter {
    pub search: String,
    pub low_stock_only: bool,
}

/// Stock is a snapshot, so only the company is required.
pub fn inventory_request(
    base: &str,
    company_id: &str,
    filter: &InventoryFilter,
    page: &PageState,
) -> Result<QueryRequest, QueryError> {
    let company = require_company(Some(company_id))?;
    let search = filter.search.trim();
    let search = (!search.is_empty()).then_some(search);

    let params = QueryParams::new()
        .push_opt("search", search)
        .push_opt("lowStockOnly", filter.low_stock_only.then_some(true))
        .push_page(page);
    let key = QueryKey::new("p200")
        .with(company)
        .with_opt(search)
        .with(filter.low_stock_only)
        .with(page.current_page)
        .with(page.limit)
        .with_opt(page.order_by())
        .with_opt(page.order_dir());

    Ok(QueryRequest::new(
        key,
        ApiRoute::new(base, company, LIST).url(&params),
    ))
}

pub fn use_inventory(
    filter: Signal<InventoryFilter>,
    table: StoreHandle<TableState>,
) -> QueryHandle<InventoryPage> {
    let scope = use_report_scope();
    let paged = Memo::new(move |previous: Option<&((String, InventoryFilter), PageState)>| {
        let inputs = (scope.with(|s| s.company_id.clone()), filter.get());
        let page = page_for_inputs(previous, &inputs, table.with(|t| t.page().clone()));
        (inputs, page)
    });
    let request = Signal::derive(move || {
        let base = scope.with(|s| s.base.clone());
        paged
            .with(|((company_id, filter), page)| {
                inventory_request(&base, company_id, filter, page)
            })
            .ok()
    });
    use_query(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_is_omitted() {
        let filter = InventoryFilter {
            search: "  ".into(),
            low_stock_only: false,
        };
        let request = inventory_request("", "BIS", &filter, &PageState::new(50)).unwrap();
        assert_eq!(request.url, "BIS/inv/stock/getInventory?page=1&limit=50");
    }

    #[test]
    fn search_and_low_stock_are_sent() {
        let filter = InventoryFilter {
            search: " usb cable ".into(),
            low_stock_only: true,
        };
        let request = inventory_request("https://api", "KMS", &filter, &PageState::new(10)).unwrap();
        assert_eq!(
            request.url,
            "https://api/KMS/inv/stock/getInventory?search=usb%20cable&lowStockOnly=true&page=1&limit=10"
        );
        assert_eq!(request.key.parts()[2], "usb cable");
    }

    #[test]
    fn requires_company() {
        let err = inventory_request("", "", &InventoryFilter::default(), &PageState::new(10));
        assert!(matches!(err, Err(QueryError::InvalidRequest(_))));
    }
}
