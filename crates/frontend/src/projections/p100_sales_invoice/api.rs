use contracts::projections::p100_sales_invoice::SalesInvoiceHdDto;
use contracts::shared::envelope::ApiEnvelope;
use contracts::shared::filters::FilterDimension;
use contracts::shared::options::{FilterOption, OptionRow};
use contracts::shared::paging::PageState;
use leptos::prelude::*;

use crate::shared::options::to_options;
use crate::shared::query::{
    require_company, require_period, use_query, use_report_scope, ApiRoute, Endpoint,
    QueryError, QueryHandle, QueryKey, QueryParams, QueryRequest, ReportScope,
};
use crate::shared::state::{page_for_inputs, StoreHandle, TableState};

pub const LIST: Endpoint = Endpoint::new("sls", "sales-invoice-hd", "getByPeriod");
pub const PAID_STATUS_OPTIONS: Endpoint = Endpoint::new("sls", "sales-invoice-hd", "getPaidStatus");
pub const PO_TYPE_OPTIONS: Endpoint = Endpoint::new("sls", "sales-invoice-hd", "getPoType");
pub const SALES_PERSON_OPTIONS: Endpoint =
    Endpoint::new("sls", "sales-invoice-hd", "getSalesPerson");

const LIST_SCOPE: &str = "p100";
const OPTIONS_SCOPE: &str = "sales-invoice-options";

pub type InvoicePage = ApiEnvelope<SalesInvoiceHdDto>;
pub type OptionRows = ApiEnvelope<OptionRow>;

pub fn options_endpoint(dimension: FilterDimension) -> Endpoint {
    match dimension {
        FilterDimension::PaidStatus => PAID_STATUS_OPTIONS,
        FilterDimension::PoType => PO_TYPE_OPTIONS,
        FilterDimension::SalesPersonName => SALES_PERSON_OPTIONS,
    }
}

/// One page of invoice headers for the current company, period and filters.
pub fn invoice_list_request(
    scope: &ReportScope,
    page: &PageState,
) -> Result<QueryRequest, QueryError> {
    let company = require_company(Some(scope.company_id.as_str()))?;
    let period = require_period(&scope.period)?;

    let params = QueryParams::new()
        .push_period(&period)
        .push_filters(&scope.filters)
        .push_page(page);
    let key = QueryKey::new(LIST_SCOPE)
        .with(company)
        .with_period(&period)
        .with_filters(&scope.filters)
        .with(page.current_page)
        .with(page.limit)
        .with_opt(page.order_by())
        .with_opt(page.order_dir());

    Ok(QueryRequest::new(
        key,
        ApiRoute::new(scope.base.as_str(), company, LIST).url(&params),
    ))
}

/// Values for one filter dimension.
///
/// Every dimension goes through this single request shape. The selection
/// of the other dimensions narrows the list; the dimension's own selection
/// does not, so already picked values stay visible.
pub fn filter_options_request(
    scope: &ReportScope,
    dimension: FilterDimension,
) -> Result<QueryRequest, QueryError> {
    let company = require_company(Some(scope.company_id.as_str()))?;
    let period = require_period(&scope.period)?;

    let mut others = scope.filters.clone();
    others.clear(dimension);

    let params = QueryParams::new().push_period(&period).push_filters(&others);
    let key = QueryKey::new(OPTIONS_SCOPE)
        .with(dimension.param_name())
        .with(company)
        .with_period(&period)
        .with_filters(&others);

    Ok(QueryRequest::new(
        key,
        ApiRoute::new(scope.base.as_str(), company, options_endpoint(dimension)).url(&params),
    ))
}

pub fn use_sales_invoices(table: StoreHandle<TableState>) -> QueryHandle<InvoicePage> {
    let scope = use_report_scope();
    let paged = Memo::new(move |previous: Option<&(ReportScope, PageState)>| {
        let scope = scope.get();
        let page = page_for_inputs(previous, &scope, table.with(|t| t.page().clone()));
        (scope, page)
    });
    let request = Signal::derive(move || {
        paged.with(|(scope, page)| invoice_list_request(scope, page)).ok()
    });
    use_query(request)
}

pub fn use_filter_options(dimension: FilterDimension) -> QueryHandle<OptionRows> {
    let scope = use_report_scope();
    let request = Signal::derive(move || {
        scope
            .with(|s| filter_options_request(s, dimension))
            .ok()
    });
    use_query(request)
}

/// Options of a filter dimension, ready for a [`FacetedFilter`](crate::shared::components::FacetedFilter).
pub fn option_list(handle: QueryHandle<OptionRows>) -> Signal<Vec<FilterOption>> {
    Signal::derive(move || {
        handle
            .state
            .with(|s| s.data.as_ref().map(|env| to_options(&env.data)))
            .unwrap_or_default()
    })
}
