use chrono::Utc;
use contracts::projections::p100_sales_invoice::SalesInvoiceHdDto;
use contracts::shared::filters::FilterDimension;
use leptos::prelude::*;
use thaw::*;

use crate::projections::p100_sales_invoice::api::{
    invoice_list_request, option_list, use_filter_options, use_sales_invoices,
};
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::components::{
    FacetedFilter, FilterPanel, PageHeader, PaginationControls, PeriodPicker, QueryFeedback,
    SalesFilterTags, StatusBadge,
};
use crate::shared::config::use_config;
use crate::shared::date_utils::{format_date, format_opt_date};
use crate::shared::icons::icon;
use crate::shared::query::{use_report_scope, ReportScope};
use crate::shared::state::use_filter_stores;

pub const TABLE_ID: &str = "p100-sales-invoice";

#[component]
pub fn SalesInvoiceList() -> impl IntoView {
    let stores = use_filter_stores();
    let config = use_config();
    let table = stores.table(TABLE_ID, config.filters.default_page_size);
    let page_size_options = config.filters.page_size_options.clone();

    let invoices = use_sales_invoices(table);
    let paid_status = use_filter_options(FilterDimension::PaidStatus);
    let po_type = use_filter_options(FilterDimension::PoType);
    let sales_person = use_filter_options(FilterDimension::SalesPersonName);

    // A new company, period or filter starts from the first page.
    let scope = use_report_scope();
    Effect::new(move |prev: Option<ReportScope>| {
        let current = scope.get();
        if prev.is_some_and(|p| p != current) {
            table.update(|t| t.set_page(1));
        }
        current
    });

    let is_expanded = RwSignal::new(true);
    let active_filters_count = Signal::derive(move || {
        stores.sales.with(|s| s.active_count())
            + stores.period.with(|p| usize::from(p.period().is_complete()))
    });

    let disabled_reason = move || {
        let page = table.with(|t| t.page().clone());
        scope
            .with(|s| invoice_list_request(s, &page))
            .err()
            .map(|e| e.message())
    };
    let total_count = Signal::derive(move || {
        invoices
            .state
            .with(|s| s.data.as_ref().map(|env| env.total()))
            .unwrap_or(0)
    });
    let rows = move || {
        invoices
            .state
            .with(|s| s.data.as_ref().map(|env| env.data.clone()))
            .unwrap_or_default()
    };

    view! {
        <div class="page sales-invoice-list">
            <PageHeader title="Sales Invoices" subtitle="Invoice headers for the selected period">
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| invoices.refetch()
                    disabled=Signal::derive(move || invoices.is_fetching())
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <FilterPanel
                is_expanded=is_expanded
                active_filters_count=active_filters_count
                header_extra=move || view! {
                    <PaginationControls
                        table=table
                        total_count=total_count
                        page_size_options=page_size_options.clone()
                    />
                }
                filter_content=move || view! {
                    <div class="filter-panel__row" style="display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end;">
                        <PeriodPicker />
                        <FacetedFilter
                            dimension=FilterDimension::PaidStatus
                            options=option_list(paid_status)
                            loading=Signal::derive(move || paid_status.is_loading())
                        />
                        <FacetedFilter
                            dimension=FilterDimension::PoType
                            options=option_list(po_type)
                            loading=Signal::derive(move || po_type.is_loading())
                        />
                        <FacetedFilter
                            dimension=FilterDimension::SalesPersonName
                            options=option_list(sales_person)
                            loading=Signal::derive(move || sales_person.is_loading())
                        />
                        <button
                            class="button button--ghost button--small"
                            on:click=move |_| stores.sales.reset()
                        >
                            "Clear filters"
                        </button>
                    </div>
                }
                filter_tags=move || view! { <SalesFilterTags /> }
            />

            {move || {
                disabled_reason().map(|reason| view! {
                    <div class="page__hint" style="padding: 12px; opacity: 0.8;">{reason}</div>
                })
            }}

            <QueryFeedback
                loading=Signal::derive(move || invoices.is_loading())
                error=Signal::derive(move || invoices.error().map(|e| e.message()))
                on_retry=Callback::new(move |_| invoices.refetch())
            />

            <div class="table-wrapper" style="overflow-x: auto;">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Invoice" column="invoiceNo" table=table />
                            <SortableHeaderCell label="Date" column="invoiceDate" table=table />
                            <SortableHeaderCell label="Due" column="dueDate" table=table />
                            <SortableHeaderCell label="Customer" column="customerName" table=table />
                            <SortableHeaderCell label="Sales Person" column="salesPersonName" table=table />
                            <TableHeaderCell>"PO Type"</TableHeaderCell>
                            <SortableHeaderCell label="Status" column="paidStatus" table=table />
                            <SortableHeaderCell label="Amount" column="amount" table=table align="right" />
                            <TableHeaderCell>"Balance"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || rows().into_iter().map(invoice_row).collect_view()}
                    </TableBody>
                </Table>
                <Show when=move || invoices.state.with(|s| s.data.as_ref().is_some_and(|d| d.data.is_empty()))>
                    <div class="table__empty" style="padding: 24px; text-align: center; opacity: 0.7;">
                        "No invoices match the current filters."
                    </div>
                </Show>
            </div>
        </div>
    }
}

fn invoice_row(row: SalesInvoiceHdDto) -> impl IntoView {
    let today = Utc::now().date_naive();
    let overdue = row.is_overdue(today);
    let status = if overdue && row.paid_status.eq_ignore_ascii_case("unpaid") {
        "Overdue".to_string()
    } else {
        row.paid_status.clone()
    };
    let balance = row.balance();

    view! {
        <TableRow>
            <TableCell><TableCellLayout>{row.invoice_no}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{format_date(row.invoice_date)}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{format_opt_date(row.due_date)}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{row.customer_name}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{row.sales_person_name.unwrap_or_default()}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{row.po_type.unwrap_or_default()}</TableCellLayout></TableCell>
            <TableCell><StatusBadge status=status /></TableCell>
            <TableCellMoney value=Some(row.amount) />
            <TableCellMoney value=Some(balance) bold=overdue />
        </TableRow>
    }
}
