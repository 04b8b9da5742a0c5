use contracts::dashboards::d100_sales_dashboard::{DashboardSummary, SalesPersonRow};
use contracts::shared::filters::FilterDimension;
use contracts::shared::period::MonthKey;
use leptos::prelude::*;
use thaw::*;

use crate::dashboards::d100_sales_dashboard::api::{
    by_period_request, use_month_comparison, use_sales_by_period, use_sales_by_sales_person,
};
use crate::dashboards::d100_sales_dashboard::chart::{monthly_series, top_sales_persons};
use crate::projections::p100_sales_invoice::api::{option_list, use_filter_options};
use crate::shared::components::table::{format_number_int, TableCellMoney};
use crate::shared::components::{
    BarChart, FacetedFilter, FilterPanel, MonthSelector, PageHeader, PeriodPicker, QueryFeedback,
    SalesFilterTags, StatCard, StatFormat,
};
use crate::shared::icons::icon;
use crate::shared::query::use_report_scope;
use crate::shared::state::use_filter_stores;

const TOP_SALES_PERSONS: usize = 10;

/// Sales overview: headline cards, monthly trend, sales persons and a
/// free month comparison.
#[component]
pub fn SalesDashboard() -> impl IntoView {
    let stores = use_filter_stores();
    let scope = use_report_scope();

    let by_period = use_sales_by_period();
    let by_person = use_sales_by_sales_person();
    let comparison = use_month_comparison();

    let paid_status = use_filter_options(FilterDimension::PaidStatus);
    let po_type = use_filter_options(FilterDimension::PoType);
    let sales_person = use_filter_options(FilterDimension::SalesPersonName);

    let summary = Memo::new(move |_| {
        by_period.state.with(|s| {
            s.data
                .as_ref()
                .map(|env| DashboardSummary::from_rows(&env.data, env.grand_total_amount))
        })
    });

    let period_months = Memo::new(move |_| scope.with(|s| s.period.months()));
    let trend = Memo::new(move |_| {
        let rows = by_period
            .state
            .with(|s| s.data.as_ref().map(|env| env.data.clone()))
            .unwrap_or_default();
        period_months.with(|months| monthly_series(months, &rows))
    });

    let compared = Memo::new(move |_| {
        let months: Vec<MonthKey> = stores.months.with(|m| m.months().to_vec());
        let rows = comparison
            .state
            .with(|s| s.data.as_ref().map(|env| env.data.clone()))
            .unwrap_or_default();
        monthly_series(&months, &rows)
    });

    let top_persons = move || {
        by_person
            .state
            .with(|s| {
                s.data
                    .as_ref()
                    .map(|env| top_sales_persons(&env.data, TOP_SALES_PERSONS))
            })
            .unwrap_or_default()
    };

    let period_hint = move || scope.with(by_period_request).err().map(|e| e.message());
    let is_expanded = RwSignal::new(true);
    let active_filters_count = Signal::derive(move || stores.sales.with(|s| s.active_count()));

    let refresh_all = move |_: leptos::ev::MouseEvent| {
        by_period.refetch();
        by_person.refetch();
        comparison.refetch();
    };

    view! {
        <div class="page sales-dashboard">
            <PageHeader title="Sales Dashboard" subtitle=Signal::derive(move || {
                scope.with(|s| {
                    s.period.bounds().map(|(start, end)| {
                        format!("{} · {} to {}", s.company_id, start.label(), end.label())
                    })
                })
            })>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=refresh_all
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <FilterPanel
                is_expanded=is_expanded
                active_filters_count=active_filters_count
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
                    </div>
                }
                filter_tags=move || view! { <SalesFilterTags /> }
            />

            {move || period_hint().map(|hint| view! {
                <div class="page__hint" style="padding: 12px; opacity: 0.8;">{hint}</div>
            })}

            <div class="stat-grid" style="display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 12px; margin: 12px 0;">
                <StatCard
                    label="Total sales"
                    icon_name="money"
                    value=Signal::derive(move || summary.get().map(|s| s.total_sales))
                    format=StatFormat::Money
                />
                <StatCard
                    label="Invoices"
                    icon_name="invoice"
                    value=Signal::derive(move || summary.get().map(|s| s.total_invoices as f64))
                    format=StatFormat::Integer
                />
                <StatCard
                    label="Paid"
                    icon_name="check"
                    value=Signal::derive(move || summary.get().map(|s| s.paid_amount))
                    format=StatFormat::Money
                />
                <StatCard
                    label="Outstanding"
                    icon_name="alert"
                    value=Signal::derive(move || summary.get().map(|s| s.outstanding_amount))
                    format=StatFormat::Money
                />
            </div>

            <section class="dashboard-card">
                <h2 class="dashboard-card__title">"Sales by month"</h2>
                <QueryFeedback
                    loading=Signal::derive(move || by_period.is_loading())
                    error=Signal::derive(move || by_period.error().map(|e| e.message()))
                    on_retry=Callback::new(move |_| by_period.refetch())
                />
                <BarChart
                    categories=Signal::derive(move || trend.with(|t| t.0.clone()))
                    series=Signal::derive(move || trend.with(|t| t.1.clone()))
                />
            </section>

            <section class="dashboard-card">
                <h2 class="dashboard-card__title">"Top sales persons"</h2>
                <QueryFeedback
                    loading=Signal::derive(move || by_person.is_loading())
                    error=Signal::derive(move || by_person.error().map(|e| e.message()))
                    on_retry=Callback::new(move |_| by_person.refetch())
                />
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Sales person"</TableHeaderCell>
                            <TableHeaderCell>"Invoices"</TableHeaderCell>
                            <TableHeaderCell>"Amount"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || top_persons().into_iter().map(sales_person_row).collect_view()}
                    </TableBody>
                </Table>
            </section>

            <section class="dashboard-card">
                <h2 class="dashboard-card__title">"Compare months"</h2>
                <div style="display: grid; grid-template-columns: minmax(240px, 320px) 1fr; gap: 16px;">
                    <MonthSelector />
                    <div>
                        <QueryFeedback
                            loading=Signal::derive(move || comparison.is_loading())
                            error=Signal::derive(move || comparison.error().map(|e| e.message()))
                            on_retry=Callback::new(move |_| comparison.refetch())
                        />
                        <Show
                            when=move || stores.months.with(|m| !m.is_empty())
                            fallback=|| view! { <div class="page__hint">"Select months to compare."</div> }
                        >
                            <BarChart
                                categories=Signal::derive(move || compared.with(|c| c.0.clone()))
                                series=Signal::derive(move || compared.with(|c| c.1.clone()))
                            />
                        </Show>
                    </div>
                </div>
            </section>
        </div>
    }
}

fn sales_person_row(row: SalesPersonRow) -> impl IntoView {
    view! {
        <TableRow>
            <TableCell><TableCellLayout>{row.sales_person_name}</TableCellLayout></TableCell>
            <TableCell class="text-right">{format_number_int(row.invoice_count as f64)}</TableCell>
            <TableCellMoney value=Some(row.amount) bold=true />
        </TableRow>
    }
}
