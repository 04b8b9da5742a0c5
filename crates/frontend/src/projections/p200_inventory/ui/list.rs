use contracts::projections::p200_inventory::InventoryItemDto;
use leptos::prelude::*;
use thaw::*;

use crate::projections::p200_inventory::api::{use_inventory, InventoryFilter};
use crate::shared::components::table::{format_number_with_decimals, SortableHeaderCell, TableCellMoney};
use crate::shared::components::{PageHeader, PaginationControls, QueryFeedback, StatCard, StatFormat};
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::query::use_report_scope;
use crate::shared::state::use_filter_stores;

pub const TABLE_ID: &str = "p200-inventory";

#[component]
pub fn InventoryList() -> impl IntoView {
    let stores = use_filter_stores();
    let config = use_config();
    let table = stores.table(TABLE_ID, config.filters.default_page_size);
    let page_size_options = config.filters.page_size_options.clone();

    let search = RwSignal::new(String::new());
    let low_stock_only = RwSignal::new(false);
    let filter = Signal::derive(move || InventoryFilter {
        search: search.get(),
        low_stock_only: low_stock_only.get(),
    });

    // A new company or search starts from the first page.
    let scope = use_report_scope();
    Effect::new(move |prev: Option<(String, InventoryFilter)>| {
        let current = (scope.with(|s| s.company_id.clone()), filter.get());
        if prev.is_some_and(|p| p != current) {
            table.update(|t| t.set_page(1));
        }
        current
    });

    let inventory = use_inventory(filter, table);

    let rows = move || {
        inventory
            .state
            .with(|s| s.data.as_ref().map(|env| env.data.clone()))
            .unwrap_or_default()
    };
    let total_count = Signal::derive(move || {
        inventory
            .state
            .with(|s| s.data.as_ref().map(|env| env.total()))
            .unwrap_or(0)
    });
    let page_value = Signal::derive(move || {
        inventory.state.with(|s| {
            s.data
                .as_ref()
                .map(|env| env.data.iter().map(InventoryItemDto::stock_value).sum::<f64>())
        })
    });
    let reorder_count = Signal::derive(move || {
        inventory.state.with(|s| {
            s.data
                .as_ref()
                .map(|env| env.data.iter().filter(|i| i.needs_reorder()).count() as f64)
        })
    });

    view! {
        <div class="page inventory-list">
            <PageHeader title="Inventory" subtitle="Stock on hand by item and warehouse">
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| inventory.refetch()
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="stat-grid" style="display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 12px; margin-bottom: 12px;">
                <StatCard
                    label="Items"
                    icon_name="inventory"
                    value=Signal::derive(move || inventory.state.with(|s| s.data.as_ref().map(|env| env.total() as f64)))
                    format=StatFormat::Integer
                />
                <StatCard
                    label="Stock value (this page)"
                    icon_name="money"
                    value=page_value
                    format=StatFormat::Money
                />
                <StatCard
                    label="Below reorder level"
                    icon_name="alert"
                    value=reorder_count
                    format=StatFormat::Integer
                    subtitle=Signal::derive(|| Some("on this page".to_string()))
                />
            </div>

            <div class="filter-panel__row" style="display: flex; gap: 12px; align-items: center; margin-bottom: 8px;">
                <Input value=search placeholder="Item code or name" />
                <Checkbox checked=low_stock_only label="Below reorder level only" />
                <div style="margin-left: auto;">
                    <PaginationControls
                        table=table
                        total_count=total_count
                        page_size_options=page_size_options
                    />
                </div>
            </div>

            <QueryFeedback
                loading=Signal::derive(move || inventory.is_loading())
                error=Signal::derive(move || inventory.error().map(|e| e.message()))
                on_retry=Callback::new(move |_| inventory.refetch())
            />

            <div class="table-wrapper" style="overflow-x: auto;">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Code" column="itemCode" table=table />
                            <SortableHeaderCell label="Item" column="itemName" table=table />
                            <SortableHeaderCell label="Category" column="category" table=table />
                            <SortableHeaderCell label="Warehouse" column="warehouse" table=table />
                            <SortableHeaderCell label="On hand" column="qtyOnHand" table=table align="right" />
                            <SortableHeaderCell label="Unit cost" column="unitCost" table=table align="right" />
                            <TableHeaderCell>"Value"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || rows().into_iter().map(inventory_row).collect_view()}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}

fn inventory_row(item: InventoryItemDto) -> impl IntoView {
    let value = item.stock_value();
    let qty_style = if item.needs_reorder() {
        "color: var(--color-error-700); font-weight: 600;"
    } else {
        ""
    };
    let qty = match item.unit.as_deref() {
        Some(unit) => format!("{} {}", format_number_with_decimals(item.qty_on_hand, 2), unit),
        None => format_number_with_decimals(item.qty_on_hand, 2),
    };

    view! {
        <TableRow>
            <TableCell><TableCellLayout>{item.item_code}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{item.item_name}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{item.category.unwrap_or_default()}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{item.warehouse.unwrap_or_default()}</TableCellLayout></TableCell>
            <TableCell class="text-right">
                <span style=qty_style>{qty}</span>
            </TableCell>
            <TableCellMoney value=Some(item.unit_cost) />
            <TableCellMoney value=Some(value) bold=true />
        </TableRow>
    }
}
