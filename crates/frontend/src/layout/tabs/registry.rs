//! Maps a tab key to the page it shows.

use leptos::prelude::*;

use crate::dashboards::SalesDashboard;
use crate::domain::{BillboardList, BrandList, CategoryList};
use crate::projections::{InventoryList, SalesInvoiceList};

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d100_sales_dashboard" => view! { <SalesDashboard /> }.into_any(),
        "p100_sales_invoice" => view! { <SalesInvoiceList /> }.into_any(),
        "p200_inventory" => view! { <InventoryList /> }.into_any(),
        "a001_brand" => view! { <BrandList /> }.into_any(),
        "a002_category" => view! { <CategoryList /> }.into_any(),
        "a003_billboard" => view! { <BillboardList /> }.into_any(),
        other => {
            log::warn!("no page registered for tab '{}'", other);
            view! {
                <div class="page">
                    <div class="error-message">{format!("Unknown page: {}", other)}</div>
                </div>
            }
            .into_any()
        }
    }
}
