//! Tab titles, one place for every page key.

pub const DEFAULT_TAB: &str = "d100_sales_dashboard";

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d100_sales_dashboard" => "Sales Dashboard",
        "p100_sales_invoice" => "Sales Invoices",
        "p200_inventory" => "Inventory",
        "a001_brand" => "Brands",
        "a002_category" => "Categories",
        "a003_billboard" => "Billboards",
        _ => "Page",
    }
}
