pub mod p100_sales_invoice;
pub mod p200_inventory;

pub use p100_sales_invoice::ui::SalesInvoiceList;
pub use p200_inventory::ui::InventoryList;
