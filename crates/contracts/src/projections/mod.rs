pub mod p100_sales_invoice;
pub mod p200_inventory;
