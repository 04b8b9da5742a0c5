pub mod list;

pub use list::InventoryList;
