pub mod list;

pub use list::SalesInvoiceList;
