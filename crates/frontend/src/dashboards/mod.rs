pub mod d100_sales_dashboard;

pub use d100_sales_dashboard::ui::SalesDashboard;
