pub mod bar_chart;
pub mod company_selector;
pub mod faceted_filter;
pub mod filter_panel;
pub mod month_selector;
pub mod page_header;
pub mod pagination_controls;
pub mod period_picker;
pub mod query_feedback;
pub mod stat_card;
pub mod status_badge;
pub mod table;

pub use bar_chart::{BarChart, ChartSeries};
pub use company_selector::CompanySelector;
pub use faceted_filter::FacetedFilter;
pub use filter_panel::{FilterPanel, FilterTag, SalesFilterTags};
pub use month_selector::MonthSelector;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use period_picker::PeriodPicker;
pub use query_feedback::QueryFeedback;
pub use stat_card::{StatCard, StatFormat};
pub use status_badge::StatusBadge;
