//! Persisted UI stores.
//!
//! Each store is a plain serializable state type with setters (unit-tested
//! without a browser) plus a [`StoreHandle`] that makes it reactive and
//! writes every change to local storage.

pub mod company;
pub mod context;
pub mod handle;
pub mod months;
pub mod period;
pub mod sales_filter;
pub mod sidebar;
pub mod table;

pub use company::CompanyFilter;
pub use context::{provide_filter_stores, use_filter_stores, FilterStores};
pub use handle::StoreHandle;
pub use months::{MonthSelection, SelectionOutcome};
pub use period::{PeriodFilter, PeriodNotice, END_PERIOD_RESET_MESSAGE};
pub use sales_filter::SalesFilter;
pub use sidebar::SidebarState;
pub use table::{page_for_inputs, TableState};
