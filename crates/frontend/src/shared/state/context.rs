use leptos::prelude::*;
use std::rc::Rc;

use crate::shared::storage::KeyValueStorage;

use super::company::CompanyFilter;
use super::handle::StoreHandle;
use super::months::MonthSelection;
use super::period::PeriodFilter;
use super::sales_filter::SalesFilter;
use super::sidebar::SidebarState;
use super::table::TableState;

/// Filter stores shared by every report screen.
#[derive(Clone, Copy)]
pub struct FilterStores {
    pub period: StoreHandle<PeriodFilter>,
    pub company: StoreHandle<CompanyFilter>,
    pub sales: StoreHandle<SalesFilter>,
    pub months: StoreHandle<MonthSelection>,
    pub sidebar: StoreHandle<SidebarState>,
    storage: StoredValue<Rc<dyn KeyValueStorage>, LocalStorage>,
}

impl FilterStores {
    pub fn load(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            period: StoreHandle::load(storage.clone()),
            company: StoreHandle::load(storage.clone()),
            sales: StoreHandle::load(storage.clone()),
            months: StoreHandle::load(storage.clone()),
            sidebar: StoreHandle::load(storage.clone()),
            storage: StoredValue::new_local(storage),
        }
    }

    /// Paging state of one table, `table:<table_id>`. A table seen for the
    /// first time starts with `default_limit` rows per page.
    pub fn table(&self, table_id: &str, default_limit: u32) -> StoreHandle<TableState> {
        let storage = self.storage.get_value();
        let key = TableState::storage_key(table_id);
        let fresh = storage.get_item(&key).is_none();
        let handle = StoreHandle::load_with_key(storage, key);
        if fresh {
            handle.update(|t| *t = TableState::with_limit(default_limit));
        }
        handle
    }

    /// Clear every report filter. Layout preferences are kept.
    pub fn reset_filters(&self) {
        self.period.reset();
        self.company.reset();
        self.sales.reset();
        self.months.reset();
    }
}

pub fn provide_filter_stores(storage: Rc<dyn KeyValueStorage>) -> FilterStores {
    let stores = FilterStores::load(storage);
    provide_context(stores);
    stores
}

pub fn use_filter_stores() -> FilterStores {
    use_context::<FilterStores>().expect("FilterStores not provided in context")
}
