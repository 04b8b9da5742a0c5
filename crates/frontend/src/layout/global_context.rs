use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::layout::tabs::tab_label_for_key;

/// Open tabs and the active one. The active key is mirrored in the
/// address bar as `?active=<key>` so a reload reopens the same page.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
        }
    }

    /// Open the tab named in `?active=`, or `fallback` when there is none,
    /// then keep the query string in sync with the active tab.
    pub fn init_router_integration(&self, fallback: &str) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let key = active_from_query(&search).unwrap_or_else(|| fallback.to_string());
        self.open_tab(&key, tab_label_for_key(&key));

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = active_query(&active_key);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(history) = window().and_then(|w| w.history().ok()) {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("opening tab {}", key);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    /// Close `key`; when it was active the last remaining tab takes over.
    pub fn close_tab(&self, key: &str) {
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.with(|a| a.as_deref() == Some(key))
    }
}

fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|k| !k.is_empty()).cloned()
}

fn active_query(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active", key)])).unwrap_or_default();
    format!("?{}", query)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_key_round_trips_through_query() {
        assert_eq!(active_query("p100_sales_invoice"), "?active=p100_sales_invoice");
        assert_eq!(
            active_from_query("?active=p100_sales_invoice").as_deref(),
            Some("p100_sales_invoice")
        );
        assert_eq!(active_from_query("?code=1"), None);
        assert_eq!(active_from_query(""), None);
    }

    #[test]
    fn closing_active_tab_activates_last() {
        let owner = Owner::new();
        owner.set();

        let ctx = AppGlobalContext::new();
        ctx.open_tab("d100_sales_dashboard", "Sales Dashboard");
        ctx.open_tab("a001_brand", "Brands");
        ctx.open_tab("a002_category", "Categories");
        ctx.activate_tab("a001_brand");
        ctx.open_tab("a001_brand", "Brands");
        assert_eq!(ctx.opened.with_untracked(|t| t.len()), 3);

        ctx.close_tab("a001_brand");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a002_category"));

        ctx.close_tab("d100_sales_dashboard");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a002_category"));
    }
}
