use leptos::prelude::*;

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};

/// Content of one open tab. Inactive tabs stay mounted and are hidden, so
/// their filters and scroll position survive switching.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key.clone());
    let is_active = move || key.with_value(|k| tabs_store.is_active(k));

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab.key.clone()
        >
            {render_tab_content(&tab.key)}
        </div>
    }
}
