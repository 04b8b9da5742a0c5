use leptos::ev;
use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;
use crate::shared::icons::icon;

#[component]
fn TabButton(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key);
    let is_active = move || key.with_value(|k| tabs_store.is_active(k));

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| tabs_store.close_tab(k));
    };

    view! {
        <div
            class="tab"
            class:active=is_active
            on:click=move |_| key.with_value(|k| tabs_store.activate_tab(k))
        >
            <span>{tab.title}</span>
            <button class="tab-close" title="Close" on:click=on_close>
                {icon("x")}
            </button>
        </div>
    }
}

/// Tab strip plus the content of every open tab.
#[component]
pub fn Center() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not provided in context");

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <div class="tabs__bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| view! { <TabButton tab=tab tabs_store=tabs_store /> }
                />
            </div>
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
            />
        </div>
    }
}
