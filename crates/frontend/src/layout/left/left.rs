use leptos::prelude::*;

use crate::shared::state::use_filter_stores;

/// Sidebar zone; open/closed is persisted under `sidebar`.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let stores = use_filter_stores();
    let is_open = move || stores.sidebar.with(|s| s.is_open);

    view! {
        <div data-zone="left" class="left" class:hidden=move || !is_open()>
            {children()}
        </div>
    }
}
