//! Application top bar: sidebar toggle, company and theme selectors, the
//! signed-in user and sign-out.

use leptos::prelude::*;

use crate::shared::components::CompanySelector;
use crate::shared::icons::icon;
use crate::shared::state::use_filter_stores;
use crate::shared::theme::ThemeSelector;
use crate::system::auth::use_auth;

#[component]
pub fn TopHeader() -> impl IntoView {
    let stores = use_filter_stores();
    let auth = use_auth();

    let is_sidebar_visible = move || stores.sidebar.with(|s| s.is_open);
    let user_name = move || {
        auth.session()
            .map(|s| s.user.display_name().to_string())
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| { stores.sidebar.update(|s| s.toggle()); }
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Business Dashboard"</span>
            </div>

            <div class="top-header__actions">
                <CompanySelector companies=Signal::derive(move || auth.company_ids()) />

                <ThemeSelector />

                <div class="top-header__user">
                    {icon("user")}
                    <span>{user_name}</span>
                </div>

                <button class="top-header__icon-btn" on:click=move |_| auth.sign_out() title="Sign out">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
