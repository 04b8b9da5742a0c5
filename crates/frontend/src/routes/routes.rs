use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::DEFAULT_TAB;
use crate::layout::Shell;
use crate::system::auth::RequireAuth;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not provided in context");

    // Runs once when the layout is created.
    tabs_store.init_router_integration(DEFAULT_TAB);

    view! { <Shell /> }
}

/// Sign-in screen without a session, the tabbed shell with one.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout />
        </RequireAuth>
    }
}
