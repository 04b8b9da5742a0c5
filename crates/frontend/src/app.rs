use leptos::prelude::*;
use std::rc::Rc;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoutes;
use crate::shared::config::{load_config, provide_config};
use crate::shared::http::{GlooTransport, SystemClock};
use crate::shared::notify::NotificationService;
use crate::shared::query::{provide_query_client, QueryClient, QueryOptions};
use crate::shared::state::provide_filter_stores;
use crate::shared::storage::BrowserStorage;
use crate::shared::theme::provide_theme;
use crate::system::auth::provide_auth;

#[component]
pub fn App() -> impl IntoView {
    let storage = BrowserStorage::shared();

    let config = load_config(storage.as_ref());
    let options = QueryOptions::from_config(&config.query);
    provide_config(config);

    provide_query_client(QueryClient::new(
        Rc::new(GlooTransport),
        Rc::new(SystemClock),
        options,
    ));
    provide_filter_stores(storage.clone());
    provide_theme(storage.clone());
    provide_context(NotificationService::new());
    provide_context(AppGlobalContext::new());
    provide_auth(storage);

    view! { <AppRoutes /> }
}
