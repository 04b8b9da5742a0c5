use chrono::Utc;
use contracts::system::auth::Session;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use super::api::{self, AuthError};
use super::session::SessionState;
use crate::shared::api_utils::auth_url;
use crate::shared::notify::{use_notifications, NotificationService};
use crate::shared::query::{use_query_client, QueryClientContext, QueryError};
use crate::shared::state::StoreHandle;
use crate::shared::storage::KeyValueStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// Waiting for `/api/auth/session` or the code exchange.
    Checking,
    Ready,
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    store: StoreHandle<SessionState>,
    pub status: RwSignal<AuthStatus>,
    pub error: RwSignal<Option<String>>,
    queries: QueryClientContext,
    notifications: NotificationService,
}

impl AuthContext {
    pub fn session(&self) -> Option<Session> {
        self.store.with(|s| s.active(Utc::now()).cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.with(|s| s.active(Utc::now()).is_some())
    }

    pub fn company_ids(&self) -> Vec<String> {
        self.store.with(|s| s.company_ids(Utc::now()))
    }

    fn set_session(&self, session: Option<Session>) {
        self.store.update(|s| s.session = session);
    }

    /// Hand over to the provider's sign-in page.
    pub fn sign_in(&self) {
        let target = auth_url(api::SIGN_IN_PATH);
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(&target) {
                log::error!("failed to open sign-in page: {:?}", e);
            }
        }
    }

    pub fn sign_out(&self) {
        let ctx = *self;
        let client = self.queries.client();
        spawn_local(async move {
            if let Err(e) = api::sign_out(&client, &auth_url("")).await {
                log::warn!("sign-out request failed: {}", e);
                ctx.notifications.warning("Signed out locally", e.message());
            }
            ctx.set_session(None);
            ctx.queries.client().clear();
        });
    }
}

fn location_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Drop `?code=..&state=..` from the address bar once it has been used.
fn clear_location_query() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let path = window.location().pathname().unwrap_or_else(|_| "/".to_string());
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
    }
}

/// Provide [`AuthContext`] and load the session once: finish an OAuth
/// redirect if the page was opened from one, otherwise ask the backend who
/// is signed in.
pub fn provide_auth(storage: Rc<dyn KeyValueStorage>) -> AuthContext {
    let ctx = AuthContext {
        store: StoreHandle::load(storage),
        status: RwSignal::new(AuthStatus::Checking),
        error: RwSignal::new(None),
        queries: use_query_client(),
        notifications: use_notifications(),
    };
    provide_context(ctx);

    let client = ctx.queries.client();
    let origin = auth_url("");
    let query = location_query();

    spawn_local(async move {
        let result: Result<Option<Session>, AuthError> = if api::is_callback(&query) {
            clear_location_query();
            match api::parse_callback(&query) {
                Ok(callback) => api::exchange_code(&client, &origin, &callback).await.map(Some),
                Err(e) => Err(e),
            }
        } else {
            api::fetch_session(&client, &origin).await.map_err(AuthError::from)
        };

        match result {
            Ok(session) => {
                log::info!(
                    "session {}",
                    session.as_ref().map(|s| s.user.display_name()).unwrap_or("none")
                );
                ctx.set_session(session);
            }
            Err(AuthError::Request(e @ QueryError::Network(_))) => {
                // Backend unreachable: keep the stored session, reports will
                // surface their own errors.
                log::warn!("session check failed: {}", e);
            }
            Err(e) => {
                log::warn!("sign-in failed: {}", e);
                ctx.set_session(None);
                ctx.error.set(Some(e.to_string()));
            }
        }
        ctx.status.set(AuthStatus::Ready);
    });

    ctx
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not provided in context")
}
