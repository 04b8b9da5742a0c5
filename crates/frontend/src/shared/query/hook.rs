use futures::future::{FutureExt, LocalBoxFuture};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use super::client::QueryClient;
use super::error::QueryError;
use super::key::QueryKey;
use super::route::QueryRequest;
use super::state::QueryState;

/// The query client in Leptos context.
///
/// The client itself is `!Send`, so it lives in local storage; `version`
/// is bumped after invalidation so active hooks re-run.
#[derive(Clone, Copy)]
pub struct QueryClientContext {
    client: StoredValue<QueryClient, LocalStorage>,
    version: RwSignal<u64>,
}

impl QueryClientContext {
    pub fn client(&self) -> QueryClient {
        self.client.get_value()
    }

    pub fn invalidate(&self, prefix: &QueryKey) {
        self.client.with_value(|c| c.invalidate(prefix));
        self.notify_changed();
    }

    /// Re-run active hooks; entries dropped by a mutation are refetched.
    pub fn notify_changed(&self) {
        self.version.update(|v| *v += 1);
    }
}

pub fn provide_query_client(client: QueryClient) -> QueryClientContext {
    let ctx = QueryClientContext {
        client: StoredValue::new_local(client),
        version: RwSignal::new(0),
    };
    provide_context(ctx);
    ctx
}

pub fn use_query_client() -> QueryClientContext {
    use_context::<QueryClientContext>().expect("QueryClientContext not provided in context")
}

/// Reactive handle returned by [`use_query`].
pub struct QueryHandle<T: Send + Sync + 'static> {
    pub state: RwSignal<QueryState<T>>,
    refetch_tick: RwSignal<u64>,
}

impl<T: Send + Sync + 'static> Clone for QueryHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryHandle<T> {}

impl<T: Clone + Send + Sync + 'static> QueryHandle<T> {
    pub fn data(&self) -> Option<T> {
        self.state.with(|s| s.data.clone())
    }

    pub fn error(&self) -> Option<QueryError> {
        self.state.with(|s| s.error.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn is_fetching(&self) -> bool {
        self.state.with(|s| s.is_fetching)
    }

    pub fn is_idle(&self) -> bool {
        self.state.with(|s| s.is_idle())
    }

    /// Fetch again, bypassing the fresh cache.
    pub fn refetch(&self) {
        self.refetch_tick.update(|t| *t += 1);
    }
}

/// Subscribe a component to a query.
///
/// `request` is re-evaluated whenever the stores it reads change. `None`
/// disables the query: nothing is sent and the state goes back to idle.
pub fn use_query<T>(request: Signal<Option<QueryRequest>>) -> QueryHandle<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let ctx = use_query_client();
    // Store changes that leave the request untouched do not re-run the effect.
    let request = Memo::new(move |_| request.get());
    let state = RwSignal::new(QueryState::<T>::default());
    let refetch_tick = RwSignal::new(0u64);

    Effect::new(move |prev: Option<u64>| {
        let tick = refetch_tick.get();
        ctx.version.track();
        let force = is_refetch(prev, tick);
        if let Some(pending) = run_query(&ctx.client(), state, request.get(), force) {
            spawn_local(pending);
        }
        tick
    });

    QueryHandle {
        state,
        refetch_tick,
    }
}

/// A run caused by `refetch()` rather than by the first run, a request
/// change or an invalidation.
fn is_refetch(prev_tick: Option<u64>, tick: u64) -> bool {
    prev_tick.is_some_and(|p| p != tick)
}

/// Start one fetch for `request` and return the work that applies its
/// result, or disable the query when there is no request.
fn run_query<T>(
    client: &QueryClient,
    state: RwSignal<QueryState<T>>,
    request: Option<QueryRequest>,
    force: bool,
) -> Option<LocalBoxFuture<'static, ()>>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let Some(request) = request else {
        state.update(|s| s.disable());
        return None;
    };
    state.update(|s| s.begin(request.key.clone()));

    let fetch = client.fetch::<T>(&request, force);
    Some(
        async move {
            let result = fetch.await;
            // The owning component may be gone by now.
            let _ = state.try_update(|s| s.resolve(&request.key, result));
        }
        .boxed_local(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::testing::{ManualClock, ScriptedTransport};
    use crate::shared::query::{QueryOptions, QueryStatus};
    use futures::executor::block_on;
    use std::rc::Rc;

    fn setup() -> (QueryClient, Rc<ScriptedTransport>) {
        let transport = Rc::new(ScriptedTransport::default());
        let client = QueryClient::new(
            transport.clone(),
            Rc::new(ManualClock::default()),
            QueryOptions::default(),
        );
        (client, transport)
    }

    fn brands() -> QueryRequest {
        QueryRequest::new(
            QueryKey::new("brand").with("BIS").with("list"),
            "http://api/BIS/cms/mst/brand",
        )
    }

    /// Mirrors one effect run: returns the tick to remember.
    fn run(
        client: &QueryClient,
        handle: QueryHandle<Vec<String>>,
        prev: Option<u64>,
        request: Option<QueryRequest>,
    ) -> u64 {
        let tick = handle.refetch_tick.get_untracked();
        if let Some(pending) = run_query(client, handle.state, request, is_refetch(prev, tick)) {
            block_on(pending);
        }
        tick
    }

    fn handle() -> QueryHandle<Vec<String>> {
        QueryHandle {
            state: RwSignal::new(QueryState::default()),
            refetch_tick: RwSignal::new(0),
        }
    }

    #[test]
    fn missing_inputs_keep_the_query_idle() {
        let owner = Owner::new();
        owner.set();
        let (client, transport) = setup();
        let query = handle();

        run(&client, query, None, None);
        assert!(query.state.with_untracked(|s| s.is_idle()));
        assert_eq!(transport.call_count(), 0);

        // Losing an input after a load goes back to idle without a request.
        transport.respond(200, r#"["Acme"]"#);
        let tick = run(&client, query, None, Some(brands()));
        assert_eq!(query.state.with_untracked(|s| s.status), QueryStatus::Success);
        run(&client, query, Some(tick), None);
        assert!(query.state.with_untracked(|s| s.is_idle()));
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn each_refetch_sends_one_request() {
        let owner = Owner::new();
        owner.set();
        let (client, transport) = setup();
        let query = handle();
        transport.respond(200, r#"["Acme"]"#);
        transport.respond(200, r#"["Acme","Zeta"]"#);
        transport.respond(200, r#"["Zeta"]"#);

        let mut tick = run(&client, query, None, Some(brands()));
        assert_eq!(transport.call_count(), 1);

        query.refetch();
        tick = run(&client, query, Some(tick), Some(brands()));
        assert_eq!(transport.call_count(), 2);

        query.refetch();
        run(&client, query, Some(tick), Some(brands()));
        assert_eq!(transport.call_count(), 3);
        assert_eq!(
            query.state.with_untracked(|s| s.data.clone()),
            Some(vec!["Zeta".to_string()])
        );
    }

    #[test]
    fn rerun_after_invalidation_fetches_again() {
        let owner = Owner::new();
        owner.set();
        let (client, transport) = setup();
        let query = handle();
        transport.respond(200, r#"["Acme"]"#);
        transport.respond(200, r#"["Acme","Zeta"]"#);

        let tick = run(&client, query, None, Some(brands()));

        // A store change that leaves the cache warm is served from it.
        run(&client, query, Some(tick), Some(brands()));
        assert_eq!(transport.call_count(), 1);

        client.invalidate(&QueryKey::new("brand").with("BIS"));
        run(&client, query, Some(tick), Some(brands()));
        assert_eq!(transport.call_count(), 2);
        assert_eq!(
            query.state.with_untracked(|s| s.data.clone()),
            Some(vec!["Acme".to_string(), "Zeta".to_string()])
        );
    }
}
