use futures::future::{FutureExt, LocalBoxFuture, Shared};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::shared::config::QueryConfig;
use crate::shared::http::{Clock, HttpRequest, HttpTransport};

use super::error::QueryError;
use super::key::QueryKey;
use super::retry::RetryPolicy;
use super::route::QueryRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Cached data younger than this is served without a request.
    pub stale_time_ms: i64,
    /// Entries untouched for this long are dropped.
    pub gc_time_ms: i64,
    pub retry: RetryPolicy,
}

impl QueryOptions {
    pub fn from_config(config: &QueryConfig) -> Self {
        Self {
            stale_time_ms: config.stale_time_secs as i64 * 1000,
            gc_time_ms: config.gc_time_secs as i64 * 1000,
            retry: RetryPolicy::from_config(config),
        }
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self::from_config(&QueryConfig::default())
    }
}

struct CacheEntry {
    data: Value,
    updated_at: i64,
}

type SharedFetch = Shared<LocalBoxFuture<'static, Result<Value, QueryError>>>;

struct Inner {
    transport: Rc<dyn HttpTransport>,
    clock: Rc<dyn Clock>,
    options: QueryOptions,
    cache: RefCell<HashMap<QueryKey, CacheEntry>>,
    /// Running requests tagged with a fetch id; only the request still
    /// registered under its key may write the cache.
    in_flight: RefCell<HashMap<QueryKey, (u64, SharedFetch)>>,
    next_fetch_id: Cell<u64>,
}

/// Shared cache of query results, keyed by [`QueryKey`].
///
/// Cheap to clone; all clones see the same cache. Values are stored as
/// JSON so one client serves every response type.
#[derive(Clone)]
pub struct QueryClient(Rc<Inner>);

impl QueryClient {
    pub fn new(
        transport: Rc<dyn HttpTransport>,
        clock: Rc<dyn Clock>,
        options: QueryOptions,
    ) -> Self {
        Self(Rc::new(Inner {
            transport,
            clock,
            options,
            cache: RefCell::new(HashMap::new()),
            in_flight: RefCell::new(HashMap::new()),
            next_fetch_id: Cell::new(0),
        }))
    }

    pub fn options(&self) -> &QueryOptions {
        &self.0.options
    }

    pub(crate) fn transport(&self) -> Rc<dyn HttpTransport> {
        self.0.transport.clone()
    }

    pub fn fetch<T: DeserializeOwned + 'static>(
        &self,
        request: &QueryRequest,
        force: bool,
    ) -> impl std::future::Future<Output = Result<T, QueryError>> + 'static {
        let value = self.fetch_value(request, force);
        async move {
            let value = value.await?;
            serde_json::from_value::<T>(value).map_err(QueryError::from)
        }
    }

    /// Fresh cache hit, else join a running request for the same key, else
    /// start one. `force` skips the cache but still joins in-flight requests.
    pub fn fetch_value(
        &self,
        request: &QueryRequest,
        force: bool,
    ) -> LocalBoxFuture<'static, Result<Value, QueryError>> {
        self.collect_garbage();
        let key = request.key.clone();

        if !force {
            if let Some(data) = self.fresh_data(&key) {
                log::debug!("query cache hit {}", key);
                return async move { Ok(data) }.boxed_local();
            }
        }

        if let Some((_, running)) = self.0.in_flight.borrow().get(&key).cloned() {
            log::debug!("joining in-flight query {}", key);
            return running.boxed_local();
        }

        let fetch_id = self.0.next_fetch_id.get();
        self.0.next_fetch_id.set(fetch_id + 1);

        let client = self.clone();
        let url = request.url.clone();
        let fetch_key = key.clone();
        let shared = async move {
            let result = client.run_with_retry(&url).await;
            if client.finish(&fetch_key, fetch_id) {
                if let Ok(data) = &result {
                    client.store(fetch_key, data.clone());
                }
            } else {
                log::debug!("not caching superseded response for {}", fetch_key);
            }
            result
        }
        .boxed_local()
        .shared();
        self.0
            .in_flight
            .borrow_mut()
            .insert(key, (fetch_id, shared.clone()));
        shared.boxed_local()
    }

    /// Unregister a finished request. `false` when it was dropped by an
    /// invalidation or replaced by a newer request for the same key.
    fn finish(&self, key: &QueryKey, fetch_id: u64) -> bool {
        let mut in_flight = self.0.in_flight.borrow_mut();
        match in_flight.get(key) {
            Some((id, _)) if *id == fetch_id => {
                in_flight.remove(key);
                true
            }
            _ => false,
        }
    }

    async fn run_with_retry(&self, url: &str) -> Result<Value, QueryError> {
        let policy = self.0.options.retry;
        let mut failures = 0;
        loop {
            log::debug!("GET {}", url);
            match self.execute(HttpRequest::get(url)).await {
                Ok(data) => return Ok(data),
                Err(e) => {
                    failures += 1;
                    if !policy.should_retry(failures, &e) {
                        log::warn!("GET {} failed: {}", url, e);
                        return Err(e);
                    }
                    let delay = policy.delay_ms(failures - 1);
                    log::warn!(
                        "GET {} failed ({}), retry {}/{} in {} ms",
                        url,
                        e,
                        failures,
                        policy.max_retries,
                        delay
                    );
                    self.0.clock.sleep(delay).await;
                }
            }
        }
    }

    /// One attempt: send, check status, parse JSON. An empty body is `null`.
    pub(crate) async fn execute(&self, request: HttpRequest) -> Result<Value, QueryError> {
        let response = self.0.transport.send(request).await?;
        if !response.ok() {
            return Err(QueryError::from_response(response.status, &response.body));
        }
        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    fn fresh_data(&self, key: &QueryKey) -> Option<Value> {
        let now = self.0.clock.now_ms();
        let cache = self.0.cache.borrow();
        let entry = cache.get(key)?;
        (now - entry.updated_at < self.0.options.stale_time_ms).then(|| entry.data.clone())
    }

    fn store(&self, key: QueryKey, data: Value) {
        let updated_at = self.0.clock.now_ms();
        self.0
            .cache
            .borrow_mut()
            .insert(key, CacheEntry { data, updated_at });
    }

    /// Drop every cached entry under `prefix`. Requests still running for
    /// those keys are detached: their callers get the result, the cache
    /// does not. Returns how many cache entries were removed.
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        self.0
            .in_flight
            .borrow_mut()
            .retain(|key, _| !key.starts_with(prefix));
        let mut cache = self.0.cache.borrow_mut();
        let before = cache.len();
        cache.retain(|key, _| !key.starts_with(prefix));
        let removed = before - cache.len();
        log::debug!("invalidated {} queries under {}", removed, prefix);
        removed
    }

    /// Forget everything, e.g. when the user signs out.
    pub fn clear(&self) {
        self.0.in_flight.borrow_mut().clear();
        self.0.cache.borrow_mut().clear();
    }

    pub fn set_query_data<T: Serialize>(&self, key: QueryKey, data: &T) -> Result<(), QueryError> {
        let value = serde_json::to_value(data)?;
        self.store(key, value);
        Ok(())
    }

    /// Cached value regardless of age.
    pub fn get_query_data<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let cache = self.0.cache.borrow();
        let entry = cache.get(key)?;
        serde_json::from_value(entry.data.clone()).ok()
    }

    pub fn collect_garbage(&self) {
        let now = self.0.clock.now_ms();
        let gc_time = self.0.options.gc_time_ms;
        self.0
            .cache
            .borrow_mut()
            .retain(|_, entry| now - entry.updated_at < gc_time);
    }

    pub fn cached_len(&self) -> usize {
        self.0.cache.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::testing::{ManualClock, ScriptedTransport};
    use futures::channel::oneshot;
    use futures::executor::block_on;

    fn setup() -> (QueryClient, Rc<ScriptedTransport>, Rc<ManualClock>) {
        let transport = Rc::new(ScriptedTransport::default());
        let clock = Rc::new(ManualClock::default());
        let client = QueryClient::new(transport.clone(), clock.clone(), QueryOptions::default());
        (client, transport, clock)
    }

    fn request() -> QueryRequest {
        QueryRequest::new(
            QueryKey::new("dashboard").with("BIS"),
            "http://api/BIS/dsb/sls/get-dashboard",
        )
    }

    #[test]
    fn fresh_cache_is_reused_until_stale() {
        let (client, transport, clock) = setup();
        transport.respond(200, r#"{"data":[1]}"#);
        transport.respond(200, r#"{"data":[2]}"#);

        let first = block_on(client.fetch_value(&request(), false)).unwrap();
        clock.advance(59_999);
        let second = block_on(client.fetch_value(&request(), false)).unwrap();
        assert_eq!(first, second);
        assert_eq!(transport.call_count(), 1);

        clock.advance(1);
        let third = block_on(client.fetch_value(&request(), false)).unwrap();
        assert_eq!(third, serde_json::json!({"data": [2]}));
        assert_eq!(transport.call_count(), 2);
    }

    #[test]
    fn force_bypasses_fresh_cache() {
        let (client, transport, _) = setup();
        transport.respond(200, "1");
        transport.respond(200, "2");
        block_on(client.fetch_value(&request(), false)).unwrap();
        let value = block_on(client.fetch_value(&request(), true)).unwrap();
        assert_eq!(value, serde_json::json!(2));
        assert_eq!(transport.call_count(), 2);
    }

    #[test]
    fn concurrent_identical_keys_share_one_request() {
        let (client, transport, _) = setup();
        let (release, gate) = oneshot::channel();
        transport.gate(gate);
        transport.respond(200, r#"{"total":5}"#);

        let (a, b, _) = block_on(futures::future::join3(
            client.fetch_value(&request(), false),
            client.fetch_value(&request(), false),
            async move {
                let _ = release.send(());
            },
        ));
        assert_eq!(a.unwrap(), b.unwrap());
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn server_errors_are_retried_with_backoff() {
        let (client, transport, clock) = setup();
        for _ in 0..4 {
            transport.respond(500, r#"{"message":"db down"}"#);
        }
        let err = block_on(client.fetch_value(&request(), false)).unwrap_err();
        assert_eq!(err.message(), "db down");
        assert_eq!(transport.call_count(), 4);
        assert_eq!(clock.sleeps(), vec![1000, 2000, 4000]);
    }

    #[test]
    fn retry_recovers() {
        let (client, transport, _) = setup();
        transport.fail("offline");
        transport.respond(200, "[]");
        let value = block_on(client.fetch_value(&request(), false)).unwrap();
        assert_eq!(value, serde_json::json!([]));
        assert_eq!(transport.call_count(), 2);
    }

    #[test]
    fn bad_request_is_not_retried() {
        let (client, transport, clock) = setup();
        transport.respond(400, r#"{"message":"endPeriod is required"}"#);
        let err = block_on(client.fetch_value(&request(), false)).unwrap_err();
        assert_eq!(err.message(), "endPeriod is required");
        assert_eq!(transport.call_count(), 1);
        assert!(clock.sleeps().is_empty());
        assert_eq!(client.cached_len(), 0);
    }

    #[test]
    fn rate_limiting_is_not_retried() {
        let (client, transport, clock) = setup();
        for _ in 0..4 {
            transport.respond(429, r#"{"message":"slow down"}"#);
        }
        let err = block_on(client.fetch_value(&request(), false)).unwrap_err();
        assert_eq!(err.message(), "slow down");
        assert_eq!(transport.call_count(), 1);
        assert!(clock.sleeps().is_empty());
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let (client, transport, _) = setup();
        transport.respond(200, "{oops");
        let err = block_on(client.fetch_value(&request(), false)).unwrap_err();
        assert!(matches!(err, QueryError::Decode(_)));
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn typed_fetch_decodes() {
        let (client, transport, _) = setup();
        transport.respond(200, "[1,2,3]");
        let values: Vec<u32> = block_on(client.fetch(&request(), false)).unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn invalidate_by_prefix() {
        let (client, _, _) = setup();
        let brands = QueryKey::new("brand").with("BIS");
        client.set_query_data(brands.clone().with("list"), &vec!["A"]).unwrap();
        client.set_query_data(brands.clone().with("detail").with("1"), &"A").unwrap();
        client.set_query_data(QueryKey::new("category").with("BIS"), &1).unwrap();

        assert_eq!(client.invalidate(&brands), 2);
        assert_eq!(client.cached_len(), 1);
        assert_eq!(
            client.get_query_data::<u32>(&QueryKey::new("category").with("BIS")),
            Some(1)
        );

        client.clear();
        assert_eq!(client.cached_len(), 0);
    }

    #[test]
    fn invalidation_detaches_running_requests() {
        let (client, transport, _) = setup();
        let brands = QueryKey::new("brand").with("BIS");
        let list = QueryRequest::new(
            brands.clone().with("list"),
            "http://api/BIS/cms/mst/brand",
        );
        let (release, gate) = oneshot::channel();
        transport.gate(gate);
        // The gated request reads its response last.
        transport.respond(200, r#"["old","new"]"#);
        transport.respond(200, r#"["old"]"#);

        let before_save = client.fetch_value(&list, false);
        // A save lands while the list is still loading.
        client.invalidate(&brands);
        let after_save = client.fetch_value(&list, false);

        let (old, new, _) = block_on(futures::future::join3(
            before_save,
            after_save,
            async move {
                let _ = release.send(());
            },
        ));
        assert_eq!(old.unwrap(), serde_json::json!(["old"]));
        assert_eq!(new.unwrap(), serde_json::json!(["old", "new"]));
        assert_eq!(transport.call_count(), 2);
        assert_eq!(
            client.get_query_data::<Vec<String>>(&brands.with("list")),
            Some(vec!["old".to_string(), "new".to_string()])
        );
    }

    #[test]
    fn cleared_client_does_not_cache_late_responses() {
        let (client, transport, _) = setup();
        let (release, gate) = oneshot::channel();
        transport.gate(gate);
        transport.respond(200, r#"{"total":5}"#);

        let pending = client.fetch_value(&request(), false);
        client.clear();
        let (value, _) = block_on(futures::future::join(pending, async move {
            let _ = release.send(());
        }));
        assert_eq!(value.unwrap(), serde_json::json!({"total": 5}));
        assert_eq!(client.cached_len(), 0);
    }

    #[test]
    fn old_entries_are_collected() {
        let (client, _, clock) = setup();
        client.set_query_data(QueryKey::new("a"), &1).unwrap();
        clock.advance(299_999);
        client.collect_garbage();
        assert_eq!(client.cached_len(), 1);
        clock.advance(1);
        client.collect_garbage();
        assert_eq!(client.cached_len(), 0);
    }
}
