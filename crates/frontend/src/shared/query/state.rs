use super::error::QueryError;
use super::key::QueryKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Disabled: required inputs are missing.
    Idle,
    /// First load for the current key, nothing to show yet.
    Loading,
    Success,
    Error,
}

/// What a fetch hook exposes to its component.
///
/// `data` from a previous key is kept while the next key loads, so tables
/// don't flash empty between pages; `is_fetching` tells the UI a request is
/// in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    pub status: QueryStatus,
    pub data: Option<T>,
    pub error: Option<QueryError>,
    pub is_fetching: bool,
    key: Option<QueryKey>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            status: QueryStatus::Idle,
            data: None,
            error: None,
            is_fetching: false,
            key: None,
        }
    }
}

impl<T> QueryState<T> {
    pub fn key(&self) -> Option<&QueryKey> {
        self.key.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn is_idle(&self) -> bool {
        self.status == QueryStatus::Idle
    }

    /// A request for `key` has started.
    pub fn begin(&mut self, key: QueryKey) {
        let same_key = self.key.as_ref() == Some(&key);
        if !same_key || self.data.is_none() {
            self.status = QueryStatus::Loading;
        }
        self.error = None;
        self.is_fetching = true;
        self.key = Some(key);
    }

    /// Apply a finished request. Returns `false` when the state has moved on
    /// to another key and the result was dropped.
    pub fn resolve(&mut self, key: &QueryKey, result: Result<T, QueryError>) -> bool {
        if self.key.as_ref() != Some(key) {
            log::debug!("discarding stale response for {}", key);
            return false;
        }
        self.is_fetching = false;
        match result {
            Ok(data) => {
                self.status = QueryStatus::Success;
                self.data = Some(data);
                self.error = None;
            }
            Err(error) => {
                self.status = QueryStatus::Error;
                self.error = Some(error);
            }
        }
        true
    }

    /// Inputs became invalid. A validation error, if any, is shown instead of data.
    pub fn disable(&mut self) {
        self.status = QueryStatus::Idle;
        self.is_fetching = false;
        self.error = None;
        self.key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(page: u32) -> QueryKey {
        QueryKey::new("invoices").with(page)
    }

    #[test]
    fn idle_loading_success() {
        let mut state = QueryState::<u32>::default();
        assert!(state.is_idle());
        state.begin(key(1));
        assert!(state.is_loading());
        assert!(state.is_fetching);
        assert!(state.resolve(&key(1), Ok(7)));
        assert_eq!(state.status, QueryStatus::Success);
        assert_eq!(state.data, Some(7));
        assert!(!state.is_fetching);
    }

    #[test]
    fn refetch_keeps_data_and_success_status() {
        let mut state = QueryState::<u32>::default();
        state.begin(key(1));
        state.resolve(&key(1), Ok(7));
        state.begin(key(1));
        assert_eq!(state.status, QueryStatus::Success);
        assert!(state.is_fetching);
        assert_eq!(state.data, Some(7));
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut state = QueryState::<u32>::default();
        state.begin(key(1));
        state.begin(key(2));
        assert!(!state.resolve(&key(1), Ok(1)));
        assert!(state.is_loading());
        assert!(state.resolve(&key(2), Err(QueryError::Network("offline".into()))));
        assert_eq!(state.status, QueryStatus::Error);
        assert_eq!(state.data, None);
    }

    #[test]
    fn disable_drops_in_flight_key() {
        let mut state = QueryState::<u32>::default();
        state.begin(key(1));
        state.disable();
        assert!(!state.resolve(&key(1), Ok(1)));
        assert!(state.is_idle());
    }
}
