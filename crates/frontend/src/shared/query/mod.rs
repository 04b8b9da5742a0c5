//! Cache-aware data fetching.
//!
//! A fetch hook is composed from three parts: a [`QueryRequest`] built from
//! the current filter stores (or `None` when required inputs are missing),
//! the shared [`QueryClient`] that caches, deduplicates and retries, and a
//! [`QueryState`] signal the component renders from.

pub mod client;
pub mod error;
pub mod hook;
pub mod key;
pub mod mutation;
pub mod params;
pub mod resource;
pub mod retry;
pub mod route;
pub mod scope;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{QueryClient, QueryOptions};
pub use error::{MutationError, QueryError, GENERIC_ERROR_MESSAGE};
pub use hook::{provide_query_client, use_query, use_query_client, QueryClientContext, QueryHandle};
pub use key::QueryKey;
pub use params::QueryParams;
pub use resource::{use_resource_list, Resource};
pub use retry::RetryPolicy;
pub use route::{require_company, require_period, ApiRoute, Endpoint, QueryRequest};
pub use scope::{use_report_scope, ReportScope};
pub use state::{QueryState, QueryStatus};
