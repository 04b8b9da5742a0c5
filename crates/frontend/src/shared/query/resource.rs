use contracts::shared::envelope::ApiEnvelope;
use contracts::shared::validation::Validate;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::http::Method;

use super::client::QueryClient;
use super::error::{MutationError, QueryError};
use super::hook::{use_query, QueryHandle};
use super::key::QueryKey;
use super::params::QueryParams;
use super::route::{require_company, ApiRoute, Endpoint, QueryRequest};
use super::scope::use_report_scope;

/// A company-scoped REST collection (`.../{company}/cms/mst/brand`).
///
/// Cache keys are `[scope, company, "list"]` and `[scope, company, "item", id]`;
/// every write drops `[scope, company]` so lists and open records refetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub scope: &'static str,
    pub endpoint: Endpoint,
}

impl Resource {
    pub const fn new(scope: &'static str, endpoint: Endpoint) -> Self {
        Self { scope, endpoint }
    }

    pub fn prefix(&self, company_id: &str) -> QueryKey {
        QueryKey::new(self.scope).with(company_id)
    }

    pub fn list_request(&self, base: &str, company_id: &str) -> Result<QueryRequest, QueryError> {
        let company = require_company(Some(company_id))?;
        Ok(QueryRequest::new(
            self.prefix(company).with("list"),
            self.route(base, company).url(&QueryParams::new()),
        ))
    }

    pub fn item_request(
        &self,
        base: &str,
        company_id: &str,
        id: &str,
    ) -> Result<QueryRequest, QueryError> {
        let company = require_company(Some(company_id))?;
        if id.trim().is_empty() {
            return Err(QueryError::InvalidRequest("Missing record id.".to_string()));
        }
        Ok(QueryRequest::new(
            self.prefix(company).with("item").with(id),
            self.route(base, company).item_url(id),
        ))
    }

    fn route(&self, base: &str, company_id: &str) -> ApiRoute {
        ApiRoute::new(base, company_id, self.endpoint)
    }

    /// `POST` to the collection.
    pub async fn create<P, R>(
        &self,
        client: &QueryClient,
        base: &str,
        company_id: &str,
        payload: &P,
    ) -> Result<R, MutationError>
    where
        P: Serialize + Validate,
        R: DeserializeOwned,
    {
        let company = require_company(Some(company_id))?;
        let url = self.route(base, company).url(&QueryParams::new());
        client
            .send_mutation(Method::Post, &url, payload, &self.prefix(company))
            .await
    }

    /// `PATCH` one record.
    pub async fn update<P, R>(
        &self,
        client: &QueryClient,
        base: &str,
        company_id: &str,
        id: &str,
        payload: &P,
    ) -> Result<R, MutationError>
    where
        P: Serialize + Validate,
        R: DeserializeOwned,
    {
        let company = require_company(Some(company_id))?;
        let url = self.route(base, company).item_url(id);
        client
            .send_mutation(Method::Patch, &url, payload, &self.prefix(company))
            .await
    }

    pub async fn delete(
        &self,
        client: &QueryClient,
        base: &str,
        company_id: &str,
        id: &str,
    ) -> Result<(), MutationError> {
        let company = require_company(Some(company_id))?;
        let url = self.route(base, company).item_url(id);
        client.send_delete(&url, &self.prefix(company)).await
    }
}

/// All records of `resource` for the selected company.
pub fn use_resource_list<T>(resource: Resource) -> QueryHandle<ApiEnvelope<T>>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let scope = use_report_scope();
    use_query(Signal::derive(move || {
        scope
            .with(|s| resource.list_request(&s.base, &s.company_id))
            .ok()
    }))
}
