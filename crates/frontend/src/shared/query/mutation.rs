use contracts::shared::validation::Validate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::shared::http::{HttpRequest, Method};

use super::client::QueryClient;
use super::error::{MutationError, QueryError};
use super::key::QueryKey;

impl QueryClient {
    /// Validate `payload`, send it as JSON and drop cached queries under
    /// `invalidates` on success.
    ///
    /// Mutations are sent once: a retried POST could create the record
    /// twice. The `Idempotency-Key` header lets the backend detect resubmits
    /// of the same form.
    pub async fn send_mutation<P, R>(
        &self,
        method: Method,
        url: &str,
        payload: &P,
        invalidates: &QueryKey,
    ) -> Result<R, MutationError>
    where
        P: Serialize + Validate,
        R: DeserializeOwned,
    {
        payload.validate()?;
        let body = serde_json::to_string(payload).map_err(QueryError::from)?;
        let request = HttpRequest::new(method, url)
            .header("Idempotency-Key", Uuid::new_v4().to_string())
            .json_body(body);

        log::debug!("{} {}", method.as_str(), url);
        let value = self.execute(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", method.as_str(), url, e);
            e
        })?;
        self.invalidate(invalidates);
        Ok(serde_json::from_value(value).map_err(QueryError::from)?)
    }

    pub async fn send_delete(&self, url: &str, invalidates: &QueryKey) -> Result<(), MutationError> {
        log::debug!("DELETE {}", url);
        self.execute(HttpRequest::new(Method::Delete, url)).await?;
        self.invalidate(invalidates);
        Ok(())
    }
}
