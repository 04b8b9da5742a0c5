use serde::{Deserialize, Serialize};

/// Standard list response returned by the report endpoints.
///
/// `data` is always present; the totals are only sent by endpoints that
/// page or aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(rename = "totalRecords", default, skip_serializing_if = "Option::is_none")]
    pub total_records: Option<u64>,
    #[serde(
        rename = "grandTotal_amount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub grand_total_amount: Option<f64>,
}

impl<T> ApiEnvelope<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data,
            total_records: None,
            grand_total_amount: None,
        }
    }

    /// Total row count for pagination; falls back to the page length.
    pub fn total(&self) -> u64 {
        self.total_records.unwrap_or(self.data.len() as u64)
    }
}

impl<T> Default for ApiEnvelope<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Error body sent by the backend on non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// `message` wins over `error`; blank strings count as absent.
    pub fn best_message(&self) -> Option<&str> {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_reads_backend_field_names() {
        let json = r#"{"data":[1,2,3],"totalRecords":42,"grandTotal_amount":1500.5}"#;
        let env: ApiEnvelope<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(env.data, vec![1, 2, 3]);
        assert_eq!(env.total(), 42);
        assert_eq!(env.grand_total_amount, Some(1500.5));
    }

    #[test]
    fn envelope_tolerates_missing_fields() {
        let env: ApiEnvelope<u32> = serde_json::from_str("{}").unwrap();
        assert!(env.data.is_empty());
        assert_eq!(env.total(), 0);

        let env: ApiEnvelope<u32> = serde_json::from_str(r#"{"data":[7]}"#).unwrap();
        assert_eq!(env.total(), 1);
    }

    #[test]
    fn error_body_prefers_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message":"Invalid period","error":"Bad Request"}"#).unwrap();
        assert_eq!(body.best_message(), Some("Invalid period"));

        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"  ","error":"Bad Request"}"#).unwrap();
        assert_eq!(body.best_message(), Some("Bad Request"));

        assert_eq!(ApiErrorBody::default().best_message(), None);
    }
}
