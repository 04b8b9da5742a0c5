use contracts::shared::envelope::ApiErrorBody;
use contracts::shared::validation::ValidationErrors;

use crate::shared::http::TransportError;

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong while fetching data.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// Required inputs are missing; the request was never sent.
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("{0}")]
    Network(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl QueryError {
    /// Normalise a non-2xx response. The backend's own `message` wins.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.best_message().map(str::to_string))
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        QueryError::Http { status, message }
    }

    /// Text shown to the user.
    pub fn message(&self) -> String {
        match self {
            QueryError::Decode(_) => GENERIC_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            QueryError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<TransportError> for QueryError {
    fn from(e: TransportError) -> Self {
        QueryError::Network(e.0)
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(e: serde_json::Error) -> Self {
        QueryError::Decode(e.to_string())
    }
}

/// Failure of a create/update/delete call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MutationError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Api(#[from] QueryError),
}

impl MutationError {
    pub fn message(&self) -> String {
        match self {
            MutationError::Validation(errors) => errors.to_string(),
            MutationError::Api(e) => e.message(),
        }
    }

    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            MutationError::Validation(errors) => Some(errors),
            MutationError::Api(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_is_preferred() {
        let err = QueryError::from_response(400, r#"{"message":"startPeriod is required"}"#);
        assert_eq!(err.message(), "startPeriod is required");
        assert_eq!(err.status(), Some(400));

        let err = QueryError::from_response(404, r#"{"error":"Brand not found"}"#);
        assert_eq!(err.message(), "Brand not found");
    }

    #[test]
    fn falls_back_to_generic_message() {
        assert_eq!(
            QueryError::from_response(502, "<html>Bad Gateway</html>").message(),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(
            QueryError::from_response(500, r#"{"message":"  "}"#).message(),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(QueryError::Decode("eof".into()).message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn mutation_error_wraps_validation() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "Name is required");
        let err = MutationError::from(errors);
        assert_eq!(err.message(), "name: Name is required");
        assert!(err.validation().is_some());
    }
}
