use contracts::system::auth::{OAuthCallbackParams, Session};
use serde_json::Value;

use crate::shared::http::{HttpRequest, Method};
use crate::shared::query::{QueryClient, QueryError, QueryParams};

pub const SESSION_PATH: &str = "/api/auth/session";
pub const SIGN_IN_PATH: &str = "/api/auth/signin";
pub const SIGN_OUT_PATH: &str = "/api/auth/signout";
pub const CALLBACK_PATH: &str = "/api/auth/callback";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("Sign-in was rejected: {0}")]
    Provider(String),
    #[error("The sign-in link is missing its authorization code.")]
    MissingCode,
    #[error("The sign-in link could not be read: {0}")]
    InvalidQuery(String),
    #[error(transparent)]
    Request(#[from] QueryError),
}

/// `code` and `state` taken from a successful OAuth redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackRequest {
    pub code: String,
    pub state: Option<String>,
}

impl CallbackRequest {
    pub fn url(&self, origin: &str) -> String {
        let params = QueryParams::new()
            .push("code", &self.code)
            .push_opt("state", self.state.as_deref());
        format!("{}{}?{}", origin, CALLBACK_PATH, params.to_query_string())
    }
}

/// Whether the location query looks like an OAuth redirect.
pub fn is_callback(query: &str) -> bool {
    let query = query.trim_start_matches('?');
    query
        .split('&')
        .any(|pair| pair.starts_with("code=") || pair.starts_with("error="))
}

/// Read the redirect's query string. An `error` from the provider is
/// reported as is and no exchange request is made.
pub fn parse_callback(query: &str) -> Result<CallbackRequest, AuthError> {
    let params: OAuthCallbackParams = serde_qs::from_str(query.trim_start_matches('?'))
        .map_err(|e| AuthError::InvalidQuery(e.to_string()))?;

    if let Some(error) = params.error {
        let detail = params.error_description.unwrap_or(error);
        return Err(AuthError::Provider(detail));
    }
    let code = params
        .code
        .filter(|c| !c.trim().is_empty())
        .ok_or(AuthError::MissingCode)?;
    Ok(CallbackRequest {
        code,
        state: params.state.filter(|s| !s.is_empty()),
    })
}

/// `null`, `{}` and anything without a user all mean "signed out".
fn session_from_value(value: Value) -> Result<Option<Session>, QueryError> {
    if value.get("user").is_none() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}

pub async fn fetch_session(client: &QueryClient, origin: &str) -> Result<Option<Session>, QueryError> {
    let value = client
        .execute(HttpRequest::get(format!("{}{}", origin, SESSION_PATH)))
        .await?;
    session_from_value(value)
}

/// Exchange the authorization code for a session.
pub async fn exchange_code(
    client: &QueryClient,
    origin: &str,
    callback: &CallbackRequest,
) -> Result<Session, AuthError> {
    let value = client.execute(HttpRequest::get(callback.url(origin))).await?;
    session_from_value(value)?.ok_or_else(|| {
        AuthError::Request(QueryError::Decode("callback returned no session".to_string()))
    })
}

pub async fn sign_out(client: &QueryClient, origin: &str) -> Result<(), QueryError> {
    let request = HttpRequest::new(Method::Post, format!("{}{}", origin, SIGN_OUT_PATH))
        .json_body("{}".to_string());
    client.execute(request).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::testing::{ManualClock, ScriptedTransport};
    use crate::shared::query::QueryOptions;
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

    #[test]
    fn callback_with_code_builds_exchange_url() {
        let callback = parse_callback("?code=abc%2F1&state=xyz").unwrap();
        assert_eq!(callback.code, "abc/1");
        assert_eq!(
            callback.url("https://dash.example.com"),
            "https://dash.example.com/api/auth/callback?code=abc%2F1&state=xyz"
        );
    }

    #[test]
    fn provider_error_is_readable_and_sends_nothing() {
        let (_client, transport) = setup();
        let err = parse_callback("error=access_denied&error_description=User%20cancelled").unwrap_err();
        assert_eq!(err.to_string(), "Sign-in was rejected: User cancelled");
        assert_eq!(transport.call_count(), 0);

        assert_eq!(
            parse_callback("error=access_denied").unwrap_err(),
            AuthError::Provider("access_denied".into())
        );
        assert_eq!(parse_callback("state=xyz").unwrap_err(), AuthError::MissingCode);
    }

    #[test]
    fn callback_detection() {
        assert!(is_callback("?code=1&state=2"));
        assert!(is_callback("?state=2&error=denied"));
        assert!(!is_callback("?active=d100"));
        assert!(!is_callback(""));
    }

    #[test]
    fn empty_session_means_signed_out() {
        let (client, transport) = setup();
        transport.respond(200, "{}");
        transport.respond(200, "null");
        transport.respond(
            200,
            r#"{"user":{"id":"u1","companyIds":["BIS"]},"expires":"2030-01-01T00:00:00Z"}"#,
        );

        assert_eq!(block_on(fetch_session(&client, "")).unwrap(), None);
        assert_eq!(block_on(fetch_session(&client, "")).unwrap(), None);
        let session = block_on(fetch_session(&client, "")).unwrap().unwrap();
        assert_eq!(session.user.company_ids, vec!["BIS"]);
        assert_eq!(transport.urls()[0], "/api/auth/session");
    }

    #[test]
    fn sign_out_posts() {
        let (client, transport) = setup();
        transport.respond(200, r#"{"url":"/"}"#);
        block_on(sign_out(&client, "https://dash")).unwrap();
        let call = &transport.calls()[0];
        assert_eq!(call.method, Method::Post);
        assert_eq!(call.url, "https://dash/api/auth/signout");
    }
}
