//! HTTP transport and clock used by the query layer.
//!
//! Both sit behind traits: the browser build talks to `gloo-net` and
//! `gloo-timers`, unit tests plug in scripted implementations.

use async_trait::async_trait;
use gloo_net::http::Request;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach a JSON body; sets `Content-Type` accordingly.
    pub fn json_body(self, body: String) -> Self {
        let mut request = self.header("Content-Type", "application/json");
        request.body = Some(body);
        request
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced an HTTP status (offline, CORS, DNS, ...).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Browser `fetch` via gloo-net. Cookies ride along with same-origin requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| TransportError(format!("Failed to build request: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| TransportError(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("Failed to read response: {}", e)))?;
        Ok(HttpResponse { status, body })
    }
}

/// Wall clock plus an async sleep for retry back-off.
#[async_trait(?Send)]
pub trait Clock {
    fn now_ms(&self) -> i64;
    async fn sleep(&self, ms: u32);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[async_trait(?Send)]
impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    async fn sleep(&self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}
