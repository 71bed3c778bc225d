//! Minimal HTTP request layer shared by the students API and login transport.
//!
//! Client-side (hydrate): requests go through `gloo-net` (browser `fetch`).
//! Native (SSR, tests): requests go through `reqwest`.
//!
//! DESIGN
//! ======
//! Both backends return the same raw [`HttpResponse`] and classify failures
//! into the same [`TransportError`] kinds, so status handling and error
//! translation are written once above this module.

#[cfg(all(test, not(feature = "hydrate")))]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

/// HTTP verbs used by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A request ready to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Bearer token for the `Authorization` header.
    pub bearer: Option<String>,
    /// Pre-serialized JSON body.
    pub json: Option<String>,
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), bearer: None, json: None, timeout: None }
    }

    #[must_use]
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Encode`] if the body cannot be serialized.
    pub fn json<T: serde::Serialize>(mut self, body: &T) -> Result<Self, TransportError> {
        let encoded = serde_json::to_string(body).map_err(|e| TransportError::Encode(e.to_string()))?;
        self.json = Some(encoded);
        Ok(self)
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Status and body of a completed exchange, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures that happen before a response status is available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The server could not be reached (DNS, refused connection, offline).
    #[error("network error: {0}")]
    Network(String),
    /// No response within the request timeout.
    #[error("request timed out")]
    Timeout,
    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),
    /// Any other client-side failure.
    #[error("request failed: {0}")]
    Other(String),
}

/// Send a request and collect the full response body.
///
/// # Errors
///
/// Returns a [`TransportError`] when no HTTP response is obtained. Non-2xx
/// statuses are not errors at this layer.
pub async fn send(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    #[cfg(feature = "hydrate")]
    {
        send_browser(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        send_native(request).await
    }
}

#[cfg(feature = "hydrate")]
async fn send_browser(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    use futures::future::{Either, select};
    use gloo_net::http::Request;

    let builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Put => Request::put(&request.url),
        Method::Delete => Request::delete(&request.url),
    };
    let builder = match &request.bearer {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    };
    let prepared = match request.json {
        Some(body) => builder.header("Content-Type", "application/json").body(body),
        None => builder.build(),
    }
    .map_err(|e| TransportError::Other(e.to_string()))?;

    let pending = prepared.send();
    let response = match request.timeout {
        Some(timeout) => {
            let timer = gloo_timers::future::sleep(timeout);
            futures::pin_mut!(pending);
            futures::pin_mut!(timer);
            match select(pending, timer).await {
                Either::Left((result, _)) => result,
                Either::Right(_) => return Err(TransportError::Timeout),
            }
        }
        None => pending.await,
    }
    .map_err(classify_gloo)?;

    let status = response.status();
    let body = response.text().await.map_err(classify_gloo)?;
    Ok(HttpResponse { status, body })
}

#[cfg(feature = "hydrate")]
fn classify_gloo(error: gloo_net::Error) -> TransportError {
    match error {
        // `fetch` rejects with a TypeError when the network is unreachable.
        gloo_net::Error::JsError(js) => TransportError::Network(js.to_string()),
        other => TransportError::Other(other.to_string()),
    }
}

#[cfg(not(feature = "hydrate"))]
async fn send_native(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    let client = reqwest::Client::new();
    let method = match request.method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    };

    let mut builder = client.request(method, &request.url);
    if let Some(token) = &request.bearer {
        builder = builder.bearer_auth(token);
    }
    if let Some(body) = request.json {
        builder = builder.header(reqwest::header::CONTENT_TYPE, "application/json").body(body);
    }
    if let Some(timeout) = request.timeout {
        builder = builder.timeout(timeout);
    }

    let response = builder.send().await.map_err(classify_reqwest)?;
    let status = response.status().as_u16();
    let body = response.text().await.map_err(classify_reqwest)?;
    Ok(HttpResponse { status, body })
}

#[cfg(not(feature = "hydrate"))]
fn classify_reqwest(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_connect() {
        TransportError::Network(error.to_string())
    } else {
        TransportError::Other(error.to_string())
    }
}
