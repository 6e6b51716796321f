//! Request gateway: the one place HTTP semantics live.
//!
//! Every backend call goes through `Gateway::call`, which attaches JSON and
//! bearer headers, reads the body as text, and folds the outcome into
//! `Result<Value, ApiError>`.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Status` with the most specific
//! message available (`message` field, `error` field, raw text, status text).
//! A `message` list, as sent for validation failures, is joined with `,`.
//! Transport failures become `ApiError::Network`. Nothing is retried.
//!
//! Client-side (hydrate): `BrowserTransport` sends via `gloo-net`.
//! Server-side (SSR): the transport always reports a transport failure since
//! backend calls are only meaningful in the browser.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;

/// Message carried by every transport-level failure.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error: Unable to connect to server";

/// HTTP verbs the backend exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A backend call before it is sent.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub path: String,
    pub method: Method,
    pub body: Option<Value>,
    pub token: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { path: path.into(), method, body: None, token: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Post, path).json(body)
    }

    pub fn patch(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Patch, path).json(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a bearer token. Empty tokens are ignored.
    #[must_use]
    pub fn bearer(mut self, token: &str) -> Self {
        if !token.is_empty() {
            self.token = Some(token.to_owned());
        }
        self
    }

    /// Headers sent with this request, in order.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Content-Type", "application/json".to_owned())];
        if let Some(token) = &self.token {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
        headers
    }

    /// Serialized body, if any.
    pub fn body_text(&self) -> Option<String> {
        self.body.as_ref().map(Value::to_string)
    }
}

/// What came back over the wire, before interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

/// The request never produced a response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// Normalized failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// No response at all.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network,
    /// A 2xx payload did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status, when the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Sends a prepared request to a URL.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<RawResponse, TransportError>;
}

/// Turn a raw response into the gateway's result shape.
///
/// # Errors
///
/// Returns `ApiError::Status` for any non-2xx status.
pub fn interpret_response(raw: &RawResponse) -> Result<Value, ApiError> {
    let payload = parse_payload(&raw.body);
    if (200..300).contains(&raw.status) {
        return Ok(payload);
    }
    Err(ApiError::Status { status: raw.status, message: error_message(&payload, raw) })
}

/// Decode a body as JSON; empty or malformed text means "no payload".
fn parse_payload(body: &str) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or(Value::Null)
}

fn error_message(payload: &Value, raw: &RawResponse) -> String {
    let field = |name: &str| payload.get(name).and_then(message_text);
    field("message")
        .or_else(|| field("error"))
        .or_else(|| (!raw.body.is_empty()).then(|| raw.body.clone()))
        .or_else(|| (!raw.status_text.is_empty()).then(|| raw.status_text.clone()))
        .unwrap_or_else(|| "Request failed".to_owned())
}

/// Text of a message field: a non-empty string, or a non-empty list of
/// strings (validation failures) joined with `,`.
fn message_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect::<Vec<_>>().join(","),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Decode a successful payload into `T`.
///
/// # Errors
///
/// Returns `ApiError::Decode` when the payload does not fit `T`.
pub fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Backend client: base URL plus transport.
#[derive(Clone, Debug)]
pub struct Gateway<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> Gateway<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issue `request` and normalize the outcome.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` on transport failure and
    /// `ApiError::Status` on a non-2xx response.
    pub async fn call(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = self.config.endpoint(&request.path);
        let raw = match self.transport.send(&url, &request).await {
            Ok(raw) => raw,
            Err(e) => {
                leptos::logging::warn!("{} {url}: {e}", request.method.as_str());
                return Err(ApiError::Network);
            }
        };
        interpret_response(&raw)
    }

    /// Issue `request` and decode the payload into `R`.
    ///
    /// # Errors
    ///
    /// Same as [`Gateway::call`], plus `ApiError::Decode` on shape mismatch.
    pub async fn call_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        decode(self.call(request).await?)
    }
}

/// `fetch`-backed transport for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    #[allow(clippy::unused_async)]
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(url),
                Method::Post => Request::post(url),
                Method::Patch => Request::patch(url),
                Method::Delete => Request::delete(url),
            };
            for (name, value) in request.headers() {
                builder = builder.header(name, &value);
            }
            let prepared = match request.body_text() {
                Some(text) => builder.body(text),
                None => builder.build(),
            }
            .map_err(|e| TransportError(e.to_string()))?;
            let resp = prepared.send().await.map_err(|e| TransportError(e.to_string()))?;
            let status = resp.status();
            let status_text = resp.status_text();
            let body = resp.text().await.unwrap_or_default();
            Ok(RawResponse { status, status_text, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, request);
            Err(TransportError("not available on server".to_owned()))
        }
    }
}

/// Gateway configured from the environment with the browser transport.
pub fn browser_gateway() -> Gateway<BrowserTransport> {
    Gateway::new(ApiConfig::from_env(), BrowserTransport)
}
