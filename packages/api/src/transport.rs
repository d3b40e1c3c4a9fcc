//! # Transport — one HTTP exchange behind an async trait
//!
//! [`ApiClient`](crate::ApiClient) never talks to the network directly; it hands
//! an [`ApiRequest`] to a [`Transport`] and interprets the [`ApiResponse`]. Two
//! implementations exist:
//!
//! - [`HttpTransport`] wraps a [`reqwest::Client`]. On `wasm32` reqwest drives
//!   the browser's `fetch`, natively it uses hyper, so the same code serves the
//!   web build and native tooling.
//! - [`MemoryTransport`](crate::MemoryTransport) replays canned responses for tests.
//!
//! A transport only reports whether *a* response arrived. Status handling and
//! body parsing belong to the client.

use reqwest::header::CONTENT_TYPE;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully resolved request: absolute URL and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
        }
    }

    pub fn post_json(url: impl Into<String>, body: String) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: Some(body),
        }
    }
}

/// Status code and raw body of a completed exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx, the range `fetch` reports as `ok`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async trait performing a single request/response exchange.
pub trait Transport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl std::future::Future<Output = Result<ApiResponse, ApiError>>;
}

/// reqwest-backed transport.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        let builder = match request.body {
            Some(body) => builder.header(CONTENT_TYPE, "application/json").body(body),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(ApiResponse::new(200, "").is_success());
        assert!(ApiResponse::new(201, "").is_success());
        assert!(ApiResponse::new(299, "").is_success());
        assert!(!ApiResponse::new(199, "").is_success());
        assert!(!ApiResponse::new(301, "").is_success());
        assert!(!ApiResponse::new(401, "").is_success());
    }

    #[test]
    fn test_request_constructors() {
        let get = ApiRequest::get("http://localhost/api/users");
        assert_eq!(get.method, Method::Get);
        assert!(get.body.is_none());

        let post = ApiRequest::post_json("http://localhost/api/login", "{}".to_string());
        assert_eq!(post.method, Method::Post);
        assert_eq!(post.body.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_http_transport_reports_unreachable_host() {
        let transport = HttpTransport::new();
        let err = transport
            .send(ApiRequest::get("http://127.0.0.1:9/api/users"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
