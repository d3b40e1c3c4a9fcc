//! # ApiClient — the two operations behind the FormBridge views
//!
//! | Method | Request | Ok | Err |
//! |--------|---------|----|-----|
//! | [`submit`](ApiClient::submit) | [`Endpoint::method`]; POST carries the [`FormSubmission`] as JSON | the body's `message` | [`ApiError::Server`] with the body's `error` |
//! | [`fetch_users`](ApiClient::fetch_users) | GET | the [`UserRecord`] array in server order | [`ApiError::Server`] with `error`, or [`USERS_FALLBACK_ERROR`] |
//!
//! Bodies that are not the expected JSON become [`ApiError::Decode`] so callers
//! always get something to show. Nothing is retried.

use crate::config::ClientConfig;
use crate::error::{ApiError, USERS_FALLBACK_ERROR};
use crate::form::FormSubmission;
use crate::models::{ErrorBody, MessageBody, UserRecord};
use crate::transport::{ApiRequest, Method, Transport};
use crate::Endpoint;

#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    /// Send a form to `endpoint` and return the server's message.
    ///
    /// The request method follows [`Endpoint::method`]; GET endpoints carry no body.
    pub async fn submit(
        &self,
        endpoint: Endpoint,
        submission: &FormSubmission,
    ) -> Result<String, ApiError> {
        let url = self.config.url_for(endpoint);
        tracing::debug!(%endpoint, %url, fields = submission.len(), "submitting form");
        let request = match endpoint.method() {
            Method::Post => ApiRequest::post_json(url, submission.to_json()?),
            Method::Get => ApiRequest::get(url),
        };

        let response = self
            .transport
            .send(request)
            .await
            .inspect_err(|e| tracing::warn!(%endpoint, "request failed: {e}"))?;

        if response.is_success() {
            let MessageBody { message } = serde_json::from_str(&response.body)?;
            return Ok(message);
        }

        let ErrorBody {
            error,
            locked_until,
        } = serde_json::from_str(&response.body)?;
        if let Some(until) = locked_until {
            tracing::info!(%endpoint, %until, "account locked out");
        }
        let message =
            error.ok_or_else(|| ApiError::Decode("missing `error` field".to_string()))?;
        tracing::warn!(%endpoint, status = response.status, "{message}");

        Err(ApiError::Server {
            status: response.status,
            message,
        })
    }

    /// GET the user list.
    pub async fn fetch_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let url = self.config.url_for(Endpoint::Users);
        tracing::debug!(%url, "fetching users");

        let response = self
            .transport
            .send(ApiRequest::get(url))
            .await
            .inspect_err(|e| tracing::warn!("request failed: {e}"))?;

        if !response.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&response.body)
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| USERS_FALLBACK_ERROR.to_string());
            tracing::warn!(status = response.status, "{message}");
            return Err(ApiError::Server {
                status: response.status,
                message,
            });
        }

        let users: Vec<UserRecord> = serde_json::from_str(&response.body)?;
        tracing::debug!(count = users.len(), "fetched users");
        Ok(users)
    }
}
