//! Request dispatch: the single chokepoint for every outbound API call.
//!
//! [`Dispatcher::execute`] guarantees a fresh token is used, applies the
//! uniform header set, classifies the response status, and strips the
//! service's `{"messageContent": {"data": ...}}` envelope. Centralizing this
//! here is what keeps every higher-level call a thin payload-shaping wrapper.

use crate::auth::TokenCredential;
use crate::routes::Route;
use crate::{Error, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use std::sync::Arc;
use tracing::debug;

/// Dispatches API calls on behalf of one credential.
pub struct Dispatcher {
    credential: Arc<TokenCredential>,
}

impl Dispatcher {
    pub fn new(credential: Arc<TokenCredential>) -> Self {
        Self { credential }
    }

    /// Execute a GET/POST/PUT call and return the unwrapped envelope payload.
    ///
    /// Status codes 200, 201 and 202 are success; anything else fails with
    /// [`Error::RequestFailed`] carrying the exact status, without inspecting
    /// the body. Exactly one network call is made; there is no retry.
    pub async fn execute(
        &self,
        method: Method,
        route: Route,
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value> {
        let response = self.send(method, &route, body).await?;
        let status = response.status();
        if !matches!(status.as_u16(), 200 | 201 | 202) {
            return Err(Error::RequestFailed {
                status: status.as_u16(),
                reason: status_reason(status),
            });
        }
        parse_envelope(&response.text().await?)
    }

    /// Execute a DELETE call. The raw status code is the result; the body is
    /// never parsed, even if present.
    pub async fn execute_delete(&self, route: Route) -> Result<u16> {
        let response = self.send(Method::DELETE, &route, None).await?;
        Ok(response.status().as_u16())
    }

    /// Pre-flight refresh, build and send. One network call for the data
    /// request; a failed pre-flight refresh aborts before it is sent.
    async fn send(
        &self,
        method: Method,
        route: &Route,
        body: Option<&serde_json::Value>,
    ) -> Result<reqwest::Response> {
        if self.credential.auto_refresh() && self.credential.is_expired().await {
            self.credential.refresh_if_expired().await?;
        }

        let url = format!("{}{}", self.credential.api_host(), route.path());
        let token = self.credential.bearer_token().await;
        debug!(%method, %url, "dispatching request");

        let mut request = self
            .credential
            .http()
            .request(method.clone(), &url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"));

        if method == Method::POST || method == Method::PUT || method == Method::DELETE {
            request = request.header(CONTENT_TYPE, "application/json");
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        request.send().await.map_err(Error::from)
    }
}

/// Parse a success body and unwrap `messageContent.data`.
pub(crate) fn parse_envelope(body: &str) -> Result<serde_json::Value> {
    let envelope: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| Error::malformed_response(format!("response body is not JSON: {e}")))?;
    envelope
        .get("messageContent")
        .and_then(|content| content.get("data"))
        .cloned()
        .ok_or_else(|| Error::malformed_response("missing messageContent.data envelope"))
}

/// Status text for error messages; unknown codes render as the bare number.
pub(crate) fn status_reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}
