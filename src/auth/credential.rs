use crate::auth::AccessToken;
use crate::routes::Route;
use crate::transport::{parse_envelope, status_reason};
use crate::utils::normalize_api_host;
use crate::{Error, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// Owner of the bearer token for one client session.
///
/// Created by performing the login call; shared by reference between the
/// owning client and the dispatcher. The access token is mutated in place by
/// [`refresh`](Self::refresh) only (single writer, many readers), so every
/// holder observes a successful refresh without re-fetching the credential.
#[derive(Debug)]
pub struct TokenCredential {
    api_host: String,
    auto_refresh: bool,
    access: RwLock<AccessToken>,
    /// Serializes concurrent refreshes; see [`refresh_if_expired`](Self::refresh_if_expired).
    refresh_gate: Mutex<()>,
    http: reqwest::Client,
}

/// Builder for [`TokenCredential`].
///
/// Keep this surface small: the host, the refresh policy, and a base-URL
/// override for testing against mock servers.
pub struct CredentialBuilder {
    api_host: String,
    auto_refresh: bool,
    base_url_override: Option<String>,
}

impl CredentialBuilder {
    pub fn new(api_host: impl Into<String>) -> Self {
        Self {
            api_host: api_host.into(),
            auto_refresh: true,
            base_url_override: None,
        }
    }

    /// Disable or enable transparent token refresh (default: enabled). With
    /// refresh disabled an expired token is sent anyway and fails at the
    /// server.
    pub fn auto_refresh(mut self, enable: bool) -> Self {
        self.auto_refresh = enable;
        self
    }

    /// Use this URL verbatim instead of the normalized API host.
    ///
    /// This is primarily for testing with mock servers, which speak plain
    /// HTTP on localhost; production hosts go through normalization and are
    /// forced to HTTPS.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Perform the login call and return a fresh credential.
    pub async fn authenticate(self, user_name: &str, password: &str) -> Result<TokenCredential> {
        let api_host = match self.base_url_override {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => normalize_api_host(&self.api_host)?,
        };

        let http = reqwest::Client::new();
        let url = format!("{}{}", api_host, Route::Authenticate.path());
        let body = serde_json::json!({
            "userName": user_name,
            "userPassword": password,
        });

        debug!(host = %api_host, "authenticating");
        let response = http
            .post(&url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::AuthenticationFailed {
                status: status.as_u16(),
                reason: status_reason(status),
            });
        }

        let payload = parse_envelope(&response.text().await?)?;
        let access = AccessToken::from_payload(&payload)?;
        info!(host = %api_host, expires_on = access.expires_on, "authenticated");

        Ok(TokenCredential {
            api_host,
            auto_refresh: self.auto_refresh,
            access: RwLock::new(access),
            refresh_gate: Mutex::new(()),
            http,
        })
    }
}

impl TokenCredential {
    /// Log in with auto-refresh enabled. Shorthand for the builder.
    pub async fn authenticate(
        api_host: &str,
        user_name: &str,
        password: &str,
    ) -> Result<TokenCredential> {
        CredentialBuilder::new(api_host)
            .authenticate(user_name, password)
            .await
    }

    /// The normalized base URL all routes are appended to.
    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    pub fn auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    /// The HTTP client shared with the dispatcher, so all calls of a session
    /// reuse one connection pool.
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Snapshot of the current token pair.
    pub async fn access(&self) -> AccessToken {
        self.access.read().await.clone()
    }

    /// The current bearer string.
    pub async fn bearer_token(&self) -> String {
        self.access.read().await.token.clone()
    }

    /// Whether the current token counts as expired (`now >= expires_on`).
    pub async fn is_expired(&self) -> bool {
        self.access.read().await.is_expired()
    }

    /// Request a new token pair with the current refresh token and install it
    /// in place.
    ///
    /// On a non-success status this fails with [`Error::RefreshFailed`] and
    /// the stale token stays installed: a failed refresh must not clear
    /// credentials mid-session, and the next call will simply attempt
    /// refresh again. Concurrent refreshes are tolerated; the last
    /// successful response wins the write.
    pub async fn refresh(&self) -> Result<()> {
        let refresh_token = self.access.read().await.refresh_token.clone();
        let url = format!("{}{}", self.api_host, Route::Refresh.path());
        let body = serde_json::json!({ "refreshToken": refresh_token });

        debug!(host = %self.api_host, "refreshing access token");
        let response = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "token refresh rejected, keeping stale token");
            return Err(Error::RefreshFailed {
                status: status.as_u16(),
                reason: status_reason(status),
            });
        }

        let payload = parse_envelope(&response.text().await?)?;
        let fresh = AccessToken::from_payload(&payload)?;
        let expires_on = fresh.expires_on;
        *self.access.write().await = fresh;
        info!(expires_on, "access token refreshed");
        Ok(())
    }

    /// Refresh only if the token is still expired.
    ///
    /// Callers queue on the gate; a waiter whose peer already renewed the
    /// token skips the second network call.
    pub(crate) async fn refresh_if_expired(&self) -> Result<()> {
        let _gate = self.refresh_gate.lock().await;
        if !self.is_expired().await {
            return Ok(());
        }
        self.refresh().await
    }
}
