use crate::utils::unix_now;
use crate::{Error, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

/// The access/refresh token pair issued by the service, replaced wholesale on
/// every refresh.
///
/// `expires_on` is decoded from the token's embedded `exp` claim rather than
/// estimated from wall clock, so the client's notion of expiry matches the
/// server's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// Opaque bearer string, sent as-is in the `Authorization` header.
    pub token: String,
    /// Opaque string used to request a new token pair without re-authenticating.
    pub refresh_token: String,
    /// Absolute Unix timestamp (seconds) after which `token` is invalid.
    pub expires_on: u64,
}

#[derive(Deserialize)]
struct Claims {
    exp: u64,
}

impl AccessToken {
    /// Build a token pair, deriving the expiry from the access token itself.
    pub fn from_token_pair(token: String, refresh_token: String) -> Result<Self> {
        let expires_on = decode_expiry(&token)?;
        Ok(Self {
            token,
            refresh_token,
            expires_on,
        })
    }

    /// Extract `access_token` / `refresh_token` from an unwrapped envelope
    /// payload (the body of the authenticate and refresh responses).
    pub fn from_payload(payload: &serde_json::Value) -> Result<Self> {
        let token = payload
            .get("access_token")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| Error::malformed_response("missing access_token in auth payload"))?;
        let refresh_token = payload
            .get("refresh_token")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| Error::malformed_response("missing refresh_token in auth payload"))?;
        Self::from_token_pair(token.to_string(), refresh_token.to_string())
    }

    /// Whether the token counts as expired at `now`. The boundary instant
    /// (`now == expires_on`) is expired.
    pub fn is_expired_at(&self, now: u64) -> bool {
        now >= self.expires_on
    }

    /// Whether the token counts as expired right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(unix_now())
    }
}

/// Read the `exp` claim from the bearer token's payload segment.
///
/// The token is treated as an opaque credential: the signature is not
/// verified, only the expiry claim is read.
fn decode_expiry(token: &str) -> Result<u64> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| Error::malformed_response("access token is not in JWT form"))?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| Error::malformed_response(format!("access token payload: {e}")))?;
    let claims: Claims = serde_json::from_slice(&bytes)
        .map_err(|e| Error::malformed_response(format!("access token claims: {e}")))?;
    Ok(claims.exp)
}
