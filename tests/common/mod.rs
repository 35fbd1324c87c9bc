//! Shared fixtures: fake JWTs, envelope bodies and a mock login helper.

#![allow(dead_code)]

use aiman_client::{CredentialBuilder, TokenCredential};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// 2100-01-01, safely in the future for any test run.
pub const FUTURE_EXP: u64 = 4_102_444_800;

/// An `exp` long gone.
pub const PAST_EXP: u64 = 1;

/// A structurally valid JWT whose payload carries only the claims the SDK
/// reads. The signature is garbage; the SDK never verifies it.
pub fn fake_jwt(exp: u64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp},"sub":"tester"}}"#));
    format!("{header}.{payload}.sig")
}

/// Wrap a payload in the service's response envelope.
pub fn envelope(data: serde_json::Value) -> String {
    serde_json::json!({ "messageContent": { "data": data } }).to_string()
}

/// An authenticate/refresh response body for the given token pair.
pub fn auth_body(access_token: &str, refresh_token: &str) -> String {
    envelope(serde_json::json!({
        "access_token": access_token,
        "refresh_token": refresh_token,
    }))
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Log in against the mock server with a token expiring at `exp`.
pub async fn login(
    server: &mut mockito::ServerGuard,
    exp: u64,
    auto_refresh: bool,
) -> TokenCredential {
    init_tracing();
    let mock = server
        .mock("POST", "/api/v1/auth/authenticate")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(auth_body(&fake_jwt(exp), "refresh-0"))
        .create_async()
        .await;

    let credential = CredentialBuilder::new("aiman-api.example.com")
        .auto_refresh(auto_refresh)
        .base_url_override(server.url())
        .authenticate("user", "secret")
        .await
        .expect("login against mock server");

    mock.assert_async().await;
    credential
}

/// Write a throwaway file under the system temp dir and return its path.
pub fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("aiman-client-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write temp file");
    path
}
