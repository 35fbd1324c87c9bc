//! Dispatcher contract: pre-flight refresh ordering, status classification,
//! envelope unwrapping and the DELETE special case.

mod common;

use aiman_client::{AiManClient, Error};
use common::*;
use std::sync::Arc;

#[tokio::test]
async fn expired_token_is_refreshed_before_the_data_call() {
    let mut server = mockito::Server::new_async().await;
    let credential = login(&mut server, PAST_EXP, true).await;
    let client = AiManClient::new(Arc::new(credential));

    let fresh_token = fake_jwt(FUTURE_EXP);
    let refresh_mock = server
        .mock("POST", "/api/v1/auth/refresh")
        .with_status(200)
        .with_body(auth_body(&fresh_token, "refresh-1"))
        .expect(1)
        .create_async()
        .await;

    // The data call must carry the refreshed bearer, proving the refresh
    // happened first.
    let models_mock = server
        .mock("GET", "/api/v1/models")
        .match_header("authorization", format!("Bearer {fresh_token}").as_str())
        .with_status(200)
        .with_body(envelope(serde_json::json!({ "Models": [] })))
        .expect(2)
        .create_async()
        .await;

    client.get_models().await.unwrap();
    // The token is now fresh: a second call must not refresh again.
    client.get_models().await.unwrap();

    refresh_mock.assert_async().await;
    models_mock.assert_async().await;
}

#[tokio::test]
async fn failed_refresh_sends_no_data_request() {
    let mut server = mockito::Server::new_async().await;
    let credential = login(&mut server, PAST_EXP, true).await;
    let client = AiManClient::new(Arc::new(credential));

    let _mock = server
        .mock("POST", "/api/v1/auth/refresh")
        .with_status(500)
        .create_async()
        .await;
    let models_mock = server
        .mock("GET", "/api/v1/models")
        .expect(0)
        .create_async()
        .await;

    let err = client.get_models().await.unwrap_err();
    assert!(matches!(err, Error::RefreshFailed { status: 500, .. }));
    models_mock.assert_async().await;
}

#[tokio::test]
async fn auto_refresh_off_sends_the_expired_token_anyway() {
    let mut server = mockito::Server::new_async().await;
    let credential = login(&mut server, PAST_EXP, false).await;
    let client = AiManClient::new(Arc::new(credential));

    let refresh_mock = server
        .mock("POST", "/api/v1/auth/refresh")
        .expect(0)
        .create_async()
        .await;
    let models_mock = server
        .mock("GET", "/api/v1/models")
        .with_status(401)
        .create_async()
        .await;

    let err = client.get_models().await.unwrap_err();
    match err {
        Error::RequestFailed { status, reason } => {
            assert_eq!(status, 401);
            assert_eq!(reason, "Unauthorized");
        }
        other => panic!("unexpected error: {other}"),
    }
    refresh_mock.assert_async().await;
    models_mock.assert_async().await;
}

#[tokio::test]
async fn accepted_statuses_unwrap_the_envelope() {
    for status in [200, 201, 202] {
        let mut server = mockito::Server::new_async().await;
        let credential = login(&mut server, FUTURE_EXP, true).await;
        let client = AiManClient::new(Arc::new(credential));

        let _mock = server
            .mock("GET", "/api/v1/models")
            .with_status(status)
            .with_body(envelope(serde_json::json!({ "Models": [] })))
            .create_async()
            .await;

        assert!(client.get_models().await.is_ok(), "status {status}");
    }
}

#[tokio::test]
async fn other_statuses_fail_with_the_exact_code() {
    for status in [204, 301, 400, 404, 500] {
        let mut server = mockito::Server::new_async().await;
        let credential = login(&mut server, FUTURE_EXP, true).await;
        let client = AiManClient::new(Arc::new(credential));

        let _mock = server
            .mock("GET", "/api/v1/models")
            .with_status(status)
            .with_body("ignored on failure")
            .create_async()
            .await;

        let err = client.get_models().await.unwrap_err();
        match err {
            Error::RequestFailed { status: got, .. } => {
                assert_eq!(got, status as u16)
            }
            other => panic!("unexpected error for {status}: {other}"),
        }
    }
}

#[tokio::test]
async fn delete_returns_the_raw_status_without_parsing_the_body() {
    let mut server = mockito::Server::new_async().await;
    let credential = login(&mut server, FUTURE_EXP, true).await;
    let client = AiManClient::new(Arc::new(credential));

    let _mock = server
        .mock("DELETE", "/api/v1/datasources/7")
        .with_status(204)
        .with_body("this is not json {")
        .create_async()
        .await;
    assert_eq!(client.delete_datasource(7).await.unwrap(), 204);

    // Even a failure status is handed back as-is for DELETE.
    let _mock = server
        .mock("DELETE", "/api/v1/datasources/8")
        .with_status(404)
        .create_async()
        .await;
    assert_eq!(client.delete_datasource(8).await.unwrap(), 404);
}

#[tokio::test]
async fn success_without_envelope_is_a_protocol_violation() {
    let mut server = mockito::Server::new_async().await;
    let credential = login(&mut server, FUTURE_EXP, true).await;
    let client = AiManClient::new(Arc::new(credential));

    let _mock = server
        .mock("GET", "/api/v1/models")
        .with_status(200)
        .with_body(r#"{"Models": []}"#)
        .create_async()
        .await;

    let err = client.get_models().await.unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[tokio::test]
async fn uniform_headers_are_applied() {
    let mut server = mockito::Server::new_async().await;
    let credential = login(&mut server, FUTURE_EXP, true).await;
    let token = credential.bearer_token().await;
    let client = AiManClient::new(Arc::new(credential));

    let mock = server
        .mock("GET", "/api/v1/models")
        .match_header("accept", "application/json")
        .match_header("authorization", format!("Bearer {token}").as_str())
        .with_status(200)
        .with_body(envelope(serde_json::json!({ "Models": [] })))
        .create_async()
        .await;

    client.get_models().await.unwrap();
    mock.assert_async().await;
}
