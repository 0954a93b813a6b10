mod common;

use axum::http::StatusCode;
use serde_json::json;
use tracescan::{
    remote::{self, ApiClient, redact, trace_body},
    types::{Credentials, SessionToken},
};

use common::{api_client, mock_endpoint};

#[test]
fn test_endpoints_join_base_url() {
    let client = ApiClient::new("https://trace.example.com/")
        .with_login_path("/auth/login")
        .with_receive_path("receive");

    assert_eq!(client.api_url(), "https://trace.example.com");
    assert_eq!(client.login_url(), "https://trace.example.com/auth/login");
    assert_eq!(client.receive_url(), "https://trace.example.com/receive");
    assert!(!client.is_verbose());
}

#[test]
fn test_redact_masks_secrets_at_any_depth() {
    let body = json!({
        "email": "receiver@example.com",
        "password": "s3cret",
        "data": {"accessToken": "abc", "user": {"name": "Ana"}},
        "items": [{"refresh_token": "xyz", "id": 7}],
    });

    assert_eq!(
        redact(&body),
        json!({
            "email": "receiver@example.com",
            "password": "<redacted>",
            "data": {"accessToken": "<redacted>", "user": {"name": "Ana"}},
            "items": [{"refresh_token": "<redacted>", "id": 7}],
        })
    );
}

#[test]
fn test_trace_body_truncates_plain_text() {
    let long = "x".repeat(500);
    let traced = trace_body(&long);

    assert!(traced.ends_with("..."));
    assert_eq!(traced.len(), 203);
    assert_eq!(trace_body("token expired"), "token expired");
    assert_eq!(trace_body(r#"{"token":"abc"}"#), r#"{"token":"<redacted>"}"#);
}

#[tokio::test]
async fn test_verbose_client_still_logs_in() {
    let (url, recorder) = mock_endpoint("/api/login", StatusCode::OK, r#"{"token":"abc123"}"#).await;
    let client = api_client(&url).with_verbose(true);
    let credentials = Credentials {
        email: "receiver@example.com".to_string(),
        password: "s3cret".to_string(),
    };

    let token = remote::auth::login(&client, &credentials).await.unwrap();

    assert_eq!(token, SessionToken::new("abc123"));
    assert_eq!(recorder.requests()[0].body["password"], "s3cret");
}
