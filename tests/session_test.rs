mod common;

use axum::http::StatusCode;
use tracescan::{
    error::AuthError,
    management::{Preferences, SessionManager, TOKEN_KEY},
    remote,
    types::Credentials,
};

use common::{UNREACHABLE_URL, api_client, mock_endpoint, temp_dir};

fn credentials() -> Credentials {
    Credentials {
        email: "receiver@example.com".to_string(),
        password: "s3cret".to_string(),
    }
}

async fn session_in(name: &str) -> (SessionManager, std::path::PathBuf) {
    let path = temp_dir(name).join("preferences.json");
    let prefs = Preferences::load_from(&path).await.unwrap();
    (SessionManager::new(prefs), path)
}

#[tokio::test]
async fn test_login_stores_token() {
    let (url, recorder) =
        mock_endpoint("/api/login", StatusCode::OK, r#"{"token":"abc123"}"#).await;
    let client = api_client(&url);
    let (mut session, path) = session_in("login-stores").await;

    assert!(!session.is_logged_in());

    let token = session.login(&client, &credentials()).await.unwrap();
    assert_eq!(token.as_str(), "abc123");
    assert!(session.is_logged_in());
    assert_eq!(session.current_token().map(|t| t.as_str()), Some("abc123"));

    // persisted under the fixed key
    let reloaded = Preferences::load_from(&path).await.unwrap();
    assert_eq!(reloaded.get(TOKEN_KEY), Some("abc123"));

    let requests = recorder.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body["email"], "receiver@example.com");
    assert_eq!(requests[0].body["password"], "s3cret");
    assert_eq!(requests[0].authorization, None);
}

#[tokio::test]
async fn test_token_is_read_at_startup() {
    let (url, _) = mock_endpoint("/api/login", StatusCode::OK, r#"{"token":"persisted"}"#).await;
    let (mut session, path) = session_in("startup").await;
    session
        .login(&api_client(&url), &credentials())
        .await
        .unwrap();

    let restarted = SessionManager::new(Preferences::load_from(&path).await.unwrap());
    assert!(restarted.is_logged_in());
    assert_eq!(
        restarted.current_token().map(|t| t.as_str()),
        Some("persisted")
    );
}

#[tokio::test]
async fn test_login_with_configured_token_field() {
    let (url, _) = mock_endpoint(
        "/auth/login",
        StatusCode::OK,
        r#"{"accessToken":"jwt-1","tokenType":"Bearer","expiresIn":"3600"}"#,
    )
    .await;
    let client = api_client(&url)
        .with_login_path("/auth/login")
        .with_token_field("accessToken");
    let (mut session, _) = session_in("token-field").await;

    let token = session.login(&client, &credentials()).await.unwrap();
    assert_eq!(token.as_str(), "jwt-1");
}

#[tokio::test]
async fn test_login_with_nested_token_field() {
    let (url, _) = mock_endpoint(
        "/api/login",
        StatusCode::OK,
        r#"{"data":{"accessToken":"nested"}}"#,
    )
    .await;
    let client = api_client(&url).with_token_field("data.accessToken");

    let token = remote::auth::login(&client, &credentials()).await.unwrap();
    assert_eq!(token.as_str(), "nested");
}

#[tokio::test]
async fn test_rejected_login_keeps_state() {
    let (url, _) = mock_endpoint(
        "/api/login",
        StatusCode::UNAUTHORIZED,
        r#"{"message":"Bad credentials"}"#,
    )
    .await;
    let (mut session, path) = session_in("rejected").await;

    let err = session
        .login(&api_client(&url), &credentials())
        .await
        .unwrap_err();

    match err {
        AuthError::Rejected { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Bad credentials");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!session.is_logged_in());
    assert!(!path.exists());
}

#[tokio::test]
async fn test_empty_token_keeps_previous_session() {
    let (url, _) = mock_endpoint("/api/login", StatusCode::OK, r#"{"token":""}"#).await;
    let path = temp_dir("empty-token").join("preferences.json");
    let mut prefs = Preferences::load_from(&path).await.unwrap();
    prefs.put(TOKEN_KEY, "previous").await.unwrap();
    let mut session = SessionManager::new(prefs);

    let err = session
        .login(&api_client(&url), &credentials())
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::MissingToken { ref field } if field == "token"));
    assert_eq!(
        session.current_token().map(|t| t.as_str()),
        Some("previous")
    );
    let reloaded = Preferences::load_from(&path).await.unwrap();
    assert_eq!(reloaded.get(TOKEN_KEY), Some("previous"));
}

#[tokio::test]
async fn test_non_json_login_response() {
    let (url, _) = mock_endpoint("/api/login", StatusCode::OK, "welcome").await;
    let (mut session, _) = session_in("non-json").await;

    let err = session
        .login(&api_client(&url), &credentials())
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::MissingToken { .. }));
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn test_login_transport_failure() {
    let (mut session, path) = session_in("transport").await;

    let err = session
        .login(&api_client(UNREACHABLE_URL), &credentials())
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Transport(_)));
    assert!(!err.to_string().is_empty());
    assert!(!session.is_logged_in());
    assert!(!path.exists());
}

#[tokio::test]
async fn test_logout_clears_token() {
    let (url, _) = mock_endpoint("/api/login", StatusCode::OK, r#"{"token":"abc"}"#).await;
    let (mut session, path) = session_in("logout").await;
    session
        .login(&api_client(&url), &credentials())
        .await
        .unwrap();

    session.logout().await.unwrap();
    assert!(!session.is_logged_in());
    assert_eq!(session.current_token(), None);

    let reloaded = Preferences::load_from(&path).await.unwrap();
    assert_eq!(reloaded.get(TOKEN_KEY), None);
}

#[test]
fn test_credentials_debug_hides_password() {
    let printed = format!("{:?}", credentials());
    assert!(printed.contains("receiver@example.com"));
    assert!(!printed.contains("s3cret"));
}
