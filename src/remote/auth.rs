use serde_json::Value;

use crate::{
    error::AuthError,
    remote::{ApiClient, server_message, trace_request, trace_response},
    types::{Credentials, LoginRequest, SessionToken},
};

/// Exchanges credentials for a session token.
///
/// Posts `{email, password}` as JSON to the login endpoint and reads the token
/// from the configured response field. Nothing is stored here; persisting the
/// token is up to [`crate::management::SessionManager`].
///
/// # Errors
///
/// - `AuthError::Rejected` - the service answered with a non-2xx status; the
///   message is the one the service sent
/// - `AuthError::MissingToken` - a 2xx answer without a non-empty token
/// - `AuthError::Transport` - the request never completed
pub async fn login(client: &ApiClient, credentials: &Credentials) -> Result<SessionToken, AuthError> {
    let url = client.login_url();
    let request = LoginRequest::from(credentials);
    if client.is_verbose() {
        let json = serde_json::to_value(&request).unwrap_or(Value::Null);
        trace_request(client, &url, false, &json);
    }

    let response = client
        .http
        .post(url)
        .json(&request)
        .send()
        .await
        .map_err(|e| AuthError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AuthError::Transport(e.to_string()))?;
    trace_response(client, status, &body);

    if !status.is_success() {
        return Err(AuthError::Rejected {
            status: status.as_u16(),
            message: server_message(status, &body),
        });
    }

    let missing = || AuthError::MissingToken {
        field: client.token_field().to_string(),
    };

    let json: Value = serde_json::from_str(&body).map_err(|_| missing())?;
    extract_token(&json, client.token_field())
        .map(SessionToken::new)
        .ok_or_else(missing)
}

/// Looks up a dotted field path and returns it when it is a non-empty string.
pub fn extract_token(json: &Value, field: &str) -> Option<String> {
    field
        .split('.')
        .try_fold(json, |value, key| value.get(key))
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
