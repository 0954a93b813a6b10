//! # Traceability Service Module
//!
//! HTTP client for the two endpoints the scanner talks to:
//!
//! - [`auth`] - `POST {login_path}` with `{email, password}`, answered with a
//!   session token
//! - [`receive`] - `POST {receive_path}` with the bearer token and the
//!   receive request built from a scanned label
//!
//! Both calls are made exactly once per user action. Failures are reported,
//! never retried, and the service's own message is passed through unchanged
//! so the user sees what the server said.

pub mod auth;
mod client;
pub mod receive;

pub use client::ApiClient;

use reqwest::StatusCode;
use serde_json::{Map, Value};

use crate::info;

const REDACTED: &str = "<redacted>";
const MAX_TRACE_BODY: usize = 200;

/// Picks the message to show for a non-2xx answer.
///
/// Uses the `message` (or `error`) field of a JSON body, then the raw body,
/// then the status line.
pub(crate) fn server_message(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = json.get(key).and_then(Value::as_str) {
                if !message.is_empty() {
                    return message.to_string();
                }
            }
        }
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }

    status.to_string()
}

/// Masks every value whose key mentions a password or token, at any depth.
pub fn redact(json: &Value) -> Value {
    match json {
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, value)| {
                    let lower = key.to_lowercase();
                    let value = if lower.contains("password") || lower.contains("token") {
                        Value::String(REDACTED.to_string())
                    } else {
                        redact(value)
                    };
                    (key.clone(), value)
                })
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(redact).collect()),
        other => other.clone(),
    }
}

/// Renders a body for the verbose trace. JSON is redacted; anything else is
/// cut to a short prefix.
pub fn trace_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => redact(&json).to_string(),
        Err(_) if body.chars().count() > MAX_TRACE_BODY => {
            let head: String = body.chars().take(MAX_TRACE_BODY).collect();
            format!("{}...", head)
        }
        Err(_) => body.to_string(),
    }
}

pub(crate) fn trace_request(client: &ApiClient, url: &str, bearer: bool, body: &Value) {
    if !client.is_verbose() {
        return;
    }
    info!("POST {}", url);
    if bearer {
        info!("Authorization: Bearer {}", REDACTED);
    }
    info!("Request body: {}", redact(body));
}

pub(crate) fn trace_response(client: &ApiClient, status: StatusCode, body: &str) {
    if !client.is_verbose() {
        return;
    }
    info!("Response: {}", status);
    if !body.trim().is_empty() {
        info!("Response body: {}", trace_body(body));
    }
}
