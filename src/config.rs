//! Configuration management for the label scanner.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file. The service endpoints, the name of
//! the token field in the login response, and the scanner device are all
//! configuration; nothing about the remote service is hardcoded besides the
//! defaults below.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::error::ConfigError;

pub const APP_DIR: &str = "tracescan";

pub const DEFAULT_LOGIN_PATH: &str = "/api/login";
pub const DEFAULT_RECEIVE_PATH: &str = "/api/cte/receive/makeCteReceive";
pub const DEFAULT_TOKEN_FIELD: &str = "token";

/// Returns the application's directory inside the local data directory.
///
/// - Linux: `~/.local/share/tracescan`
/// - macOS: `~/Library/Application Support/tracescan`
/// - Windows: `%LOCALAPPDATA%/tracescan`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

/// Loads environment variables from the `.env` file in the local data directory.
///
/// Creates the directory if it doesn't exist. A missing `.env` file is not an
/// error since every value can also come from the process environment.
/// Variables already present in the environment are never overridden.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or an existing `.env`
/// file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the base URL of the traceability service.
///
/// Retrieves `TRACESCAN_API_URL`, e.g. `https://trace.example.com/api/v1`.
/// A trailing slash is removed so paths can be appended directly.
pub fn api_url() -> Result<String, ConfigError> {
    let url = env::var("TRACESCAN_API_URL").map_err(|_| ConfigError::Missing("TRACESCAN_API_URL"))?;
    Ok(url.trim_end_matches('/').to_string())
}

/// Path of the authentication endpoint (`TRACESCAN_LOGIN_PATH`).
pub fn login_path() -> String {
    env::var("TRACESCAN_LOGIN_PATH").unwrap_or_else(|_| DEFAULT_LOGIN_PATH.to_string())
}

/// Path of the receive endpoint (`TRACESCAN_RECEIVE_PATH`).
pub fn receive_path() -> String {
    env::var("TRACESCAN_RECEIVE_PATH").unwrap_or_else(|_| DEFAULT_RECEIVE_PATH.to_string())
}

/// Name of the field holding the access token in the login response.
///
/// Retrieves `TRACESCAN_TOKEN_FIELD`. Service revisions disagree on the name
/// (`token`, `accessToken`), and some nest it; nested fields are written with
/// dots, e.g. `data.accessToken`.
pub fn token_field() -> String {
    env::var("TRACESCAN_TOKEN_FIELD").unwrap_or_else(|_| DEFAULT_TOKEN_FIELD.to_string())
}

/// Optional scanner character device (`TRACESCAN_SCANNER_DEVICE`).
///
/// When unset, labels are read from standard input, which is where keyboard
/// wedge scanners deliver them.
pub fn scanner_device() -> Option<PathBuf> {
    env::var_os("TRACESCAN_SCANNER_DEVICE")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
