use reqwest::Client;

use crate::{config, error::ConfigError};

/// Endpoints and HTTP client for the traceability service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) http: Client,
    api_url: String,
    login_path: String,
    receive_path: String,
    token_field: String,
    verbose: bool,
}

impl ApiClient {
    /// Creates a client for `api_url` using the default paths and token field.
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            http: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            login_path: config::DEFAULT_LOGIN_PATH.to_string(),
            receive_path: config::DEFAULT_RECEIVE_PATH.to_string(),
            token_field: config::DEFAULT_TOKEN_FIELD.to_string(),
            verbose: false,
        }
    }

    /// Creates a client from the environment, see [`crate::config`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(config::api_url()?)
            .with_login_path(config::login_path())
            .with_receive_path(config::receive_path())
            .with_token_field(config::token_field()))
    }

    /// Replaces the underlying HTTP client, e.g. to configure proxies or timeouts.
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Sets the login endpoint path, relative to the base URL.
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Sets the receive endpoint path, relative to the base URL.
    pub fn with_receive_path(mut self, path: impl Into<String>) -> Self {
        self.receive_path = path.into();
        self
    }

    /// Sets the login response field holding the token. Dots select nested
    /// fields, e.g. `data.accessToken`.
    pub fn with_token_field(mut self, field: impl Into<String>) -> Self {
        self.token_field = field.into();
        self
    }

    /// Prints every request and response, with secrets masked.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Base URL without a trailing slash.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn token_field(&self) -> &str {
        &self.token_field
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn login_url(&self) -> String {
        self.endpoint(&self.login_path)
    }

    pub fn receive_url(&self) -> String {
        self.endpoint(&self.receive_path)
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{uri}/{path}",
            uri = self.api_url,
            path = path.trim_start_matches('/')
        )
    }
}
