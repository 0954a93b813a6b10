use thiserror::Error;

/// A required configuration value is missing, see [`crate::config`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The named environment variable is unset or empty.
    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Failures of the local key-value store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Cannot access preferences file: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but is not a JSON object of strings.
    #[error("Preferences file is corrupt: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Failures of a login attempt. None of them touch the stored session.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The service answered with a non-2xx status; `message` is what it sent.
    #[error("Login failed: {message}")]
    Rejected { status: u16, message: String },

    /// A 2xx answer without a non-empty token at the configured field.
    #[error("Login failed: Invalid response from server (no `{field}` in response)")]
    MissingToken { field: String },

    /// The request never completed.
    #[error("Login failed: {0}")]
    Transport(String),

    /// The service issued a token that could not be persisted.
    #[error("Login succeeded but the token could not be stored: {0}")]
    Storage(#[from] StorageError),
}

/// The scanned text does not follow the label layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Scanned data format is not recognized: {reason}")]
pub struct ParseError {
    pub reason: String,
}

/// A segment of an otherwise well-formed label does not hold the number the
/// service expects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Label field `{field}` is not numeric: {value:?}")]
pub struct ConversionError {
    pub field: &'static str,
    pub value: String,
}

/// Failures of a receive submission.
///
/// `InvalidLabel` and `Conversion` are raised before any request is sent,
/// see [`SubmitError::is_local`].
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The scan is not a well-formed label.
    #[error(transparent)]
    InvalidLabel(#[from] ParseError),

    /// A label segment is not numeric.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// The service answered with a non-2xx status; `message` is verbatim.
    #[error("Failed to send data: {message}")]
    Rejected { status: u16, message: String },

    /// The request never completed.
    #[error("Failed to send data: {0}")]
    Transport(String),
}

impl SubmitError {
    /// Whether the error was raised before any request left the process.
    pub fn is_local(&self) -> bool {
        matches!(self, SubmitError::InvalidLabel(_) | SubmitError::Conversion(_))
    }
}

/// Failures of the scanner input.
///
/// Only `Unavailable` and `Read` end a scan session; an `Undecodable` line is
/// skipped and the next one is read.
#[derive(Error, Debug)]
pub enum ScannerError {
    /// The configured scanner device cannot be opened; scanning is disabled.
    #[error("Scanner access is required for scanning ({path}): {source}")]
    Unavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// One scanned line is not valid UTF-8 and was discarded.
    #[error("Unreadable label skipped: {0}")]
    Undecodable(std::io::Error),

    /// The scanner input itself failed.
    #[error("Cannot read from scanner: {0}")]
    Read(#[from] std::io::Error),
}
