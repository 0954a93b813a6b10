//! Traceability Label Scanner Library
//!
//! This library provides the pieces behind the `tracescan` command-line tool:
//! signing in to a food traceability service, reading labels from a barcode
//! scanner, extracting the identifiers a label carries, and reporting the
//! receipt of a shipment back to the service.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error types for every user action
//! - `label` - Parser for the marker-delimited label layout
//! - `management` - Local key-value storage and the session token
//! - `remote` - HTTP client for the traceability service
//! - `scanner` - Line-oriented scanner input
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use tracescan::{config, cli};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env().await.ok();
//!     cli::status().await;
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod label;
pub mod management;
pub mod remote;
pub mod scanner;
pub mod types;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Waiting for scanner input...");
/// info!("Submitting label {}", raw);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to provide positive feedback when a login or a submission
/// completes successfully.
///
/// # Example
///
/// ```
/// success!("Login successful!");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the program with exit code 1 right after printing. Only used
/// for failures where the requested command cannot do anything useful, such
/// as a missing service URL.
///
/// # Example
///
/// ```
/// error!("TRACESCAN_API_URL must be set");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Every failed user action (rejected login, unreadable label, refused
/// submission) is reported through this macro; none of them end the program
/// on their own.
///
/// # Example
///
/// ```
/// warning!("Failed to send data: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
