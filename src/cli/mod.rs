//! # CLI Module
//!
//! The command-line front end of tracescan. Each command is one user action:
//! it runs to completion, reports its outcome as a status line, and never
//! retries on its own.
//!
//! ## Commands
//!
//! - [`login`] - Signs in and stores the session token
//! - [`logout`] - Clears the stored session token
//! - [`status`] - Shows whether a session exists and where requests go
//! - [`parse`] - Parses a label locally and prints its fields
//! - [`scan`] - Submits labels typed on the command line or read from the scanner
//!
//! ## Flow
//!
//! ```text
//! login ──> token stored ──> scan ──> label parsed ──> receive submitted
//! ```
//!
//! All state changes happen on the task running the command. Network calls
//! are awaited in place, so a scan session never has more than one
//! submission in flight.
//!
//! ## Usage Patterns
//!
//! ```bash
//! tracescan login --email user@example.com   # prompts for the password
//! tracescan scan                             # read labels from the scanner
//! tracescan scan --text A123B456C789         # submit a single label
//! tracescan parse A123B456C789               # check a label offline
//! ```

mod auth;
mod scan;

pub use auth::login;
pub use auth::logout;
pub use scan::parse;
pub use scan::scan;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error, info, management::SessionManager, remote::ApiClient, scanner::ScannerSource, warning,
};

pub async fn status() {
    let session = load_session().await;

    if session.is_logged_in() {
        info!("Logged in.");
    } else {
        warning!("Not logged in. Run tracescan login.");
    }

    match ApiClient::from_env() {
        Ok(client) => {
            info!("Service: {}", client.api_url());
            info!("Login endpoint: {}", client.login_url());
            info!("Receive endpoint: {}", client.receive_url());
        }
        Err(e) => warning!("{}", e),
    }
    info!("Token store: {}", session.preferences().path().display());
    info!("Scanner: {}", ScannerSource::from_env());
}

async fn load_session() -> SessionManager {
    match SessionManager::load().await {
        Ok(s) => s,
        Err(e) => error!("Failed to load stored session: {}", e),
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
