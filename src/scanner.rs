//! Line-oriented scanner input.
//!
//! Barcode scanners either act as a keyboard, typing the decoded label
//! followed by Enter, or expose a character device that yields one label per
//! line. Both end up as a stream of lines; each non-blank line is one scan.

use std::{io::ErrorKind, path::PathBuf};

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

use crate::{error::ScannerError, warning};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannerSource {
    Stdin,
    Device(PathBuf),
}

impl ScannerSource {
    pub fn from_env() -> Self {
        match crate::config::scanner_device() {
            Some(path) => ScannerSource::Device(path),
            None => ScannerSource::Stdin,
        }
    }
}

impl std::fmt::Display for ScannerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScannerSource::Stdin => write!(f, "standard input"),
            ScannerSource::Device(path) => write!(f, "{}", path.display()),
        }
    }
}

pub struct Scanner {
    lines: Lines<BufReader<Box<dyn AsyncRead + Unpin + Send>>>,
}

impl Scanner {
    /// Opens the scanner.
    ///
    /// Opening a device doubles as the capability check: when the device
    /// cannot be opened (typically permission denied) scanning is unavailable.
    pub async fn open(source: &ScannerSource) -> Result<Self, ScannerError> {
        match source {
            ScannerSource::Stdin => Ok(Self::from_reader(tokio::io::stdin())),
            ScannerSource::Device(path) => {
                let file = tokio::fs::File::open(path)
                    .await
                    .map_err(|source| ScannerError::Unavailable {
                        path: path.display().to_string(),
                        source,
                    })?;
                Ok(Self::from_reader(file))
            }
        }
    }

    pub fn from_reader<R>(reader: R) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let reader: Box<dyn AsyncRead + Unpin + Send> = Box::new(reader);
        Self {
            lines: BufReader::new(reader).lines(),
        }
    }

    /// Waits for the next scan.
    ///
    /// Returns the scanned text without its line terminator, skipping blank
    /// lines. `None` means the scanner input has ended.
    ///
    /// # Errors
    ///
    /// - `ScannerError::Undecodable` - the line was not valid UTF-8; it is
    ///   consumed, so the next call continues with the following line
    /// - `ScannerError::Read` - the input failed
    pub async fn next_scan(&mut self) -> Result<Option<String>, ScannerError> {
        loop {
            match self.lines.next_line().await {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => return Ok(Some(line)),
                Ok(None) => return Ok(None),
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    return Err(ScannerError::Undecodable(e));
                }
                Err(e) => return Err(ScannerError::Read(e)),
            }
        }
    }

    /// Hands every scan to `on_scan` until the input ends.
    ///
    /// Each call to `on_scan` is awaited before the next line is read, so at
    /// most one submission is in flight. `on_scan` reports whether the label
    /// was accepted. Unreadable lines are reported and skipped; only a failure
    /// of the input itself ends the session early.
    pub async fn run_session<F, Fut>(&mut self, mut on_scan: F) -> SessionSummary
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = bool>,
    {
        let mut summary = SessionSummary::default();
        loop {
            match self.next_scan().await {
                Ok(Some(text)) => {
                    if on_scan(text).await {
                        summary.accepted += 1;
                    } else {
                        summary.failed += 1;
                    }
                }
                Ok(None) => break,
                Err(e @ ScannerError::Undecodable(_)) => {
                    warning!("{}", e);
                    summary.unreadable += 1;
                }
                Err(e) => {
                    warning!("{}", e);
                    summary.interrupted = true;
                    break;
                }
            }
        }
        summary
    }
}

/// Outcome counts of a scan session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub accepted: usize,
    pub failed: usize,
    pub unreadable: usize,
    /// The input failed before it ended.
    pub interrupted: bool,
}
