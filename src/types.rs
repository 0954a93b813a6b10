use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::error::{ConversionError, ParseError};

#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<&Credentials> for LoginRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        }
    }
}

/// Opaque credential returned by the authentication endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken {
    value: String,
}

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken(<{} chars>)", self.value.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Valid,
    Invalid,
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelKind::Valid => write!(f, "valid"),
            LabelKind::Invalid => write!(f, "invalid"),
        }
    }
}

/// The three segments of a well-formed label, still as scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFields {
    pub identifier: String,
    pub shipment_code: String,
    pub destination_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLabel {
    Valid(LabelFields),
    Invalid { reason: String },
}

impl ParsedLabel {
    pub fn kind(&self) -> LabelKind {
        match self {
            ParsedLabel::Valid(_) => LabelKind::Valid,
            ParsedLabel::Invalid { .. } => LabelKind::Invalid,
        }
    }

    pub fn fields(&self) -> Option<&LabelFields> {
        match self {
            ParsedLabel::Valid(fields) => Some(fields),
            ParsedLabel::Invalid { .. } => None,
        }
    }

    pub fn error_reason(&self) -> Option<&str> {
        match self {
            ParsedLabel::Valid(_) => None,
            ParsedLabel::Invalid { reason } => Some(reason),
        }
    }

    pub fn into_fields(self) -> Result<LabelFields, ParseError> {
        match self {
            ParsedLabel::Valid(fields) => Ok(fields),
            ParsedLabel::Invalid { reason } => Err(ParseError { reason }),
        }
    }
}

/// Body of the receive call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiveRequest {
    pub identifier: u64,
    pub shipment_code: String,
    pub destination_code: u64,
    pub receive_date: NaiveDate,
    pub receive_timestamp: DateTime<FixedOffset>,
}

impl ReceiveRequest {
    /// Converts the scanned segments into the types the service expects.
    ///
    /// The identifier and destination code become integers. The shipment code
    /// must be all digits but stays a string so serial shipping container
    /// codes keep their leading zeros. `now` supplies both the receive date
    /// and the receive timestamp.
    pub fn from_fields(
        fields: &LabelFields,
        now: DateTime<FixedOffset>,
    ) -> Result<Self, ConversionError> {
        let identifier = parse_number("identifier", &fields.identifier)?;
        let destination_code = parse_number("destinationCode", &fields.destination_code)?;

        if !is_digits(&fields.shipment_code) {
            return Err(ConversionError {
                field: "shipmentCode",
                value: fields.shipment_code.clone(),
            });
        }

        Ok(Self {
            identifier,
            shipment_code: fields.shipment_code.clone(),
            destination_code,
            receive_date: now.date_naive(),
            receive_timestamp: now,
        })
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn parse_number(field: &'static str, value: &str) -> Result<u64, ConversionError> {
    let conversion_error = || ConversionError {
        field,
        value: value.to_string(),
    };

    // u64::from_str also accepts a leading '+'
    if !is_digits(value) {
        return Err(conversion_error());
    }
    value.parse::<u64>().map_err(|_| conversion_error())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

#[derive(Tabled)]
pub struct LabelTableRow {
    pub field: String,
    pub value: String,
}
