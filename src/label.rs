//! Parser for scanned traceability labels.
//!
//! A label carries three segments separated by literal marker characters:
//!
//! ```text
//! A<identifier>B<shipment code>C<destination code>
//! ```
//!
//! Each marker appears exactly once, in that order, and every segment is
//! non-empty. Anything else is reported as an invalid label together with the
//! reason. Segments are returned exactly as scanned; turning them into numbers
//! happens when the receive request is built.

use crate::types::{LabelFields, ParsedLabel};

pub const IDENTIFIER_MARKER: char = 'A';
pub const SHIPMENT_MARKER: char = 'B';
pub const DESTINATION_MARKER: char = 'C';

/// Parses a single scanned string.
///
/// The input is taken verbatim; callers strip line terminators before
/// handing scanner output to this function.
///
/// # Example
///
/// ```
/// use tracescan::{label, types::LabelKind};
///
/// let parsed = label::parse("A123B456C789");
/// assert_eq!(parsed.kind(), LabelKind::Valid);
/// ```
pub fn parse(text: &str) -> ParsedLabel {
    match split_segments(text) {
        Ok(fields) => ParsedLabel::Valid(fields),
        Err(reason) => ParsedLabel::Invalid { reason },
    }
}

fn split_segments(text: &str) -> Result<LabelFields, String> {
    if text.is_empty() {
        return Err("scanned text is empty".to_string());
    }

    let Some(rest) = text.strip_prefix(IDENTIFIER_MARKER) else {
        return Err(format!(
            "label must start with marker '{}'",
            IDENTIFIER_MARKER
        ));
    };

    for marker in [IDENTIFIER_MARKER, SHIPMENT_MARKER, DESTINATION_MARKER] {
        // the leading marker was already consumed
        let expected = if marker == IDENTIFIER_MARKER { 0 } else { 1 };
        let found = rest.matches(marker).count();

        if found < expected {
            return Err(format!("missing marker '{}'", marker));
        }
        if found > expected {
            return Err(format!(
                "marker '{}' appears {} times, expected once",
                marker,
                found + (1 - expected)
            ));
        }
    }

    // both markers occur exactly once past this point
    let shipment_at = rest.find(SHIPMENT_MARKER).unwrap_or_default();
    let destination_at = rest.find(DESTINATION_MARKER).unwrap_or_default();

    if destination_at < shipment_at {
        return Err(format!(
            "marker '{}' appears before marker '{}'",
            DESTINATION_MARKER, SHIPMENT_MARKER
        ));
    }

    let identifier = &rest[..shipment_at];
    let shipment_code = &rest[shipment_at + SHIPMENT_MARKER.len_utf8()..destination_at];
    let destination_code = &rest[destination_at + DESTINATION_MARKER.len_utf8()..];

    for (name, segment) in [
        ("identifier", identifier),
        ("shipment code", shipment_code),
        ("destination code", destination_code),
    ] {
        if segment.is_empty() {
            return Err(format!("{} segment is empty", name));
        }
    }

    Ok(LabelFields {
        identifier: identifier.to_string(),
        shipment_code: shipment_code.to_string(),
        destination_code: destination_code.to_string(),
    })
}
