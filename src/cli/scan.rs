use chrono::Local;
use tabled::Table;

use crate::{
    cli::{load_session, spinner},
    error, info, label,
    remote::{self, ApiClient},
    scanner::{Scanner, ScannerSource},
    success,
    types::{LabelTableRow, ParsedLabel, ReceiveRequest, SessionToken},
    warning,
};

/// Parses a label without contacting the service and prints its fields.
pub fn parse(text: String) {
    let parsed = label::parse(&text);
    info!("Label is {}.", parsed.kind());
    match &parsed {
        ParsedLabel::Valid(fields) => {
            let rows = vec![
                LabelTableRow {
                    field: "identifier".to_string(),
                    value: fields.identifier.clone(),
                },
                LabelTableRow {
                    field: "shipmentCode".to_string(),
                    value: fields.shipment_code.clone(),
                },
                LabelTableRow {
                    field: "destinationCode".to_string(),
                    value: fields.destination_code.clone(),
                },
            ];
            println!("{}", Table::new(rows));

            if let Err(e) = ReceiveRequest::from_fields(fields, Local::now().fixed_offset()) {
                warning!("{}", e);
            }
        }
        ParsedLabel::Invalid { reason } => {
            warning!("Scanned data format is not recognized: {}", reason)
        }
    }
}

/// Submits one label given on the command line, or every label read from
/// the scanner until its input ends.
pub async fn scan(text: Option<String>, verbose: bool) {
    let session = load_session().await;
    let Some(token) = session.current_token().cloned() else {
        error!("User is not logged in. Run tracescan login first.");
    };

    let client = match ApiClient::from_env() {
        Ok(c) => c.with_verbose(verbose),
        Err(e) => error!("Cannot reach the service: {}", e),
    };

    if let Some(text) = text {
        submit_scan(&client, &token, text).await;
        return;
    }

    let source = ScannerSource::from_env();
    let mut scanner = match Scanner::open(&source).await {
        Ok(s) => s,
        Err(e) => {
            warning!("{}", e);
            warning!("Scanning is disabled.");
            return;
        }
    };

    info!("Waiting for labels on {} (end input to stop)...", source);
    let summary = scanner
        .run_session(|text| submit_scan(&client, &token, text))
        .await;
    info!(
        "Scanner input ended, {} label(s) sent, {} failed, {} unreadable.",
        summary.accepted, summary.failed, summary.unreadable
    );
}

async fn submit_scan(client: &ApiClient, token: &SessionToken, text: String) -> bool {
    info!("Scanned Data: {}", text);
    let parsed = label::parse(&text);

    let pb = spinner("Sending data...");
    let result = remote::receive::submit(client, &parsed, token).await;
    pb.finish_and_clear();

    match result {
        Ok(r) if r.success => {
            success!("Data sent successfully! {}", r.message);
            true
        }
        Ok(r) => {
            warning!("Failed to send data: {}", r.message);
            false
        }
        Err(e) => {
            warning!("{}", e);
            false
        }
    }
}
