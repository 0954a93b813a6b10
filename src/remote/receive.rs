use chrono::Local;

use crate::{
    error::SubmitError,
    remote::{ApiClient, server_message, trace_request, trace_response},
    types::{ParsedLabel, ReceiveRequest, SessionToken, SubmissionResult},
};

/// Reports the receipt of a scanned label to the service.
///
/// The label must be valid and all of its segments numeric; both are checked
/// before anything is sent, so an unusable scan never reaches the network.
/// The receive date and timestamp are taken from the local clock at the time
/// of the call.
///
/// Exactly one request is made. There is no retry and no idempotency key, so
/// submitting the same label twice produces two independent receipts.
///
/// # Returns
///
/// - `Ok(SubmissionResult)` - the service accepted the request. The result is
///   what the service answered; `success` may still be `false` when the
///   service refused the receipt at the application level.
/// - `Err(SubmitError)` - the label could not be used, the service answered
///   with a non-2xx status, or the request never completed.
pub async fn submit(
    client: &ApiClient,
    label: &ParsedLabel,
    token: &SessionToken,
) -> Result<SubmissionResult, SubmitError> {
    let fields = label.clone().into_fields()?;
    let request = ReceiveRequest::from_fields(&fields, Local::now().fixed_offset())?;

    send(client, &request, token).await
}

/// Sends an already built receive request.
pub async fn send(
    client: &ApiClient,
    request: &ReceiveRequest,
    token: &SessionToken,
) -> Result<SubmissionResult, SubmitError> {
    let url = client.receive_url();
    if client.is_verbose() {
        let json = serde_json::to_value(request).unwrap_or(serde_json::Value::Null);
        trace_request(client, &url, true, &json);
    }

    let response = client
        .http
        .post(url)
        .bearer_auth(token.as_str())
        .json(request)
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;
    trace_response(client, status, &body);

    if !status.is_success() {
        return Err(SubmitError::Rejected {
            status: status.as_u16(),
            message: server_message(status, &body),
        });
    }

    // some deployments answer with a bare status and no body
    match serde_json::from_str::<SubmissionResult>(&body) {
        Ok(result) => Ok(result),
        Err(_) => Ok(SubmissionResult {
            success: true,
            message: status.to_string(),
        }),
    }
}
