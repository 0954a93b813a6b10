#![allow(dead_code)]

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    http::{HeaderMap, StatusCode, header},
    routing::post,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tracescan::remote::ApiClient;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<RecordedRequest>>>);

impl Recorder {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

/// Serves a single POST endpoint answering every request with `status` and
/// `body`, and returns the base URL together with a recorder of the requests.
pub async fn mock_endpoint(path: &str, status: StatusCode, body: &'static str) -> (String, Recorder) {
    let recorder = Recorder::default();
    let seen = recorder.clone();

    let app = Router::new().route(
        path,
        post(move |headers: HeaderMap, payload: String| {
            let seen = seen.clone();
            async move {
                seen.0.lock().unwrap().push(RecordedRequest {
                    authorization: headers
                        .get(header::AUTHORIZATION)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string),
                    body: serde_json::from_str(&payload).unwrap_or(Value::Null),
                });
                (status, body)
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), recorder)
}

/// Client for a mock server; bypasses any proxy configured in the environment.
pub fn api_client(url: &str) -> ApiClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    ApiClient::new(url).with_http_client(http)
}

/// Base URL nothing listens on.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

/// Fresh, empty directory under the system temp directory.
pub fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "tracescan-test-{}-{}",
        std::process::id(),
        name
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
