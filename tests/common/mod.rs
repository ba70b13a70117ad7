use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;

use survey_intake::clock::{Clock, SystemClock};
use survey_intake::config::Config;
use survey_intake::models::StoredSurveyRecord;

/// A running test server instance appending to a private temp directory.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub log_path: PathBuf,
    _dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit a JSON survey, return (body, status).
    pub async fn submit(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/v1/survey"))
            .json(data)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit a raw body with the given content type, return (body, status).
    pub async fn submit_raw(&self, content_type: &str, body: &'static str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/v1/survey"))
            .header("content-type", content_type)
            .body(body)
            .send()
            .await
            .expect("raw submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Raw lines currently in the survey log. A missing file counts as empty.
    pub fn log_lines(&self) -> Vec<String> {
        match std::fs::read_to_string(&self.log_path) {
            Ok(contents) => contents.lines().map(|l| l.to_string()).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Parse every log line into a stored record.
    pub fn records(&self) -> Vec<StoredSurveyRecord> {
        self.log_lines()
            .iter()
            .map(|line| serde_json::from_str(line).expect("log line is not a stored record"))
            .collect()
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_clock(Arc::new(SystemClock)).await
}

/// Spawn a test app on a random port with the given clock.
pub async fn spawn_app_with_clock(clock: Arc<dyn Clock>) -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let log_path = dir.path().join("data").join("survey.ndjson");

    let config = Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        log_path: log_path.clone(),
        max_body_size: 16 * 1024,
        log_level: "warn".to_string(),
    };

    let (app, state) = survey_intake::build_app_with_clock(config, clock);
    state
        .log
        .ensure_parent()
        .await
        .expect("Failed to create log directory");

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
        log_path,
        _dir: dir,
    }
}
