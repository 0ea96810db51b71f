#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use lopdf::Document as LopdfDocument;
use serde_json::Value;
use solardocs::{router, AppState};
use solardocs_documents::{GenerationOptions, OutputMode};
use tower::util::ServiceExt;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of one 1-based page.
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Preview options dated 5 March 2024.
pub fn options() -> GenerationOptions {
    GenerationOptions::new(OutputMode::Preview, fixtures::today())
}

pub fn app(state: AppState) -> Router {
    router(state, &[])
}

/// Sends one request and returns the status with the body parsed as JSON
/// (`Value::Null` for an empty or non-JSON body).
pub async fn send_json(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, _, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, bytes.to_vec())
}
