//! HTTP routes.

pub mod documents;
pub mod expenses;
pub mod records;

use crate::state::AppState;
use axum::{
    extract::Request,
    http::{HeaderValue, Method},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use solardocs_documents::{InstallationRecord, WorkCompletionRecord};
use std::time::Instant;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const ENDPOINTS: [&str; 15] = [
    "GET    /api/work-completion",
    "POST   /api/work-completion",
    "GET    /api/work-completion/:id",
    "DELETE /api/work-completion/:id",
    "GET    /api/multi-purpose",
    "POST   /api/multi-purpose",
    "GET    /api/multi-purpose/:id",
    "DELETE /api/multi-purpose/:id",
    "POST   /api/documents/:kind",
    "GET    /api/expenses",
    "POST   /api/expenses",
    "DELETE /api/expenses/:id",
    "GET    /api/expenses/summary",
    "GET    /api/expenses/parties/:name/report",
    "GET    /api/expenses/report",
];

/// Builds the application router. An empty origin list allows any origin.
pub fn router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(banner))
        .route(
            "/api/work-completion",
            get(records::list::<WorkCompletionRecord>).post(records::create::<WorkCompletionRecord>),
        )
        .route(
            "/api/work-completion/:id",
            get(records::get::<WorkCompletionRecord>).delete(records::delete::<WorkCompletionRecord>),
        )
        .route(
            "/api/multi-purpose",
            get(records::list::<InstallationRecord>).post(records::create::<InstallationRecord>),
        )
        .route(
            "/api/multi-purpose/:id",
            get(records::get::<InstallationRecord>).delete(records::delete::<InstallationRecord>),
        )
        .route("/api/documents/:kind", post(documents::generate))
        .route("/api/expenses", get(expenses::list).post(expenses::create))
        .route("/api/expenses/summary", get(expenses::summary))
        .route("/api/expenses/report", get(expenses::ledger_report))
        .route("/api/expenses/parties/:name/report", get(expenses::party_report))
        .route("/api/expenses/:id", axum::routing::delete(expenses::delete))
        .layer(middleware::from_fn(log_requests))
        .layer(cors(allowed_origins))
        .with_state(state)
}

fn cors(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() { AllowOrigin::from(Any) } else { AllowOrigin::list(origins) };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();
    let response = next.run(request).await;
    log::info!(
        "{} {} -> {} in {}ms",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}

async fn banner() -> Json<Value> {
    Json(json!({
        "service": "solardocs",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ENDPOINTS,
    }))
}
