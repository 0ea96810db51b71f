use crate::error::Result;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use solardocs_documents::{DocumentKind, GeneratedDocument, GenerationOptions, OutputMode};

#[derive(Debug, Default, Deserialize)]
pub struct DeliveryQuery {
    #[serde(default)]
    pub download: bool,
}

impl DeliveryQuery {
    pub fn options(&self) -> GenerationOptions {
        GenerationOptions { mode: OutputMode::from_download_flag(self.download), ..GenerationOptions::default() }
    }
}

/// `POST /api/documents/:kind`: the body is the record the document is
/// generated from.
pub async fn generate(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(delivery): Query<DeliveryQuery>,
    Json(record): Json<Value>,
) -> Result<Response> {
    let kind: DocumentKind = kind.parse()?;
    log::info!("Generating {} (download: {})", kind, delivery.download);
    let document = state.composer.generate_json(kind, record, &delivery.options()).await?;
    Ok(pdf_response(document))
}

pub(crate) fn pdf_response(document: GeneratedDocument) -> Response {
    let disposition = document.content_disposition();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, document.mime.to_string()), (header::CONTENT_DISPOSITION, disposition)],
        document.bytes,
    )
        .into_response()
}
