use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use solardocs_documents::DocumentError;
use solardocs_ledger::LedgerError;
use solardocs_store::StoreError;
use std::time::Duration;

const GENERIC_MESSAGE: &str = "Something went wrong!";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, fields: Vec<&'static str> },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Query did not finish within {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("Store error: {0}")]
    Store(StoreError),

    #[error("Document error: {0}")]
    Document(DocumentError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::NotFound(err.to_string()),
            StoreError::Timeout(bound) => AppError::Timeout(bound),
            other => AppError::Store(other),
        }
    }
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::Validation { ref fields } => AppError::Validation {
                fields: fields.clone(),
                message: err.to_string(),
            },
            DocumentError::InvalidField { ref field, .. } => AppError::Validation {
                fields: vec![*field],
                message: err.to_string(),
            },
            DocumentError::UnknownParty(_) => AppError::NotFound(err.to_string()),
            ref client if client.is_client_error() => AppError::BadRequest(client.to_string()),
            other => AppError::Document(other),
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        AppError::Validation { fields: err.fields(), message: err.to_string() }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, fields) = match self {
            Self::Validation { message, fields } => (StatusCode::BAD_REQUEST, "ValidationError", message, fields),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, "BadRequest", message, Vec::new()),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, "NotFound", message, Vec::new()),
            Self::Timeout(bound) => {
                log::warn!("Request timed out after {}ms", bound.as_millis());
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "Timeout",
                    format!(
                        "The query did not finish within {}ms; try a smaller page size",
                        bound.as_millis()
                    ),
                    Vec::new(),
                )
            }
            Self::Store(_) | Self::Document(_) => {
                log::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    GENERIC_MESSAGE.to_string(),
                    Vec::new(),
                )
            }
        };

        let body = if fields.is_empty() {
            json!({ "error": code, "message": message })
        } else {
            json!({ "error": code, "message": message, "fields": fields })
        };
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_statuses() {
        let not_found = AppError::from(StoreError::NotFound("abc".into()));
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let timeout = AppError::from(StoreError::Timeout(Duration::from_millis(10)));
        assert_eq!(timeout.into_response().status(), StatusCode::GATEWAY_TIMEOUT);

        let url = AppError::from(StoreError::UnsupportedUrl("mongodb://db".into()));
        assert_eq!(url.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn document_errors_split_client_and_server() {
        let missing = AppError::from(DocumentError::Validation { fields: vec!["installerContact"] });
        assert!(matches!(&missing, AppError::Validation { fields, .. } if fields == &["installerContact"]));

        let modules = AppError::from(DocumentError::InvalidField {
            field: "numberOfModules",
            reason: "too many".into(),
        });
        assert!(matches!(&modules, AppError::Validation { fields, .. } if fields == &["numberOfModules"]));

        let kind = AppError::from(DocumentError::UnknownKind("invoice".into()));
        assert_eq!(kind.into_response().status(), StatusCode::BAD_REQUEST);

        let party = AppError::from(DocumentError::UnknownParty("Nobody".into()));
        assert_eq!(party.into_response().status(), StatusCode::NOT_FOUND);

        let task = AppError::from(DocumentError::Task("panicked".into()));
        assert_eq!(task.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn ledger_errors_name_their_fields() {
        let err = AppError::from(LedgerError::MissingFields(vec!["type", "person"]));
        assert!(matches!(err, AppError::Validation { fields, .. } if fields == ["type", "person"]));
    }
}
