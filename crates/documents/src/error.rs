use solardocs_render_lopdf::RenderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    /// Required record fields were empty; no bytes were produced.
    #[error("Missing required fields: {}", .fields.join(", "))]
    Validation { fields: Vec<&'static str> },

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error("Unknown document kind: '{0}'")]
    UnknownKind(String),

    #[error("'{0}' is generated from a work completion record")]
    RecordMismatch(&'static str),

    #[error("No transactions recorded for party '{0}'")]
    UnknownParty(String),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Generation task failed: {0}")]
    Task(String),
}

impl DocumentError {
    /// True for errors caused by the caller's input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DocumentError::Validation { .. }
                | DocumentError::InvalidField { .. }
                | DocumentError::InvalidRecord(_)
                | DocumentError::UnknownKind(_)
                | DocumentError::RecordMismatch(_)
        )
    }
}
