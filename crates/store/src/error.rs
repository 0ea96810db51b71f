use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No record with id '{0}'")]
    NotFound(String),

    #[error("Query did not finish within {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported store URL '{0}', expected memory:// or file:///<dir>")]
    UnsupportedUrl(String),
}
