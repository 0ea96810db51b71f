use thiserror::Error;

/// Error type for resolving and decoding image resources.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Malformed data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Image could not be decoded: {0}")]
    Decode(String),
}

impl From<image::ImageError> for ResourceError {
    fn from(err: image::ImageError) -> Self {
        ResourceError::Decode(err.to_string())
    }
}
