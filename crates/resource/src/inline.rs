use crate::error::ResourceError;
use crate::provider::{ResourceProvider, SharedResourceData};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::sync::Arc;

/// A blob decoded from `data:<mime>;base64,<payload>` or bare base64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl InlineImage {
    pub fn parse(blob: &str) -> Result<Self, ResourceError> {
        let blob = blob.trim();
        let (mime, payload) = match blob.strip_prefix("data:") {
            Some(rest) => {
                let (header, payload) = rest
                    .split_once(',')
                    .ok_or_else(|| ResourceError::InvalidDataUrl("missing ',' separator".into()))?;
                let mime = header
                    .strip_suffix(";base64")
                    .ok_or_else(|| ResourceError::InvalidDataUrl(format!("'{header}' is not base64 encoded")))?;
                let mime = (!mime.is_empty()).then(|| mime.to_string());
                (mime, payload)
            }
            None => (None, blob),
        };

        let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(ResourceError::InvalidDataUrl("empty payload".into()));
        }
        let bytes = STANDARD.decode(compact.as_bytes())?;
        Ok(Self { mime, bytes })
    }

    pub fn is_data_url(source: &str) -> bool {
        source.trim_start().starts_with("data:")
    }
}

/// Resolves inline blobs only.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineResourceProvider;

impl ResourceProvider for InlineResourceProvider {
    fn load(&self, source: &str) -> Result<SharedResourceData, ResourceError> {
        InlineImage::parse(source).map(|image| Arc::new(image.bytes))
    }

    fn name(&self) -> &'static str {
        "InlineResourceProvider"
    }
}
