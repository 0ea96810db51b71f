use crate::decode::{decode_image, DecodedImage};
use crate::error::ResourceError;
use crate::provider::ResourceProvider;
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;

/// Short, log-safe description of an image source.
///
/// Data URLs are reduced to their media type and length so that megabytes
/// of base64 never end up in the log.
pub fn describe_source(source: &str) -> String {
    match source.trim_start().strip_prefix("data:") {
        Some(rest) => {
            let mime = rest.split([';', ',']).next().unwrap_or_default();
            format!("inline {} ({} chars)", if mime.is_empty() { "blob" } else { mime }, source.len())
        }
        None if source.len() > 64 => format!("blob ({} chars)", source.len()),
        None => source.to_string(),
    }
}

/// Loads and decodes every source concurrently.
///
/// The result is aligned with `sources`. Each distinct source is decoded
/// once on the blocking pool; identical sources share the decoded image. A
/// source that fails to load or decode yields `None` and a warning.
pub async fn load_images(
    provider: Arc<dyn ResourceProvider>,
    sources: &[String],
) -> Vec<Option<Arc<DecodedImage>>> {
    let mut unique: Vec<&str> = Vec::new();
    let mut index_of: HashMap<&str, usize> = HashMap::new();
    let positions: Vec<usize> = sources
        .iter()
        .map(|source| {
            *index_of.entry(source.as_str()).or_insert_with(|| {
                unique.push(source.as_str());
                unique.len() - 1
            })
        })
        .collect();

    let tasks = unique.iter().map(|source| {
        let provider = Arc::clone(&provider);
        let source = source.to_string();
        async move {
            let label = describe_source(&source);
            let outcome = tokio::task::spawn_blocking(move || load_one(provider.as_ref(), &source)).await;
            match outcome {
                Ok(Ok(image)) => {
                    log::debug!("Decoded {} ({}x{})", label, image.width, image.height);
                    Some(Arc::new(image))
                }
                Ok(Err(e)) => {
                    log::warn!("Omitting image {}: {}", label, e);
                    None
                }
                Err(e) => {
                    log::warn!("Image task for {} did not complete: {}", label, e);
                    None
                }
            }
        }
    });
    let decoded = join_all(tasks).await;

    positions.into_iter().map(|i| decoded[i].clone()).collect()
}

fn load_one(provider: &dyn ResourceProvider, source: &str) -> Result<DecodedImage, ResourceError> {
    let bytes = provider.load(source)?;
    decode_image(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::tests::png_bytes;
    use crate::InlineResourceProvider;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    fn data_url(bytes: &[u8]) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(bytes))
    }

    #[tokio::test]
    async fn failures_are_omitted_not_fatal() {
        let sources = vec![
            data_url(&png_bytes(5, 5, 255)),
            "data:image/png;base64,!!!!".to_string(),
            data_url(b"plain text"),
        ];
        let images = load_images(Arc::new(InlineResourceProvider), &sources).await;
        assert_eq!(images.len(), 3);
        assert!(images[0].is_some());
        assert!(images[1].is_none());
        assert!(images[2].is_none());
    }

    #[tokio::test]
    async fn duplicate_sources_share_one_decode() {
        let blob = data_url(&png_bytes(2, 2, 255));
        let images = load_images(Arc::new(InlineResourceProvider), &[blob.clone(), blob]).await;
        let (a, b) = (images[0].as_ref().unwrap(), images[1].as_ref().unwrap());
        assert!(Arc::ptr_eq(a, b));
    }

    #[tokio::test]
    async fn empty_input_is_empty_output() {
        assert!(load_images(Arc::new(InlineResourceProvider), &[]).await.is_empty());
    }

    #[test]
    fn descriptions_hide_payloads() {
        let blob = data_url(&[0u8; 300]);
        let description = describe_source(&blob);
        assert!(description.starts_with("inline image/png"));
        assert!(!description.contains("AAAA"));
        assert_eq!(describe_source("stamp.png"), "stamp.png");
    }
}
