//! Source fetching: turn a URL or uploaded blob into decoded pixels.

use std::time::Duration;

use crate::config::FetchConfig;
use crate::error::{FetchError, ItemResult};
use crate::types::{ImageRequest, UploadedBlob};

use super::decode::{decode_bytes, DecodedImage};

/// Fetches and decodes image sources.
///
/// URL sources go through one outbound GET with a bounded whole-request
/// timeout; uploads decode in place with no I/O.
pub struct SourceFetcher {
    client: reqwest::Client,
}

impl SourceFetcher {
    /// Create a fetcher with the configured request timeout.
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch one source and return the decoded image plus its original
    /// name. `index` is the source's position within its own sublist
    /// (URLs and uploads count separately) and only feeds the generated
    /// placeholder names.
    pub async fn fetch(
        &self,
        request: &ImageRequest,
        index: usize,
    ) -> ItemResult<(DecodedImage, String)> {
        match request {
            ImageRequest::RemoteUrl(url) => self.fetch_url(url, index).await,
            ImageRequest::Upload(blob) => Self::decode_upload(blob, index),
        }
    }

    async fn fetch_url(
        &self,
        url: &str,
        index: usize,
    ) -> ItemResult<(DecodedImage, String)> {
        let network = |message: String| FetchError::Network {
            url: url.to_string(),
            message,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| network(e.to_string()))?
            .error_for_status()
            .map_err(|e| network(e.to_string()))?;
        let bytes = response.bytes().await.map_err(|e| network(e.to_string()))?;

        let name = original_name_for_url(url, index);
        let decoded = decode_bytes(&bytes, &name)?;
        Ok((decoded, name))
    }

    fn decode_upload(
        blob: &UploadedBlob,
        index: usize,
    ) -> ItemResult<(DecodedImage, String)> {
        let name = blob
            .filename
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("uploaded_image_{}.jpg", index + 1));
        let decoded = decode_bytes(&blob.bytes, &name)?;
        Ok((decoded, name))
    }
}

/// The last `/`-separated segment of the raw URL, or a generated
/// placeholder when that segment is empty (trailing slash).
fn original_name_for_url(url: &str, index: usize) -> String {
    match url.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => format!("url_image_{}.jpg", index + 1),
    }
}
