//! Batch orchestration: drives fetch → resize → name over a full request.

use crate::config::Config;
use crate::error::{BatchError, FetchError};
use crate::types::{ImageRequest, ProcessedItem, UploadedBlob};

use super::fetch::SourceFetcher;
use super::naming::output_name;
use super::resize::{resize, target_height};

/// Drives the full pipeline for one batch request.
///
/// Items are processed strictly one at a time: every URL source in listed
/// order, then every upload in listed order. A failure at any stage drops
/// that item and the batch continues.
pub struct BatchProcessor {
    fetcher: SourceFetcher,
}

impl BatchProcessor {
    /// Create a processor with the given configuration.
    pub fn new(config: &Config) -> crate::error::Result<Self> {
        Ok(Self {
            fetcher: SourceFetcher::new(&config.fetch)?,
        })
    }

    /// Run the batch. Returns the ordered successes, or a `BatchError`
    /// when validation fails up front or every item fails.
    pub async fn run(
        &self,
        urls: &[String],
        uploads: Vec<UploadedBlob>,
        raw_width: &str,
    ) -> Result<Vec<ProcessedItem>, BatchError> {
        // Uploads without a declared filename are unused form slots
        let uploads: Vec<UploadedBlob> = uploads
            .into_iter()
            .filter(UploadedBlob::has_filename)
            .collect();

        // Input presence is checked before the width parses
        if urls.is_empty() && uploads.is_empty() {
            return Err(BatchError::NoInput);
        }
        let target_width = parse_width(raw_width)?;

        tracing::info!(
            urls = urls.len(),
            uploads = uploads.len(),
            target_width,
            "Processing batch"
        );

        let mut items = Vec::new();

        for (index, url) in urls.iter().enumerate() {
            let request = ImageRequest::RemoteUrl(url.clone());
            match self.process_item(&request, index, target_width).await {
                Ok(item) => items.push(item),
                Err(e) => tracing::warn!("Skipping URL source: {}", e),
            }
        }

        for (index, blob) in uploads.into_iter().enumerate() {
            let request = ImageRequest::Upload(blob);
            match self.process_item(&request, index, target_width).await {
                Ok(item) => items.push(item),
                Err(e) => tracing::warn!("Skipping uploaded source: {}", e),
            }
        }

        if items.is_empty() {
            return Err(BatchError::AllFailed);
        }

        tracing::debug!(succeeded = items.len(), "Batch complete");
        Ok(items)
    }

    /// Run one source through fetch → resize → name.
    async fn process_item(
        &self,
        request: &ImageRequest,
        index: usize,
        target_width: u32,
    ) -> Result<ProcessedItem, FetchError> {
        let (decoded, original_name) = self.fetcher.fetch(request, index).await?;
        if target_height(decoded.width, decoded.height, target_width) == 0 {
            return Err(FetchError::Decode {
                name: original_name,
                message: format!(
                    "aspect ratio {}x{} collapses to zero height at width {}",
                    decoded.width, decoded.height, target_width
                ),
            });
        }

        let resized = resize(&decoded, target_width);
        let filename = output_name(&original_name, resized.width, resized.height);
        tracing::debug!(%filename, "Processed {}x{}", resized.width, resized.height);

        Ok(ProcessedItem {
            image: resized.image,
            filename,
        })
    }
}

/// Derive the URL list from a newline-delimited text block: trim each
/// line, discard empties, preserve order.
pub fn parse_url_lines(block: &str) -> Vec<String> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the requested width as a positive integer.
pub fn parse_width(raw: &str) -> Result<u32, BatchError> {
    match raw.trim().parse::<u32>() {
        Ok(width) if width > 0 => Ok(width),
        _ => Err(BatchError::InvalidWidth(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat};
    use std::io::Cursor;

    fn processor() -> BatchProcessor {
        BatchProcessor::new(&Config::default()).unwrap()
    }

    fn png_upload(name: &str, width: u32, height: u32) -> UploadedBlob {
        let img = DynamicImage::new_rgb8(width, height);
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();
        UploadedBlob::new(buffer.into_inner(), name)
    }

    #[test]
    fn test_parse_url_lines() {
        let block = "https://a.example/x.jpg\n\n  https://b.example/y.png  \n   \n";
        assert_eq!(
            parse_url_lines(block),
            vec![
                "https://a.example/x.jpg".to_string(),
                "https://b.example/y.png".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_url_lines_all_blank() {
        assert!(parse_url_lines("\n   \n\t\n").is_empty());
    }

    #[test]
    fn test_parse_width() {
        assert_eq!(parse_width("300").unwrap(), 300);
        assert_eq!(parse_width("  42  ").unwrap(), 42);
        assert!(matches!(
            parse_width("abc"),
            Err(BatchError::InvalidWidth(_))
        ));
        assert!(matches!(parse_width("0"), Err(BatchError::InvalidWidth(_))));
        assert!(matches!(
            parse_width("-5"),
            Err(BatchError::InvalidWidth(_))
        ));
        assert!(matches!(
            parse_width("12.5"),
            Err(BatchError::InvalidWidth(_))
        ));
    }

    #[tokio::test]
    async fn test_run_no_input() {
        let result = processor().run(&[], vec![], "300").await;
        assert!(matches!(result, Err(BatchError::NoInput)));
    }

    #[tokio::test]
    async fn test_no_input_wins_over_invalid_width() {
        // Presence is validated before the width parses
        let result = processor().run(&[], vec![], "abc").await;
        assert!(matches!(result, Err(BatchError::NoInput)));
    }

    #[tokio::test]
    async fn test_unnamed_uploads_are_form_slots() {
        let slot = UploadedBlob {
            bytes: vec![1, 2, 3],
            filename: None,
        };
        let result = processor().run(&[], vec![slot], "300").await;
        assert!(matches!(result, Err(BatchError::NoInput)));
    }

    #[tokio::test]
    async fn test_run_invalid_width() {
        let uploads = vec![png_upload("a.png", 10, 10)];
        let result = processor().run(&[], uploads, "zero").await;
        assert!(matches!(result, Err(BatchError::InvalidWidth(_))));
    }

    #[tokio::test]
    async fn test_run_preserves_upload_order() {
        let uploads = vec![
            png_upload("first.png", 100, 50),
            png_upload("second.png", 200, 100),
            png_upload("third.png", 40, 80),
        ];
        let items = processor().run(&[], uploads, "20").await.unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].filename, "first_20x10.png");
        assert_eq!(items[1].filename, "second_20x10.png");
        assert_eq!(items[2].filename, "third_20x40.png");
    }

    #[tokio::test]
    async fn test_partial_failure_is_isolated() {
        let uploads = vec![
            png_upload("good.png", 100, 100),
            UploadedBlob::new(b"corrupt bytes".to_vec(), "bad.png"),
            png_upload("also_good.png", 50, 100),
        ];
        let items = processor().run(&[], uploads, "10").await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].filename, "good_10x10.png");
        assert_eq!(items[1].filename, "also_good_10x20.png");
    }

    #[tokio::test]
    async fn test_all_failed() {
        let uploads = vec![
            UploadedBlob::new(b"junk one".to_vec(), "a.jpg"),
            UploadedBlob::new(b"junk two".to_vec(), "b.jpg"),
        ];
        let result = processor().run(&[], uploads, "100").await;
        assert!(matches!(result, Err(BatchError::AllFailed)));
    }

    #[tokio::test]
    async fn test_unreachable_url_is_skipped() {
        // Connection refused counts as a per-item network failure
        let urls = vec!["http://127.0.0.1:1/nope.jpg".to_string()];
        let uploads = vec![png_upload("fine.png", 30, 30)];
        let items = processor().run(&urls, uploads, "15").await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].filename, "fine_15x15.png");
    }

    #[tokio::test]
    async fn test_degenerate_aspect_ratio_skipped() {
        let uploads = vec![
            png_upload("sliver.png", 5000, 1),
            png_upload("ok.png", 100, 100),
        ];
        let items = processor().run(&[], uploads, "10").await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].filename, "ok_10x10.png");
    }
}
