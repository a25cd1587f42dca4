//! Deliverable packaging: one image becomes a bare JPEG, several become a
//! zip archive assembled in memory.

use std::io::{Cursor, Write};

use image::codecs::jpeg::JpegEncoder;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::EncodingConfig;
use crate::error::PackageError;
use crate::types::{Deliverable, ProcessedItem};

/// Fixed download name for multi-image responses.
pub const ARCHIVE_FILENAME: &str = "resized_images.zip";

/// Packages a batch's successes into the response payload.
///
/// All output is JPEG at the configured quality, whatever the source
/// format was; the computed filename keeps the source extension. Buffers
/// live only for the duration of one call and drop with it.
pub struct Packager {
    quality: u8,
}

impl Packager {
    /// Create a packager with the given encoding configuration.
    pub fn new(config: &EncodingConfig) -> Self {
        Self {
            quality: config.jpeg_quality,
        }
    }

    /// Package the items. Callers guarantee at least one item; a single
    /// item becomes a direct image deliverable, anything more an archive.
    pub fn package(&self, items: &[ProcessedItem]) -> Result<Deliverable, PackageError> {
        match items {
            [item] => self.package_single(item),
            _ => self.package_archive(items),
        }
    }

    fn package_single(&self, item: &ProcessedItem) -> Result<Deliverable, PackageError> {
        let bytes = self.encode_jpeg(item)?;
        Ok(Deliverable {
            filename: item.filename.clone(),
            content_type: "image/jpeg",
            bytes,
        })
    }

    fn package_archive(&self, items: &[ProcessedItem]) -> Result<Deliverable, PackageError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        // Flat entries in item order; duplicate names are not deduplicated
        for item in items {
            let encoded = self.encode_jpeg(item)?;
            writer.start_file(item.filename.as_str(), options)?;
            writer.write_all(&encoded)?;
        }

        let cursor = writer.finish()?;
        Ok(Deliverable {
            filename: ARCHIVE_FILENAME.to_string(),
            content_type: "application/zip",
            bytes: cursor.into_inner(),
        })
    }

    fn encode_jpeg(&self, item: &ProcessedItem) -> Result<Vec<u8>, PackageError> {
        let mut buffer = Cursor::new(Vec::new());
        let encoder = JpegEncoder::new_with_quality(&mut buffer, self.quality);
        item.image
            .write_with_encoder(encoder)
            .map_err(|e| PackageError::Encode {
                name: item.filename.clone(),
                message: e.to_string(),
            })?;
        Ok(buffer.into_inner())
    }
}
