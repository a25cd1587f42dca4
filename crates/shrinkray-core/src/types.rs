//! Core data types for the Shrinkray resizing pipeline.

use image::DynamicImage;

/// One requested image source, as supplied by the caller.
///
/// A request is immutable once constructed and lives only for the duration
/// of one batch run.
#[derive(Debug, Clone)]
pub enum ImageRequest {
    /// An image to download from a remote URL
    RemoteUrl(String),

    /// An image uploaded directly with the request
    Upload(UploadedBlob),
}

/// Raw uploaded file contents plus the filename the client declared.
#[derive(Debug, Clone, Default)]
pub struct UploadedBlob {
    /// The uploaded bytes, still in their source encoding
    pub bytes: Vec<u8>,

    /// Client-declared filename, if any. Entries without one are treated
    /// as unused form slots and discarded before processing.
    pub filename: Option<String>,
}

impl UploadedBlob {
    /// Create a blob with a declared filename.
    pub fn new(bytes: Vec<u8>, filename: impl Into<String>) -> Self {
        Self {
            bytes,
            filename: Some(filename.into()),
        }
    }

    /// True when the client declared a non-empty filename.
    pub fn has_filename(&self) -> bool {
        self.filename.as_deref().is_some_and(|name| !name.is_empty())
    }
}

/// A successfully resized image together with its output filename.
///
/// Items accumulate in request order: all URL sources first, then all
/// uploads, each sublist in the order it was supplied.
pub struct ProcessedItem {
    /// The resized pixel data
    pub image: DynamicImage,

    /// Deterministic output filename, `<base>_<width>x<height><ext>`
    pub filename: String,
}

/// The final response payload: either one encoded image or an archive.
#[derive(Debug)]
pub struct Deliverable {
    /// Download filename for the attachment header
    pub filename: String,

    /// MIME type marker (`image/jpeg` or `application/zip`)
    pub content_type: &'static str,

    /// Fully materialized payload bytes
    pub bytes: Vec<u8>,
}
