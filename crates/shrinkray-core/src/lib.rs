//! Shrinkray Core - batch image resizing library.
//!
//! Shrinkray takes a batch of image sources (remote URLs and direct
//! uploads), resizes each to a caller-specified width preserving aspect
//! ratio, and packages the results as a single JPEG or a zip archive.
//!
//! # Architecture
//!
//! A thin orchestration layer over a sequential pipeline:
//!
//! ```text
//! Sources → Fetch → Decode → Resize → Name → Package → Deliverable
//! ```
//!
//! Per-item failures are isolated: a source that cannot be fetched or
//! decoded is dropped and the rest of the batch proceeds.
//!
//! # Usage
//!
//! ```rust,ignore
//! use shrinkray_core::{BatchProcessor, Config, Packager, parse_url_lines};
//!
//! let config = Config::load()?;
//! let processor = BatchProcessor::new(&config)?;
//! let packager = Packager::new(&config.encoding);
//!
//! let urls = parse_url_lines("https://example.com/a.jpg\n");
//! let items = processor.run(&urls, uploads, "400").await?;
//! let deliverable = packager.package(&items)?;
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod package;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{
    BatchError, ConfigError, FetchError, ItemResult, PackageError, Result, ShrinkrayError,
};
pub use package::{Packager, ARCHIVE_FILENAME};
pub use pipeline::{parse_url_lines, parse_width, BatchProcessor, SourceFetcher};
pub use types::{Deliverable, ImageRequest, ProcessedItem, UploadedBlob};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
