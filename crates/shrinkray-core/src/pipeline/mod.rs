//! The resizing pipeline.
//!
//! Stages, in the order a batch item flows through them:
//! - **fetch**: turn a URL or uploaded blob into raw bytes
//! - **decode**: sniff the format and decode to pixels
//! - **resize**: aspect-preserving width resize
//! - **naming**: derive the deterministic output filename
//! - **batch**: orchestrate all of the above with per-item isolation

pub mod batch;
pub mod decode;
pub mod fetch;
pub mod naming;
pub mod resize;

// Re-exports for convenient access
pub use batch::{parse_url_lines, parse_width, BatchProcessor};
pub use decode::{decode_bytes, DecodedImage};
pub use fetch::SourceFetcher;
pub use naming::output_name;
pub use resize::{resize, target_height};
