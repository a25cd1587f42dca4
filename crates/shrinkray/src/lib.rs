//! Shrinkray HTTP service.
//!
//! The thin web layer over `shrinkray-core`: routing, form extraction,
//! error-to-response mapping, and the landing page. Exposed as a library
//! so integration tests can assemble the same app the binary serves.

pub mod error;
pub mod form;
pub mod handlers;
pub mod logging;
pub mod page;
pub mod server;

pub use error::ApiError;
pub use server::AppState;
