//! Resource classification for fetched pages
//!
//! This module maps content-type strings to semantic content kinds and
//! buckets HTTP status codes into response classes.

mod mime;
mod response;

// Re-export classification types
pub use mime::{BaseContentType, MimeClassifier, MimeType, DEFAULT_FEED_TYPES};
pub use response::ResponseClass;
