//! Pagelens: page content analysis for site crawling
//!
//! Given the raw bytes of a fetched document plus the URL it was fetched
//! from, this crate classifies the resource, locates the body boundary,
//! and extracts every outbound reference (links, images, feeds, head
//! metadata) deduplicated with stable ordering. Fetching, persistence, and
//! presentation belong to the surrounding crawler, not to this crate.

pub mod classify;
pub mod content;
pub mod page;
pub mod settings;
pub mod url;

use thiserror::Error;

/// Errors from loading analysis settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = std::result::Result<T, SettingsError>;

// Re-export commonly used types
pub use classify::{BaseContentType, MimeClassifier, MimeType, ResponseClass};
pub use content::{AttributeName, PageContentInfo, PageElement};
pub use page::{PageAnalyzer, PageInfo, RequestRedirectionInfo};
pub use settings::{load_settings, AnalysisSettings};
pub use url::UniqueUrlSet;
