//! Analysis settings for the page engine
//!
//! The constant sets the engine classifies against (feed content types,
//! image link suffixes, file-download extensions) live here as explicit
//! configuration, loadable from a TOML file and overridable in tests.
//!
//! # Example
//!
//! ```no_run
//! use pagelens::settings::load_settings;
//! use std::path::Path;
//!
//! let settings = load_settings(Path::new("analysis.toml")).unwrap();
//! assert!(settings.content.separate_links_to_image_types);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{AnalysisSettings, ClassifySettings, ContentSettings};

// Re-export parser functions
pub use parser::load_settings;
