use serde::Deserialize;

use crate::classify::{MimeClassifier, DEFAULT_FEED_TYPES};

/// Path extensions that mark a linked URL as a direct file download
pub const DEFAULT_FILE_DOWNLOAD_EXTENSIONS: &[&str] = &[
    "zip", "dmg", "exe", "pdf", "gz", "tar", "doc", "docx", "xls", "wav", "aiff", "mp3", "mp4",
    "mov", "avi", "wmv",
];

/// Raw href suffixes that route an anchor into the image collections
pub const DEFAULT_IMAGE_LINK_SUFFIXES: &[&str] = &[".jpg", ".jpeg", ".png", ".gif"];

/// Main settings structure for page analysis
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    #[serde(default)]
    pub content: ContentSettings,
    #[serde(default)]
    pub classify: ClassifySettings,
}

/// Content extraction settings
#[derive(Debug, Clone, Deserialize)]
pub struct ContentSettings {
    /// Route anchor links whose raw href ends in an image suffix into the
    /// image collections instead of the link collections
    #[serde(
        rename = "separate-links-to-image-types",
        default = "default_separate_links_to_image_types"
    )]
    pub separate_links_to_image_types: bool,

    /// Suffixes matched literally against the raw href string
    #[serde(rename = "image-link-suffixes", default = "default_image_link_suffixes")]
    pub image_link_suffixes: Vec<String>,
}

/// Reference classification settings
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifySettings {
    /// Content types treated as syndication feeds, matched exactly
    #[serde(rename = "feed-types", default = "default_feed_types")]
    pub feed_types: Vec<String>,

    /// Lowercase path extensions that mark a link as a file download
    #[serde(
        rename = "file-download-extensions",
        default = "default_file_download_extensions"
    )]
    pub file_download_extensions: Vec<String>,
}

fn default_separate_links_to_image_types() -> bool {
    true
}

fn default_image_link_suffixes() -> Vec<String> {
    DEFAULT_IMAGE_LINK_SUFFIXES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_feed_types() -> Vec<String> {
    DEFAULT_FEED_TYPES.iter().map(|s| s.to_string()).collect()
}

fn default_file_download_extensions() -> Vec<String> {
    DEFAULT_FILE_DOWNLOAD_EXTENSIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            content: ContentSettings::default(),
            classify: ClassifySettings::default(),
        }
    }
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            separate_links_to_image_types: default_separate_links_to_image_types(),
            image_link_suffixes: default_image_link_suffixes(),
        }
    }
}

impl Default for ClassifySettings {
    fn default() -> Self {
        Self {
            feed_types: default_feed_types(),
            file_download_extensions: default_file_download_extensions(),
        }
    }
}

impl AnalysisSettings {
    /// Builds the MIME classifier configured by these settings
    pub fn mime_classifier(&self) -> MimeClassifier {
        MimeClassifier::new(self.classify.feed_types.iter().cloned())
    }
}
