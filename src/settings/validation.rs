use crate::settings::types::{AnalysisSettings, ClassifySettings, ContentSettings};
use crate::SettingsError;

/// Validates the entire settings structure
pub fn validate(settings: &AnalysisSettings) -> Result<(), SettingsError> {
    validate_content_settings(&settings.content)?;
    validate_classify_settings(&settings.classify)?;
    Ok(())
}

/// Validates content extraction settings
fn validate_content_settings(settings: &ContentSettings) -> Result<(), SettingsError> {
    for suffix in &settings.image_link_suffixes {
        if !suffix.starts_with('.') || suffix.len() < 2 {
            return Err(SettingsError::Validation(format!(
                "image link suffix must start with '.' and name an extension, got '{}'",
                suffix
            )));
        }
    }

    Ok(())
}

/// Validates reference classification settings
fn validate_classify_settings(settings: &ClassifySettings) -> Result<(), SettingsError> {
    for feed_type in &settings.feed_types {
        if !feed_type.contains('/') {
            return Err(SettingsError::Validation(format!(
                "feed type must be a full content type such as 'application/rss+xml', got '{}'",
                feed_type
            )));
        }
    }

    for extension in &settings.file_download_extensions {
        if extension.is_empty() || extension.contains('.') || extension.contains('/') {
            return Err(SettingsError::Validation(format!(
                "file download extension must be a bare extension such as 'zip', got '{}'",
                extension
            )));
        }
    }

    Ok(())
}
