use std::path::Path;

use crate::settings::types::AnalysisSettings;
use crate::settings::validation::validate;
use crate::SettingsError;

/// Loads and parses an analysis settings file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML settings file
///
/// # Returns
///
/// * `Ok(AnalysisSettings)` - Successfully loaded and validated settings
/// * `Err(SettingsError)` - Failed to load, parse, or validate the settings
pub fn load_settings(path: &Path) -> Result<AnalysisSettings, SettingsError> {
    // Read the settings file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let settings: AnalysisSettings = toml::from_str(&content)?;

    // Validate the settings
    validate(&settings)?;

    Ok(settings)
}
