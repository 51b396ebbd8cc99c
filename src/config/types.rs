use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// One invalid settings field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "includePatterns[0]")
    pub field_path: String,
    /// What is wrong and how to fix it
    pub message: String,
}

impl ValidationError {
    /// Error for the field at `field_path`.
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Failure to read or accept the settings file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The settings parsed but are not usable.
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    Invalid(Vec<ValidationError>),

    /// The settings file exists but could not be read.
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        /// Settings file path
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid settings JSON.
    #[error("Failed to parse '{}': {source}", .path.display())]
    Parse {
        /// Settings file path
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Numbered list, one error per line.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Which files under the asset root count as localization assets.
///
/// The shared table itself always lives at `<mods>/Localization.json`; it is
/// not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Globs (relative to the asset root) an asset must match.
    pub include_patterns: Vec<String>,
    /// Globs that remove an asset even if it was included.
    pub exclude_patterns: Vec<String>,
}

impl Settings {
    /// # Errors
    /// - No include pattern
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "includePatterns",
                "At least one pattern is required. Example: [\"**/Localization/*.json\"]",
            ));
        }

        let patterns =
            [("includePatterns", &self.include_patterns), ("excludePatterns", &self.exclude_patterns)];
        for (field, list) in patterns {
            for (index, pattern) in list.iter().enumerate() {
                if let Err(e) = globset::Glob::new(pattern) {
                    errors.push(ValidationError::new(
                        format!("{field}[{index}]"),
                        format!("Invalid glob pattern '{pattern}': {e}"),
                    ));
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self { include_patterns: vec!["**/*".to_string()], exclude_patterns: vec![] }
    }
}
