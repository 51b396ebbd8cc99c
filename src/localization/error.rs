//! Errors raised while decoding, merging and registering localizations.

use std::path::PathBuf;

use thiserror::Error;

/// A single structural problem found while validating a `LocalizationSet`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Localization entry #{index}: {message}")]
pub struct ValidationIssue {
    /// Position of the offending entry in the set
    pub index: usize,
    /// What is wrong with it
    pub message: String,
}

impl ValidationIssue {
    /// Issue for the entry at `index`.
    #[must_use]
    pub fn new(index: usize, message: impl Into<String>) -> Self {
        Self { index, message: message.into() }
    }
}

/// Everything that can go wrong while loading a localization.
#[derive(Error, Debug)]
pub enum LocalizationError {
    /// The asset bytes contain no `{`, so there is no JSON to read.
    #[error("Asset has no JSON content")]
    NoJsonContent,

    /// Either document is not valid JSON.
    #[error("Failed to parse localization JSON{}: {source}", display_path(.path.as_ref()))]
    Parse {
        /// File the document was read from, `None` for in-memory payloads
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// The document root is not a JSON object.
    #[error("Localization document must be a JSON object")]
    NotAnObject,

    /// A key maps to something other than an object of strings.
    #[error("Localization key '{key}' must map language names to strings: {source}")]
    Shape {
        /// Offending key
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A set was refused by the registry.
    #[error("Localization set failed validation:\n{}", format_issues(.0))]
    Validation(Vec<ValidationIssue>),

    /// The table could not be turned back into JSON.
    #[error("Failed to serialize localization table: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Reading or writing the table failed.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        /// Table path
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LocalizationError {
    /// Whether the caller's loading loop may skip the asset and continue.
    #[must_use]
    pub const fn is_content_error(&self) -> bool {
        matches!(self, Self::NoJsonContent)
    }
}

/// `" in '<path>'"` when the path is known.
fn display_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(String::new, |p| format!(" in '{}'", p.display()))
}

/// One bulleted line per issue.
fn format_issues(issues: &[ValidationIssue]) -> String {
    issues.iter().map(|issue| format!("  - {issue}")).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[googletest::test]
    fn validation_error_lists_every_issue() {
        let error = LocalizationError::Validation(vec![
            ValidationIssue::new(0, "key is empty"),
            ValidationIssue::new(3, "duplicate key 'greeting'"),
        ]);

        let message = error.to_string();

        expect_that!(message.as_str(), contains_substring("#0: key is empty"));
        expect_that!(message.as_str(), contains_substring("#3: duplicate key 'greeting'"));
    }

    #[googletest::test]
    fn parse_error_mentions_path_when_known() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error =
            LocalizationError::Parse { path: Some(PathBuf::from("Mods/Localization.json")), source };

        expect_that!(error.to_string().as_str(), contains_substring("in 'Mods/Localization.json'"));
        expect_that!(error.is_content_error(), eq(false));
        expect_that!(LocalizationError::NoJsonContent.is_content_error(), eq(true));
    }

    #[googletest::test]
    fn serialize_error_is_not_a_content_error() {
        let source = <serde_json::Error as serde::ser::Error>::custom("key must be a string");
        let error = LocalizationError::Serialize(source);

        expect_that!(
            error.to_string().as_str(),
            contains_substring("Failed to serialize localization table: key must be a string")
        );
        expect_that!(error.is_content_error(), eq(false));
    }
}
