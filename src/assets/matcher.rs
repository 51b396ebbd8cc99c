//! Glob filter deciding which files under the asset root are loaded.

use std::path::Path;

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::types::AssetError;
use crate::config::Settings;

/// Matches asset paths (relative to the asset root) against the configured
/// include/exclude patterns.
#[derive(Debug, Clone)]
pub struct AssetMatcher {
    /// `includePatterns`
    include_set: GlobSet,
    /// `excludePatterns`
    exclude_set: GlobSet,
}

impl AssetMatcher {
    /// Compiles the patterns in `settings`.
    ///
    /// # Errors
    /// A pattern is not a valid glob.
    pub fn new(settings: &Settings) -> Result<Self, AssetError> {
        Ok(Self {
            include_set: Self::build_glob_set(&settings.include_patterns)?,
            exclude_set: Self::build_glob_set(&settings.exclude_patterns)?,
        })
    }

    /// Compiles `patterns` into one set.
    fn build_glob_set(patterns: &[String]) -> Result<GlobSet, AssetError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|source| AssetError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    /// Returns true if the path matches `includePatterns` but not `excludePatterns`.
    #[must_use]
    pub fn is_match(&self, relative_path: &Path) -> bool {
        self.include_set.is_match(relative_path) && !self.exclude_set.is_match(relative_path)
    }
}
