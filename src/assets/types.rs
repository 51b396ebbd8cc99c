//! Asset source type definitions.

use std::path::PathBuf;

use thiserror::Error;

/// A named blob handed to the localization loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Path-like name; its extension decides how the asset is loaded
    pub name: String,
    /// Raw content, possibly with a preamble before the JSON
    pub bytes: Vec<u8>,
}

/// Supplies the raw assets to load, in the order they should be merged.
pub trait AssetSource {
    /// # Errors
    /// Implementation specific; failing to enumerate assets at all.
    fn assets(&self) -> Result<Vec<Asset>, AssetError>;
}

/// Failure to enumerate assets.
#[derive(Error, Debug)]
pub enum AssetError {
    /// The asset root is missing.
    #[error("Asset root does not exist or is not a directory: {}", .0.display())]
    MissingRoot(PathBuf),

    /// A configured glob does not compile.
    #[error("Invalid asset pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The glob as written in the settings
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// The compiled globs could not be combined.
    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}
