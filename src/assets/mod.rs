//! Where localization assets come from.

/// Directory-backed source
mod directory;
/// Include/exclude glob filter
mod matcher;
/// Asset types and the source trait
mod types;

pub use directory::DirectoryAssetSource;
pub use matcher::AssetMatcher;
pub use types::{
    Asset,
    AssetError,
    AssetSource,
};
