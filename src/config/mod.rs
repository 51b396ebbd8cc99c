//! Settings read from the mods directory.

/// Settings file loading and path resolution
mod manager;
/// Settings types and validation
mod types;

pub use manager::{
    CONFIG_FILE_NAME,
    ConfigManager,
};
pub use types::{
    ConfigError,
    Settings,
    ValidationError,
};
