//! mod-localization-merger
//!
//! Merges per-mod localization payloads into the shared `Localization.json`
//! table and registers them for runtime lookup.

/// Where localization assets come from
pub mod assets;
/// Settings read from the mods directory
pub mod config;
/// Decoding, merging and registering localizations
pub mod localization;
/// Test helpers
mod test_utils;

pub use localization::{
    LoadOutcome,
    LocalizationError,
    LocalizationManager,
    LocalizationRegistry,
};
