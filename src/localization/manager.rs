//! Entry point the host uses to feed localization assets in.

use std::path::{
    Path,
    PathBuf,
};

use super::decode::payload_text;
use super::error::LocalizationError;
use super::merge::merge_into_file;
use super::registry::{
    LocalizationRegistry,
    SetId,
};
use super::types::LocalizationSet;

/// Result of handing one asset to [`LocalizationManager::load_localization`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Merged into the table and registered
    Loaded(SetId),
    /// The payload was blank
    NothingToDo,
    /// Not a `.json` asset; a warning was logged
    Unsupported,
}

/// Owns the registry and the location of the shared table.
#[derive(Debug)]
pub struct LocalizationManager {
    /// `<mods directory>/<table file name>`
    table_path: PathBuf,
    /// Sets loaded so far
    registry: LocalizationRegistry,
}

impl LocalizationManager {
    /// Manager merging into the table at `table_path`, with an empty registry.
    #[must_use]
    pub fn new(table_path: impl Into<PathBuf>) -> Self {
        Self { table_path: table_path.into(), registry: LocalizationRegistry::new() }
    }

    /// Where the shared table lives.
    #[must_use]
    pub fn table_path(&self) -> &Path {
        &self.table_path
    }

    /// Sets registered so far.
    #[must_use]
    pub const fn registry(&self) -> &LocalizationRegistry {
        &self.registry
    }

    /// Gives up the registry once loading is done.
    #[must_use]
    pub fn into_registry(self) -> LocalizationRegistry {
        self.registry
    }

    /// Validates and registers a set built by the host itself.
    ///
    /// # Errors
    /// `LocalizationError::Validation` for a malformed set.
    pub fn add_localizations(&mut self, set: LocalizationSet) -> Result<SetId, LocalizationError> {
        self.registry.add(set)
    }

    /// Loads the asset `name` if its extension is `.json` (any case).
    ///
    /// # Errors
    /// Any error from [`Self::load_json_localization`].
    pub fn load_localization(
        &mut self,
        name: &str,
        bytes: &[u8],
    ) -> Result<LoadOutcome, LocalizationError> {
        if !name.to_lowercase().ends_with(".json") {
            tracing::warn!("Found localization '{name}' that could not be loaded.");
            return Ok(LoadOutcome::Unsupported);
        }

        tracing::debug!(asset = name, "Loading JSON localization");
        Ok(self.load_json_localization(bytes)?.map_or(LoadOutcome::NothingToDo, LoadOutcome::Loaded))
    }

    /// Decodes JSON from raw asset bytes and loads it.
    ///
    /// # Errors
    /// `LocalizationError::NoJsonContent` when the bytes hold no JSON, plus
    /// anything [`Self::load_json_localization_text`] returns.
    pub fn load_json_localization(
        &mut self,
        bytes: &[u8],
    ) -> Result<Option<SetId>, LocalizationError> {
        let text = payload_text(bytes)?;
        self.load_json_localization_text(&text)
    }

    /// Merges `text` into the shared table and registers its entries.
    ///
    /// Returns `Ok(None)` for a blank payload.
    ///
    /// # Errors
    /// Parse, shape, I/O and validation errors. On a validation error the
    /// table has already been saved but nothing is registered.
    pub fn load_json_localization_text(
        &mut self,
        text: &str,
    ) -> Result<Option<SetId>, LocalizationError> {
        let Some(report) = merge_into_file(text, &self.table_path)? else {
            tracing::debug!("Localization payload is empty, nothing to do");
            return Ok(None);
        };

        self.registry.add(LocalizationSet::new(report.entries, true)).map(Some)
    }
}
