//! The on-disk translation table shared by every mod.

use std::collections::HashMap;
use std::path::Path;

use serde::ser::{
    Serialize,
    SerializeMap,
    Serializer,
};
use serde_json::Value;

use super::error::LocalizationError;
use super::types::{
    LocalizationEntry,
    Translations,
};

/// Name of the shared table inside the mods directory.
pub const TABLE_FILE_NAME: &str = "Localization.json";

/// Parses a `{ key: { language: text } }` document, keeping document order.
///
/// # Errors
/// - `Parse` for malformed JSON
/// - `NotAnObject` when the root is not an object
/// - `Shape` when a key's value is not an object of strings
pub fn parse_entries(
    text: &str,
    path: Option<&Path>,
) -> Result<Vec<LocalizationEntry>, LocalizationError> {
    let document: Value = serde_json::from_str(text)
        .map_err(|source| LocalizationError::Parse { path: path.map(Path::to_path_buf), source })?;

    let Value::Object(map) = document else {
        return Err(LocalizationError::NotAnObject);
    };

    map.into_iter()
        .map(|(key, value)| match serde_json::from_value::<Translations>(value) {
            Ok(translations) => Ok(LocalizationEntry::new(key, translations)),
            Err(source) => Err(LocalizationError::Shape { key, source }),
        })
        .collect()
}

/// Key → translations, in the order keys were first written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizationTable {
    /// Entries in file order
    entries: Vec<LocalizationEntry>,
    /// Position of each key in `entries`
    index: HashMap<String, usize>,
}

impl LocalizationTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a table document.
    ///
    /// # Errors
    /// See [`parse_entries`].
    pub fn parse(text: &str, path: Option<&Path>) -> Result<Self, LocalizationError> {
        let mut table = Self::new();
        for entry in parse_entries(text, path)? {
            table.insert(entry.key, entry.translations);
        }
        Ok(table)
    }

    /// Reads the table at `path`, or an empty table when the file is absent.
    ///
    /// # Errors
    /// I/O failures other than a missing file, and parse failures.
    pub fn load(path: &Path) -> Result<Self, LocalizationError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No localization table yet, starting empty");
            return Ok(Self::new());
        }

        let text = std::fs::read_to_string(path)
            .map_err(|source| LocalizationError::Io { path: path.to_path_buf(), source })?;
        let table = Self::parse(&text, Some(path))?;
        tracing::debug!(path = %path.display(), keys = table.len(), "Loaded localization table");
        Ok(table)
    }

    /// Writes the table pretty-printed, creating parent directories as needed.
    ///
    /// # Errors
    /// I/O failures.
    pub fn save(&self, path: &Path) -> Result<(), LocalizationError> {
        let io_error = |source| LocalizationError::Io { path: path.to_path_buf(), source };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let json = self.to_pretty_json()?;
        std::fs::write(path, json).map_err(io_error)?;
        tracing::debug!(path = %path.display(), keys = self.len(), "Saved localization table");
        Ok(())
    }

    /// The table as pretty-printed JSON.
    ///
    /// # Errors
    /// `LocalizationError::Serialize` if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, LocalizationError> {
        serde_json::to_string_pretty(self).map_err(LocalizationError::Serialize)
    }

    /// Translations stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Translations> {
        self.index
            .get(key)
            .and_then(|&position| self.entries.get(position))
            .map(|entry| &entry.translations)
    }

    /// Whether `key` has an entry.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Replaces the translations of an existing key in place, or appends a new key.
    pub fn insert(&mut self, key: String, translations: Translations) {
        if let Some(entry) = self.index.get(&key).and_then(|&position| self.entries.get_mut(position))
        {
            entry.translations = translations;
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(LocalizationEntry::new(key, translations));
    }

    /// Entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = &LocalizationEntry> {
        self.entries.iter()
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for LocalizationTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.translations)?;
        }
        map.end()
    }
}
