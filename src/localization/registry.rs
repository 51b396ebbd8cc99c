//! Registry of admitted localization sets used for runtime text lookup.

use super::error::LocalizationError;
use super::types::LocalizationSet;

/// Identity of a set inside a [`LocalizationRegistry`], assigned on admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetId(usize);

/// Every localization set accepted during startup.
///
/// Created once by the host and handed to whoever loads localizations. Sets
/// are only ever added; nothing is removed for the lifetime of the registry.
#[derive(Debug, Default)]
pub struct LocalizationRegistry {
    /// Admitted sets in admission order; a set's index is its `SetId`
    sets: Vec<LocalizationSet>,
}

impl LocalizationRegistry {
    /// Empty registry, created once at startup.
    #[must_use]
    pub const fn new() -> Self {
        Self { sets: Vec::new() }
    }

    /// Validates `set` and admits it.
    ///
    /// # Errors
    /// `LocalizationError::Validation` if the set is malformed. The registry
    /// is left untouched in that case.
    pub fn add(&mut self, set: LocalizationSet) -> Result<SetId, LocalizationError> {
        set.validate().map_err(LocalizationError::Validation)?;

        let id = SetId(self.sets.len());
        tracing::debug!(
            set_id = id.0,
            entries = set.len(),
            from_json = set.from_json(),
            "Registered localization set"
        );
        self.sets.push(set);
        Ok(id)
    }

    /// The set admitted as `id`.
    #[must_use]
    pub fn get(&self, id: SetId) -> Option<&LocalizationSet> {
        self.sets.get(id.0)
    }

    /// Translation of `key` in `language`.
    ///
    /// Later sets shadow earlier ones, so a mod loaded last wins.
    #[must_use]
    pub fn text(&self, key: &str, language: &str) -> Option<&str> {
        self.sets
            .iter()
            .rev()
            .filter_map(|set| set.entry(key))
            .find_map(|entry| entry.text(language))
    }

    /// Whether any admitted set defines `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.sets.iter().any(|set| set.entry(key).is_some())
    }

    /// Admitted sets in admission order.
    pub fn iter(&self) -> impl Iterator<Item = (SetId, &LocalizationSet)> {
        self.sets.iter().enumerate().map(|(index, set)| (SetId(index), set))
    }

    /// Number of admitted sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether nothing has been admitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
