//! Localization entries and sets.

use std::collections::{
    BTreeMap,
    HashSet,
};

use serde::{
    Deserialize,
    Serialize,
};

use super::error::ValidationIssue;

/// Language name → translated string (e.g. `"English" -> "Hello"`).
pub type Translations = BTreeMap<String, String>;

/// Language whose curated values survive re-imports.
pub const SIMPLIFIED_CHINESE: &str = "Simplified Chinese";

/// Language carried over into the table for first-seen keys.
pub const ENGLISH: &str = "English";

/// Marks a "Simplified Chinese" slot nobody has translated yet.
pub const UNTRANSLATED: &str = "null";

/// One translation key with its per-language strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizationEntry {
    /// Translation key, e.g. `"greeting"`
    pub key: String,
    /// Text per language
    pub translations: Translations,
}

impl LocalizationEntry {
    /// Entry for `key`.
    #[must_use]
    pub fn new(key: impl Into<String>, translations: Translations) -> Self {
        Self { key: key.into(), translations }
    }

    /// Translation for `language`, if the entry has one.
    #[must_use]
    pub fn text(&self, language: &str) -> Option<&str> {
        self.translations.get(language).map(String::as_str)
    }
}

/// An ordered batch of entries admitted to the registry together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationSet {
    /// Entries in load order
    entries: Vec<LocalizationEntry>,
    /// `true` when the entries came from a user-supplied JSON payload
    from_json: bool,
}

impl LocalizationSet {
    /// Set of `entries`; `from_json` marks a user-supplied payload.
    #[must_use]
    pub const fn new(entries: Vec<LocalizationEntry>, from_json: bool) -> Self {
        Self { entries, from_json }
    }

    /// Entries in load order.
    #[must_use]
    pub fn entries(&self) -> &[LocalizationEntry] {
        &self.entries
    }

    /// Whether the set came from a JSON payload rather than the host.
    #[must_use]
    pub const fn from_json(&self) -> bool {
        self.from_json
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Last entry in the set for `key`.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&LocalizationEntry> {
        self.entries.iter().rev().find(|entry| entry.key == key)
    }

    /// Checks that no key appears twice. Any string, including `""`, is a
    /// valid key.
    ///
    /// # Errors
    /// Returns one issue per repeated key, in entry order.
    pub fn validate(&self) -> Result<(), Vec<ValidationIssue>> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for (index, entry) in self.entries.iter().enumerate() {
            if !seen.insert(entry.key.as_str()) {
                issues.push(ValidationIssue::new(index, format!("duplicate key '{}'", entry.key)));
            }
        }

        if issues.is_empty() { Ok(()) } else { Err(issues) }
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn entry(key: &str, pairs: &[(&str, &str)]) -> LocalizationEntry {
        LocalizationEntry::new(
            key,
            pairs.iter().map(|(lang, text)| ((*lang).to_string(), (*text).to_string())).collect(),
        )
    }

    #[rstest]
    fn validate_accepts_well_formed_set() {
        let set = LocalizationSet::new(
            vec![entry("greeting", &[("English", "Hello")]), entry("farewell", &[])],
            true,
        );

        assert_that!(set.validate(), ok(anything()));
    }

    #[rstest]
    #[case::empty_key("")]
    #[case::blank_key("   ")]
    fn validate_accepts_blank_keys_and_languages(#[case] key: &str) {
        let set = LocalizationSet::new(
            vec![entry(key, &[("English", "Hello"), ("", "untitled")]), entry("ok", &[])],
            true,
        );

        assert_that!(set.validate(), ok(anything()));
    }

    #[rstest]
    fn validate_rejects_duplicate_keys() {
        let set = LocalizationSet::new(
            vec![
                entry("greeting", &[("English", "Hello")]),
                entry("farewell", &[("English", "Bye")]),
                entry("greeting", &[("English", "Hi")]),
            ],
            true,
        );

        assert_that!(
            set.validate(),
            err(elements_are![all![
                field!(ValidationIssue.index, eq(&2)),
                field!(ValidationIssue.message, contains_substring("duplicate key 'greeting'"))
            ]])
        );
    }

    #[rstest]
    fn validate_reports_every_repeat_of_empty_key() {
        let set = LocalizationSet::new(
            vec![entry("", &[]), entry("", &[("English", "x")]), entry("", &[])],
            true,
        );

        assert_that!(
            set.validate(),
            err(elements_are![
                field!(ValidationIssue.index, eq(&1)),
                field!(ValidationIssue.index, eq(&2))
            ])
        );
    }

    #[rstest]
    fn entry_lookup_returns_text_for_language() {
        let set = LocalizationSet::new(
            vec![entry("greeting", &[("English", "Hello"), (SIMPLIFIED_CHINESE, "你好")])],
            true,
        );

        let found = set.entry("greeting");

        assert_that!(found.and_then(|e| e.text(SIMPLIFIED_CHINESE)), some(eq("你好")));
        assert_that!(found.and_then(|e| e.text("French")), none());
        assert_that!(set.entry("missing"), none());
        assert_that!(set.from_json(), eq(true));
    }
}
