//! Merging a mod's localization payload into the shared table.

use std::path::Path;

use super::error::LocalizationError;
use super::table::{
    LocalizationTable,
    parse_entries,
};
use super::types::{
    ENGLISH,
    LocalizationEntry,
    SIMPLIFIED_CHINESE,
    Translations,
    UNTRANSLATED,
};

/// What a merge did to the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Payload entries in payload order, adjusted by the table
    pub entries: Vec<LocalizationEntry>,
    /// Keys that were new to the table
    pub added: usize,
    /// Keys whose curated "Simplified Chinese" replaced the payload's
    pub preserved: usize,
}

/// Curated "Simplified Chinese" text of a table entry, skipping blanks and the
/// untranslated marker.
fn curated_chinese(translations: &Translations) -> Option<&String> {
    translations
        .get(SIMPLIFIED_CHINESE)
        .filter(|text| !text.trim().is_empty() && text.as_str() != UNTRANSLATED)
}

/// Table seed for a key the table has never seen.
fn seed_translations(payload: &Translations) -> Translations {
    let mut seed = Translations::new();
    if let Some(english) = payload.get(ENGLISH) {
        seed.insert(ENGLISH.to_string(), english.clone());
    }
    seed.entry(SIMPLIFIED_CHINESE.to_string()).or_insert_with(|| UNTRANSLATED.to_string());
    seed
}

/// Merges `payload` into `table`.
///
/// New keys are added to the table with their English text and an
/// untranslated Chinese slot. Known keys leave the table alone, but a curated
/// Chinese translation in the table overrides the payload's. Every payload
/// entry is returned, including the payload's own Chinese text for keys that
/// were new.
pub fn merge(table: &mut LocalizationTable, payload: Vec<LocalizationEntry>) -> MergeReport {
    let mut report = MergeReport { entries: Vec::with_capacity(payload.len()), ..Default::default() };

    for mut entry in payload {
        match table.get(&entry.key) {
            None => {
                table.insert(entry.key.clone(), seed_translations(&entry.translations));
                report.added += 1;
            }
            Some(existing) => {
                if let Some(chinese) = curated_chinese(existing) {
                    entry.translations.insert(SIMPLIFIED_CHINESE.to_string(), chinese.clone());
                    report.preserved += 1;
                }
            }
        }
        report.entries.push(entry);
    }

    report
}

/// Merges payload `text` into the table file at `table_path` and saves it.
///
/// Returns `Ok(None)` without touching the file when `text` is blank.
///
/// # Errors
/// Parse or shape errors in either document, and I/O errors. Nothing is
/// written unless both documents parsed.
pub fn merge_into_file(
    text: &str,
    table_path: &Path,
) -> Result<Option<MergeReport>, LocalizationError> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    let mut table = LocalizationTable::load(table_path)?;
    let payload = parse_entries(text, None)?;

    let report = merge(&mut table, payload);
    table.save(table_path)?;

    tracing::info!(
        path = %table_path.display(),
        entries = report.entries.len(),
        added = report.added,
        preserved = report.preserved,
        "Merged localization payload"
    );
    Ok(Some(report))
}
