//! Loading mod localizations into the shared table and the runtime registry.

/// Raw asset bytes → JSON text
pub mod decode;
/// Error types
pub mod error;
/// Host-facing loader
pub mod manager;
/// Payload/table merge rules
pub mod merge;
/// Admitted sets and runtime lookup
pub mod registry;
/// The on-disk table
pub mod table;
/// Entries and sets
pub mod types;

pub use error::{
    LocalizationError,
    ValidationIssue,
};
pub use manager::{
    LoadOutcome,
    LocalizationManager,
};
pub use merge::MergeReport;
pub use registry::{
    LocalizationRegistry,
    SetId,
};
pub use table::LocalizationTable;
pub use types::{
    LocalizationEntry,
    LocalizationSet,
    Translations,
};
