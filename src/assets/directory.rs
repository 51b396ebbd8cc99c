//! Asset source backed by a directory tree.
use std::path::{
    Path,
    PathBuf,
};

use ignore::WalkBuilder;

use super::matcher::AssetMatcher;
use super::types::{
    Asset,
    AssetError,
    AssetSource,
};
use crate::config::Settings;

/// Reads every matching file under `root`.
///
/// Asset names are paths relative to `root` with `/` separators, and assets
/// come back sorted by name so merges happen in a stable order.
#[derive(Debug, Clone)]
pub struct DirectoryAssetSource {
    /// Directory the walk starts from
    root: PathBuf,
    /// Include/exclude filter on paths relative to `root`
    matcher: AssetMatcher,
    /// Files never treated as assets (the table itself, the settings file)
    skip: Vec<PathBuf>,
}

impl DirectoryAssetSource {
    /// Source over `root`, filtered by the patterns in `settings`.
    ///
    /// # Errors
    /// Invalid glob patterns in `settings`.
    pub fn new(root: impl Into<PathBuf>, settings: &Settings) -> Result<Self, AssetError> {
        Ok(Self { root: root.into(), matcher: AssetMatcher::new(settings)?, skip: Vec::new() })
    }

    /// Never yield `path`, even if it matches the patterns.
    #[must_use]
    pub fn skipping(mut self, path: impl Into<PathBuf>) -> Self {
        self.skip.push(path.into());
        self
    }

    /// Directory the walk starts from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `path` was excluded with [`Self::skipping`].
    fn is_skipped(&self, path: &Path) -> bool {
        self.skip.iter().any(|skipped| same_file(skipped, path))
    }

    /// Files under the root that pass the matcher, sorted.
    fn find_asset_files(&self) -> Vec<PathBuf> {
        let mut found_files = Vec::new();

        for result in WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .follow_links(false)
            .build()
        {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(?err, "Failed to read directory entry");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            let Ok(relative_path) = path.strip_prefix(&self.root) else {
                continue;
            };
            if !self.matcher.is_match(relative_path) || self.is_skipped(path) {
                continue;
            }

            found_files.push(path.to_path_buf());
        }

        found_files.sort();
        found_files
    }

    /// `/`-separated path of `path` relative to the root.
    fn asset_name(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Compares canonical paths, falling back to the raw paths when either
/// does not exist yet.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

impl AssetSource for DirectoryAssetSource {
    fn assets(&self) -> Result<Vec<Asset>, AssetError> {
        if !self.root.is_dir() {
            return Err(AssetError::MissingRoot(self.root.clone()));
        }

        let files = self.find_asset_files();
        tracing::debug!(root = %self.root.display(), count = files.len(), "Found asset files");

        let mut assets = Vec::with_capacity(files.len());
        for path in files {
            // 読み込めないファイルは警告して続行
            match std::fs::read(&path) {
                Ok(bytes) => assets.push(Asset { name: self.asset_name(&path), bytes }),
                Err(e) => tracing::warn!("Failed to read asset {:?}: {}", path, e),
            }
        }

        Ok(assets)
    }
}
