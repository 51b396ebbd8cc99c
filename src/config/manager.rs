//! mods ディレクトリの設定を管理するモジュール

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    Settings,
};
use crate::localization::table::TABLE_FILE_NAME;

/// 設定ファイル名（mods ディレクトリ直下、任意）
pub const CONFIG_FILE_NAME: &str = ".localization.json";

/// mods ディレクトリと、そこから読んだ設定を保持する
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: Settings,

    /// mods ディレクトリ（翻訳テーブルの置き場所）
    mods_directory: PathBuf,
}

impl ConfigManager {
    /// デフォルト設定で作成する
    #[must_use]
    pub fn new(mods_directory: impl Into<PathBuf>) -> Self {
        Self { current_settings: Settings::default(), mods_directory: mods_directory.into() }
    }

    /// `.localization.json` を読み込み、検証して反映する
    ///
    /// ファイルがなければデフォルト設定を使う。失敗時は現在の設定を維持する。
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self) -> Result<(), ConfigError> {
        let path = self.config_path();

        let settings = if path.exists() {
            tracing::debug!(path = %path.display(), "Loading settings file");
            let content = std::fs::read_to_string(&path)
                .map_err(|source| ConfigError::Read { path: path.clone(), source })?;
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path, source })?
        } else {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            Settings::default()
        };

        self.update_settings(settings)
    }

    /// 検証してから設定を差し替える
    ///
    /// # Errors
    /// `ConfigError::Invalid`（現在の設定は変わらない）
    pub fn update_settings(&mut self, new_settings: Settings) -> Result<(), ConfigError> {
        new_settings.validate().map_err(ConfigError::Invalid)?;

        self.current_settings = new_settings;
        tracing::debug!("Settings updated: {:?}", self.current_settings);

        Ok(())
    }

    /// 現在の設定
    #[must_use]
    pub const fn get_settings(&self) -> &Settings {
        &self.current_settings
    }

    /// mods ディレクトリ
    #[must_use]
    pub fn mods_directory(&self) -> &Path {
        &self.mods_directory
    }

    /// 設定ファイルのパス（`<mods>/.localization.json`）
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.mods_directory.join(CONFIG_FILE_NAME)
    }

    /// 翻訳テーブルのパス（常に `<mods>/Localization.json`）
    #[must_use]
    pub fn table_path(&self) -> PathBuf {
        self.mods_directory.join(TABLE_FILE_NAME)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    /// new: パスは mods ディレクトリ直下に固定
    #[rstest]
    fn test_new_uses_fixed_paths() {
        let manager = ConfigManager::new("Mods");

        assert_eq!(manager.get_settings(), &Settings::default());
        assert_eq!(manager.table_path(), Path::new("Mods").join("Localization.json"));
        assert_eq!(manager.config_path(), Path::new("Mods").join(".localization.json"));
    }

    /// load_settings: 設定ファイルがある場合
    #[rstest]
    fn test_load_settings_with_config_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"excludePatterns": ["old/**"]}"#)
            .unwrap();

        let mut manager = ConfigManager::new(temp_dir.path());
        manager.load_settings().unwrap();

        assert_eq!(manager.get_settings().exclude_patterns, vec!["old/**".to_string()]);
        assert_eq!(manager.table_path(), temp_dir.path().join("Localization.json"));
    }

    /// load_settings: 設定ファイルがない場合はデフォルト値
    #[rstest]
    fn test_load_settings_without_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let mut manager = ConfigManager::new(temp_dir.path());
        let result = manager.load_settings();

        assert!(result.is_ok());
        assert_eq!(manager.get_settings(), &Settings::default());
    }

    /// load_settings: JSON パースエラー
    #[rstest]
    fn test_load_settings_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "invalid json").unwrap();

        let mut manager = ConfigManager::new(temp_dir.path());
        let result = manager.load_settings();

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    /// load_settings: 無効な設定はエラー、現在の設定は維持
    #[rstest]
    fn test_load_settings_invalid_config_keeps_previous() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"includePatterns": []}"#).unwrap();

        let mut manager = ConfigManager::new(temp_dir.path());
        let result = manager.load_settings();

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
        assert_eq!(manager.get_settings().include_patterns, vec!["**/*".to_string()]);
    }

    /// load_settings: 旧形式の tableFileName は無視され、テーブル名は変わらない
    #[rstest]
    fn test_load_settings_ignores_table_file_name() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"tableFileName": "Other.json"}"#)
            .unwrap();

        let mut manager = ConfigManager::new(temp_dir.path());
        manager.load_settings().unwrap();

        assert_eq!(manager.table_path(), temp_dir.path().join("Localization.json"));
    }
}
