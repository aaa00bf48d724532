//! 設定管理を行うモジュール

use std::path::{
    Path,
    PathBuf,
};

use super::{
    AutotranslateSettings,
    ConfigError,
    loader,
};

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: AutotranslateSettings,

    /// 読み込んだ設定ファイルのパス
    source_path: Option<PathBuf>,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: AutotranslateSettings::default(), source_path: None }
    }

    /// 設定を読み込む
    ///
    /// # Arguments
    /// * `working_dir` - 作業ディレクトリ（`.i18n-autotranslate.json` を探す）
    /// * `explicit_path` - `--config` で指定されたファイル（指定時は必須）
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(
        &mut self,
        working_dir: &Path,
        explicit_path: Option<&Path>,
    ) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for working directory: {:?}", working_dir);

        let (settings, source_path) = if let Some(path) = explicit_path {
            let path = working_dir.join(path);
            (loader::load_from_path(&path)?, Some(path))
        } else {
            loader::load_from_workspace(working_dir)?.map_or_else(
                || (AutotranslateSettings::default(), None),
                |settings| (settings, Some(working_dir.join(super::CONFIG_FILE_NAME))),
            )
        };

        // バリデーション
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.source_path = source_path;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 設定を更新する（コマンドライン引数による上書き用）
    ///
    /// # Errors
    /// - バリデーションエラー
    pub fn update_settings(&mut self, new_settings: AutotranslateSettings) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");

        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = new_settings;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &AutotranslateSettings {
        &self.current_settings
    }

    /// 設定を取り出す
    #[must_use]
    pub fn into_settings(self) -> AutotranslateSettings {
        self.current_settings
    }

    /// 読み込んだ設定ファイルのパスを取得
    #[must_use]
    pub const fn source_path(&self) -> Option<&PathBuf> {
        self.source_path.as_ref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::config::CONFIG_FILE_NAME;
    use crate::translate::FailurePolicy;

    /// new: デフォルト値で作成される
    #[rstest]
    fn test_new_creates_default_settings() {
        let manager = ConfigManager::new();

        assert_eq!(manager.get_settings().extractor.sync_args, "-s");
        assert!(manager.source_path().is_none());
    }

    /// load_settings: 設定ファイルがある場合
    #[rstest]
    fn test_load_settings_with_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"translation": {"onError": "continue"}}"#;
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), config_content).unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(temp_dir.path(), None);

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().translation.on_error, FailurePolicy::Continue);
        assert!(manager.source_path().is_some());
    }

    /// load_settings: 設定ファイルがない場合はデフォルト値
    #[rstest]
    fn test_load_settings_without_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(temp_dir.path(), None);

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().lint_directory, "node_modules/.tmp/i18linter");
        assert!(manager.source_path().is_none());
    }

    /// load_settings: 明示的なパス（作業ディレクトリからの相対）
    #[rstest]
    fn test_load_settings_with_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("ci.json"), r#"{"lintDirectory": "tmp/lint"}"#).unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(temp_dir.path(), Some(Path::new("ci.json")));

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().lint_directory, "tmp/lint");
    }

    /// load_settings: 無効な設定はバリデーションエラー
    #[rstest]
    fn test_load_settings_invalid_values() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"translation": {"timeoutSecs": 0}}"#)
            .unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(temp_dir.path(), None);

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
    }

    /// update_settings: 無効な設定でエラー
    #[rstest]
    fn test_update_settings_invalid() {
        let mut manager = ConfigManager::new();
        let mut new_settings = AutotranslateSettings::default();
        new_settings.extractor.command = String::new();

        let result = manager.update_settings(new_settings);

        assert!(result.is_err());
        assert_eq!(manager.get_settings().extractor.command, "deno run -A npm:i18next-parser");
    }
}
