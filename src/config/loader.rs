//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    AutotranslateSettings,
    ConfigError,
};

/// 作業ディレクトリで探す設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".i18n-autotranslate.json";

/// 作業ディレクトリから設定を読み込む
///
/// `.i18n-autotranslate.json` ファイルを探して読み込む
///
/// # Arguments
/// * `working_dir` - 作業ディレクトリ
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
pub(super) fn load_from_workspace(
    working_dir: &Path,
) -> Result<Option<AutotranslateSettings>, ConfigError> {
    let config_path = working_dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    load_from_path(&config_path).map(Some)
}

/// 明示的に指定された設定ファイルを読み込む（`--config` 用）
///
/// ファイルが存在しない場合はエラーになる。
pub(super) fn load_from_path(config_path: &Path) -> Result<AutotranslateSettings, ConfigError> {
    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(config_path)?;
    let settings: AutotranslateSettings = serde_json::from_str(&content)?;

    Ok(settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    /// `load_from_workspace`: 設定ファイルが存在する場合
    #[rstest]
    fn test_load_from_workspace_with_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"lintDirectory": ".cache/lint"}"#;
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), config_content).unwrap();

        let result = load_from_workspace(temp_dir.path());

        assert!(result.is_ok());
        let settings = result.unwrap();
        assert!(settings.is_some());
        assert_eq!(settings.unwrap().lint_directory, ".cache/lint");
    }

    /// `load_from_workspace`: 設定ファイルが存在しない場合
    #[rstest]
    fn test_load_from_workspace_no_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_workspace(temp_dir.path());

        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    /// `load_from_workspace`: JSON パースエラー
    #[rstest]
    fn test_load_from_workspace_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "invalid json").unwrap();

        let result = load_from_workspace(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    /// `load_from_path`: 指定ファイルが存在しない場合はエラー
    #[rstest]
    fn test_load_from_path_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_path(&temp_dir.path().join("custom.json"));

        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
