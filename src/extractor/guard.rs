//! 生成した設定ファイルのライフサイクル管理

use std::fs::OpenOptions;
use std::io::{
    ErrorKind,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};

use super::ExtractorError;

/// 作業ディレクトリに生成する設定ファイル名
pub const GENERATED_CONFIG_FILE: &str = "i18next-parser.config.js";

/// 既に存在すると上書きしてしまう設定ファイル
pub const CONFLICTING_CONFIG_FILES: [&str; 2] =
    ["i18next-parser.config.ts", "i18next-parser.config.js"];

/// ユーザーの設定ファイルが既に存在しないことを確認する
///
/// # Errors
/// - `ExtractorError::ConfigConflict`: 設定ファイルが存在する
pub fn ensure_no_existing_config(working_dir: &Path) -> Result<(), ExtractorError> {
    for name in CONFLICTING_CONFIG_FILES {
        let path = working_dir.join(name);
        if path.exists() {
            return Err(ExtractorError::ConfigConflict { path });
        }
    }
    Ok(())
}

/// Generated extractor config, removed from disk when dropped.
///
/// Holding the guard for the duration of a run ties the file's lifetime to
/// the run: normal return, error propagation and a cancelled future all drop
/// it.
#[derive(Debug)]
pub struct GeneratedConfig {
    path: PathBuf,
}

impl GeneratedConfig {
    /// Writes `contents` to `i18next-parser.config.js` in `working_dir`.
    ///
    /// The file is created exclusively, so a config that appeared after
    /// [`ensure_no_existing_config`] ran is reported as a conflict rather than
    /// overwritten.
    ///
    /// # Errors
    /// - `ExtractorError::ConfigConflict`: the file already exists
    /// - `ExtractorError::WriteConfig`: the file cannot be written
    pub fn create(working_dir: &Path, contents: &str) -> Result<Self, ExtractorError> {
        let path = working_dir.join(GENERATED_CONFIG_FILE);

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(ExtractorError::ConfigConflict { path });
            }
            Err(source) => return Err(ExtractorError::WriteConfig { path, source }),
        };

        // 書き込みに失敗してもファイルは削除する
        let guard = Self { path };
        file.write_all(contents.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| ExtractorError::WriteConfig { path: guard.path.clone(), source })?;

        tracing::debug!(path = %guard.path.display(), "Generated extractor config");
        Ok(guard)
    }
}

impl Drop for GeneratedConfig {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "Removed extractor config"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Failed to remove extractor config: {e}");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    #[case("i18next-parser.config.js")]
    #[case("i18next-parser.config.ts")]
    fn test_ensure_no_existing_config_detects_conflict(#[case] name: &str) {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(name), "export default {}").unwrap();

        let result = ensure_no_existing_config(temp_dir.path());

        assert!(
            matches!(result, Err(ExtractorError::ConfigConflict { path }) if path.ends_with(name))
        );
    }

    #[rstest]
    fn test_ensure_no_existing_config_clean_directory() {
        let temp_dir = TempDir::new().unwrap();

        assert!(ensure_no_existing_config(temp_dir.path()).is_ok());
    }

    #[rstest]
    fn test_generated_config_removed_on_drop() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(GENERATED_CONFIG_FILE);

        let guard = GeneratedConfig::create(temp_dir.path(), "export default {};").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "export default {};");

        drop(guard);

        assert!(!path.exists());
    }

    #[rstest]
    fn test_generated_config_removed_on_early_return() {
        fn failing_run(dir: &Path) -> Result<(), ExtractorError> {
            let _config = GeneratedConfig::create(dir, "export default {};")?;
            Err(ExtractorError::Failed { command: "true".to_string(), code: Some(1) })
        }
        let temp_dir = TempDir::new().unwrap();

        assert!(failing_run(temp_dir.path()).is_err());

        assert!(!temp_dir.path().join(GENERATED_CONFIG_FILE).exists());
    }

    #[rstest]
    fn test_generated_config_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(GENERATED_CONFIG_FILE);
        fs::write(&path, "user config").unwrap();

        let result = GeneratedConfig::create(temp_dir.path(), "generated");

        assert!(matches!(result, Err(ExtractorError::ConfigConflict { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "user config");
    }

    #[rstest]
    fn test_drop_tolerates_already_removed_file() {
        let temp_dir = TempDir::new().unwrap();
        let guard = GeneratedConfig::create(temp_dir.path(), "x").unwrap();

        fs::remove_file(temp_dir.path().join(GENERATED_CONFIG_FILE)).unwrap();
        drop(guard);

        assert!(!temp_dir.path().join(GENERATED_CONFIG_FILE).exists());
    }
}
