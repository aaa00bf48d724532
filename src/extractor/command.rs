//! 抽出ツールのサブプロセス実行

use std::path::{
    Path,
    PathBuf,
};

use tokio::process::Command;

use super::ExtractorError;

/// Shell command running `i18next-parser` inside the working directory.
#[derive(Debug, Clone)]
pub struct Extractor {
    command: String,
    working_dir: PathBuf,
}

impl Extractor {
    #[must_use]
    pub fn new(command: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self { command: command.into(), working_dir: working_dir.into() }
    }

    /// カタログを生成・更新する（新しいキーを追加する）
    ///
    /// # Errors
    /// - プロセスの起動に失敗
    /// - 終了コードが 0 以外
    pub async fn generate(&self) -> Result<(), ExtractorError> {
        self.run(&self.command).await
    }

    /// 既存のカタログを同期する（新しいキーは追加しない、lint 用）
    ///
    /// # Errors
    /// - プロセスの起動に失敗
    /// - 終了コードが 0 以外
    pub async fn sync(&self, sync_args: &str) -> Result<(), ExtractorError> {
        let command_line = format!("{} {}", self.command, sync_args);
        self.run(command_line.trim_end()).await
    }

    async fn run(&self, command_line: &str) -> Result<(), ExtractorError> {
        tracing::info!("Running {command_line}");

        let status = shell(command_line, &self.working_dir)
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|source| ExtractorError::Spawn { command: command_line.to_string(), source })?;

        if !status.success() {
            return Err(ExtractorError::Failed {
                command: command_line.to_string(),
                code: status.code(),
            });
        }

        tracing::debug!(command = %command_line, "Extractor finished");
        Ok(())
    }
}

#[cfg(not(windows))]
fn shell(command_line: &str, working_dir: &Path) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(command_line).current_dir(working_dir);
    command
}

#[cfg(windows)]
fn shell(command_line: &str, working_dir: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(command_line).current_dir(working_dir);
    command
}
