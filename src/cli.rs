//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    ConfigError,
    ConfigManager,
    ValidationError,
};
use crate::locale::LocaleSet;
use crate::runner::{
    Mode,
    RunOptions,
};
use crate::translate::FailurePolicy;

#[derive(Debug, Parser)]
#[command(name = "i18n-autotranslate", version)]
#[command(
    about = "Syncs i18next locale catalogs with the source code and fills missing translations",
    long_about = None
)]
pub struct Cli {
    /// Locales separated by comma (first one will be default and won't be translated) like: en,es,fr
    #[arg(short, long)]
    pub locales: String,

    /// Run the linter instead of translating
    #[arg(long)]
    pub lint: bool,

    /// Input glob like: src/**/*.{js,jsx,ts,tsx}
    #[arg(short, long)]
    pub input: String,

    /// Locales output directory like: src/locales
    #[arg(short, long)]
    pub output: PathBuf,

    /// What to do when a translation request fails
    #[arg(long, value_enum)]
    pub on_error: Option<FailurePolicy>,

    /// Settings file (defaults to .i18n-autotranslate.json in the working directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Shell command running i18next-parser
    #[arg(long)]
    pub extractor: Option<String>,
}

impl Cli {
    /// 引数と設定ファイルから実行オプションを組み立てる
    ///
    /// コマンドライン引数は設定ファイルの値より優先される。
    ///
    /// # Errors
    /// - ロケール一覧のパースエラー
    /// - 無効な入力 glob
    /// - 設定ファイルの読み込み・バリデーションエラー
    pub fn into_options(self, working_dir: PathBuf) -> Result<RunOptions, ConfigError> {
        let locales: LocaleSet = self.locales.parse()?;

        if let Err(e) = globset::Glob::new(&self.input) {
            return Err(ConfigError::ValidationErrors(vec![ValidationError::new(
                "--input",
                format!("Invalid glob pattern '{}': {e}", self.input),
            )]));
        }

        let mut manager = ConfigManager::new();
        manager.load_settings(&working_dir, self.config.as_deref())?;
        if let Some(path) = manager.source_path() {
            tracing::info!("Using settings from {}", path.display());
        }

        let mut settings = manager.get_settings().clone();
        if let Some(policy) = self.on_error {
            settings.translation.on_error = policy;
        }
        if let Some(command) = self.extractor {
            settings.extractor.command = command;
        }
        manager.update_settings(settings)?;

        Ok(RunOptions {
            working_dir,
            locales,
            input: self.input,
            output: self.output,
            mode: if self.lint { Mode::Lint } else { Mode::Build },
            settings: manager.into_settings(),
        })
    }
}
