//! Build / lint orchestration
//!
//! Both modes share the same setup: refuse to overwrite a user's extractor
//! config, render the generated one and keep it on disk only while the run
//! is in progress.

use std::path::PathBuf;

use crate::Error;
use crate::config::AutotranslateSettings;
use crate::extractor::{
    ConfigTemplate,
    Extractor,
    GeneratedConfig,
    TemplateValues,
    ensure_no_existing_config,
    has_source_files,
};
use crate::lint::{
    check_missing_translations,
    prepare_scratch,
};
use crate::locale::LocaleSet;
use crate::translate::{
    FillReport,
    TranslationFiller,
    TranslationProvider,
};

/// 実行モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// カタログを生成し、空の翻訳を埋める
    Build,
    /// 翻訳漏れがないことを確認する（実カタログは変更しない）
    Lint,
}

/// Everything a run needs, resolved from flags and settings.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Where the generated config is written and the extractor runs
    pub working_dir: PathBuf,
    pub locales: LocaleSet,
    pub input: String,
    /// Catalog directory, relative to `working_dir` unless absolute
    pub output: PathBuf,
    pub mode: Mode,
    pub settings: AutotranslateSettings,
}

impl RunOptions {
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.working_dir.join(&self.output)
    }

    #[must_use]
    pub fn lint_dir(&self) -> PathBuf {
        self.working_dir.join(&self.settings.lint_directory)
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Translated(FillReport),
    NoMissingTranslations,
}

/// 設定ファイルを生成し、抽出ツールを実行してから翻訳または lint を行う
///
/// 生成した設定ファイルは戻り値に関わらず、またこの Future が途中で破棄された場合も削除される。
///
/// # Errors
/// - 既存の i18next-parser 設定ファイルがある
/// - 抽出ツールの失敗
/// - 翻訳の失敗（Build）
/// - カタログのコピー失敗・翻訳漏れ（Lint）
pub async fn run(
    options: &RunOptions,
    provider: &dyn TranslationProvider,
) -> Result<RunOutcome, Error> {
    let working_dir = &options.working_dir;
    let settings = &options.settings;

    ensure_no_existing_config(working_dir)?;
    warn_if_no_sources(options);

    let output_dir = options.output_dir();
    let extractor_output = match options.mode {
        Mode::Build => output_dir.clone(),
        Mode::Lint => options.lint_dir(),
    };

    let template =
        ConfigTemplate::load(settings.extractor.template_path.as_deref(), working_dir).await?;
    let contents = template.render(&TemplateValues {
        output_dir: &extractor_output,
        input: &options.input,
        default_locale: options.locales.default_locale(),
        locales: options.locales.all(),
    });

    let _config = GeneratedConfig::create(working_dir, &contents)?;
    let extractor = Extractor::new(&settings.extractor.command, working_dir.clone());
    let targets = options.locales.targets();

    match options.mode {
        Mode::Build => {
            extractor.generate().await?;

            let report = TranslationFiller::new(provider)
                .with_policy(settings.translation.on_error)
                .fill(&output_dir, options.locales.default_locale(), targets)
                .await?;
            Ok(RunOutcome::Translated(report))
        }
        Mode::Lint => {
            prepare_scratch(&output_dir, &extractor_output, targets).await?;
            extractor.sync(&settings.extractor.sync_args).await?;
            check_missing_translations(&extractor_output, targets).await?;

            tracing::info!("No missing translations");
            Ok(RunOutcome::NoMissingTranslations)
        }
    }
}

fn warn_if_no_sources(options: &RunOptions) {
    match has_source_files(
        &options.working_dir,
        &options.input,
        &options.settings.exclude_patterns,
    ) {
        Ok(true) => {}
        Ok(false) => tracing::warn!("No source files match '{}'", options.input),
        Err(e) => tracing::warn!("Could not check input glob '{}': {e}", options.input),
    }
}
