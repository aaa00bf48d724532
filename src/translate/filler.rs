//! 空の翻訳をデフォルトロケールの値から機械翻訳で埋める

use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use super::provider::{
    TranslateError,
    TranslationProvider,
};
use crate::catalog::{
    Catalog,
    CatalogError,
    KeyPath,
    read_catalog,
    write_catalog,
};

/// 翻訳失敗時の振る舞い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum FailurePolicy {
    /// 途中までの結果を保存して即座に中断する
    #[default]
    Abort,
    /// 失敗したキーは空のまま残し、残りのキーとロケールの処理を続ける
    Continue,
}

#[derive(Error, Debug)]
pub enum FillError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Failed to translate \"{key}\" into '{locale}': {source}")]
    Translation {
        locale: String,
        key: String,
        #[source]
        source: TranslateError,
    },

    #[error("{failed} translation(s) failed, first was \"{key}\" into '{locale}': {source}")]
    Incomplete {
        failed: usize,
        locale: String,
        key: String,
        #[source]
        source: TranslateError,
    },
}

/// Summary of one fill pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Locales whose catalog was rewritten
    pub locales_updated: Vec<String>,
    /// Keys that received a translation
    pub translated: usize,
    /// Keys left empty because the default locale has no text for them
    pub skipped: usize,
}

/// First failure seen under [`FailurePolicy::Continue`]
struct DeferredFailure {
    locale: String,
    key: String,
    source: TranslateError,
    count: usize,
}

/// Fills empty catalog entries through a [`TranslationProvider`].
pub struct TranslationFiller<'a> {
    provider: &'a dyn TranslationProvider,
    policy: FailurePolicy,
}

impl std::fmt::Debug for TranslationFiller<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationFiller").field("policy", &self.policy).finish_non_exhaustive()
    }
}

impl<'a> TranslationFiller<'a> {
    #[must_use]
    pub fn new(provider: &'a dyn TranslationProvider) -> Self {
        Self { provider, policy: FailurePolicy::default() }
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// 各ターゲットロケールの空キーを翻訳して保存する
    ///
    /// 1. デフォルトロケールのカタログを読み込む
    /// 2. ターゲットごとに空キーを列挙（なければスキップ）
    /// 3. デフォルトロケールの値を翻訳し、同じキーパスに書き込む
    /// 4. ロケールの処理が終わったらカタログを保存する
    ///
    /// `FailurePolicy::Abort` では翻訳に失敗した時点のカタログを保存してからエラーを返す。
    ///
    /// # Errors
    /// - カタログの読み書きエラー
    /// - 翻訳エラー
    pub async fn fill(
        &self,
        output_dir: &Path,
        default_locale: &str,
        targets: &[String],
    ) -> Result<FillReport, FillError> {
        let default_catalog = read_catalog(output_dir, default_locale).await?;

        let mut report = FillReport::default();
        let mut deferred: Option<DeferredFailure> = None;

        for locale in targets {
            let mut catalog = read_catalog(output_dir, locale).await?;
            let empty_keys = catalog.empty_keys();

            if empty_keys.is_empty() {
                tracing::debug!(locale = %locale, "No missing translations");
                continue;
            }

            tracing::info!("Translating {locale}:");

            for key in &empty_keys {
                let outcome =
                    self.translate_key(&default_catalog, &mut catalog, key, locale, &mut report).await;

                let Err(source) = outcome else {
                    continue;
                };

                match self.policy {
                    FailurePolicy::Abort => {
                        write_catalog(output_dir, locale, &catalog).await?;
                        return Err(FillError::Translation {
                            locale: locale.clone(),
                            key: key.to_string(),
                            source,
                        });
                    }
                    FailurePolicy::Continue => {
                        tracing::warn!(locale = %locale, key = %key, "Translation failed: {source}");
                        match deferred.as_mut() {
                            Some(failure) => failure.count += 1,
                            None => {
                                deferred = Some(DeferredFailure {
                                    locale: locale.clone(),
                                    key: key.to_string(),
                                    source,
                                    count: 1,
                                });
                            }
                        }
                    }
                }
            }

            write_catalog(output_dir, locale, &catalog).await?;
            report.locales_updated.push(locale.clone());
        }

        if let Some(failure) = deferred {
            return Err(FillError::Incomplete {
                failed: failure.count,
                locale: failure.locale,
                key: failure.key,
                source: failure.source,
            });
        }

        tracing::info!(
            translated = report.translated,
            skipped = report.skipped,
            "Translations added"
        );

        Ok(report)
    }

    /// 1 キー分の翻訳
    ///
    /// デフォルトロケールに値がない（または空の）キーは警告を出してスキップする。
    async fn translate_key(
        &self,
        default_catalog: &Catalog,
        catalog: &mut Catalog,
        key: &KeyPath,
        locale: &str,
        report: &mut FillReport,
    ) -> Result<(), TranslateError> {
        let Some(text) = default_catalog.get_str(key).filter(|text| !text.is_empty()) else {
            tracing::warn!(locale = %locale, key = %key, "No source text in default locale, skipping");
            report.skipped += 1;
            return Ok(());
        };

        let translated = self.provider.translate(text, locale).await?;
        tracing::info!("\"{text}\" => \"{translated}\"");

        catalog.set(key, translated);
        report.translated += 1;
        Ok(())
    }
}
