//! 翻訳漏れのチェック（読み取り専用）

use std::path::Path;

use super::LintError;
use crate::catalog::read_catalog;

/// 各ロケールのカタログに空のキーがないか確認する
///
/// 最初に見つかった空キーで即座にエラーを返し、以降のロケールは読み込まない。
///
/// # Errors
/// - `LintError::MissingTranslation`: 空のキーが見つかった
/// - `LintError::Catalog`: カタログの読み込みエラー
pub async fn check_missing_translations(
    lint_dir: &Path,
    locales: &[String],
) -> Result<(), LintError> {
    for locale in locales {
        let catalog = read_catalog(lint_dir, locale).await?;

        if let Some(key) = catalog.empty_keys().first() {
            return Err(LintError::MissingTranslation {
                locale: locale.clone(),
                key: key.to_string(),
            });
        }

        tracing::debug!(locale = %locale, "No missing translations");
    }

    Ok(())
}
