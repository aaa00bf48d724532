//! Scratch copies of catalogs for lint mode

use std::path::Path;

use super::LintError;
use crate::catalog::catalog_path;

/// Copies each locale's catalog from `output_dir` into `lint_dir`.
///
/// The extractor later syncs the copies against the source code, so the real
/// catalogs are never touched in lint mode.
///
/// # Errors
/// - `LintError::Scratch`: the lint directory cannot be created
/// - `LintError::MissingCatalog`: a locale has no catalog yet
pub async fn prepare_scratch(
    output_dir: &Path,
    lint_dir: &Path,
    locales: &[String],
) -> Result<(), LintError> {
    tokio::fs::create_dir_all(lint_dir)
        .await
        .map_err(|source| LintError::Scratch { path: lint_dir.to_path_buf(), source })?;

    for locale in locales {
        let from = catalog_path(output_dir, locale);
        let to = catalog_path(lint_dir, locale);
        tracing::debug!(from = %from.display(), to = %to.display(), "Copying catalog");

        if let Err(source) = tokio::fs::copy(&from, &to).await {
            return Err(LintError::MissingCatalog { locale: locale.clone(), path: from, source });
        }
    }

    Ok(())
}
