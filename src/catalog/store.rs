//! カタログファイルの読み書き
//!
//! ロケールごとに `<dir>/<locale>.json` を 1 ファイルとして扱う。

use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use super::Catalog;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write catalog '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize catalog for '{locale}': {source}")]
    Serialize {
        locale: String,
        #[source]
        source: serde_json::Error,
    },
}

/// ロケールのカタログファイルのパスを返す
#[must_use]
pub fn catalog_path(dir: &Path, locale: &str) -> PathBuf {
    dir.join(format!("{locale}.json"))
}

/// カタログを読み込む
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー（ルートがオブジェクトでない場合を含む）
pub async fn read_catalog(dir: &Path, locale: &str) -> Result<Catalog, CatalogError> {
    let path = catalog_path(dir, locale);
    tracing::debug!(path = %path.display(), "Reading catalog");

    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| CatalogError::Read { path: path.clone(), source })?;

    serde_json::from_str(&content).map_err(|source| CatalogError::Parse { path, source })
}

/// カタログを 2 スペースインデントで書き出す
///
/// 親ディレクトリが存在しない場合は作成する。
///
/// # Errors
/// - シリアライズエラー
/// - ディレクトリ作成・ファイル書き込みエラー
pub async fn write_catalog(dir: &Path, locale: &str, catalog: &Catalog) -> Result<(), CatalogError> {
    let path = catalog_path(dir, locale);
    tracing::debug!(path = %path.display(), "Writing catalog");

    let content = serde_json::to_string_pretty(catalog)
        .map_err(|source| CatalogError::Serialize { locale: locale.to_string(), source })?;

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| CatalogError::Write { path: path.clone(), source })?;
    tokio::fs::write(&path, content).await.map_err(|source| CatalogError::Write { path, source })
}
