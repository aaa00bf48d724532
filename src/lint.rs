//! Lint mode: verify that no catalog has an untranslated key
mod checker;
mod scratch;

use std::path::PathBuf;

pub use checker::check_missing_translations;
pub use scratch::prepare_scratch;
use thiserror::Error;

use crate::catalog::CatalogError;

#[derive(Error, Debug)]
pub enum LintError {
    #[error("no translations found for {locale} ('{}'): {source}", path.display())]
    MissingCatalog {
        locale: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to prepare lint directory '{}': {source}", path.display())]
    Scratch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing translation key: \"{key}\" ({locale})")]
    MissingTranslation { locale: String, key: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
