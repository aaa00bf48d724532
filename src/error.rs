//! Crate-level error

use thiserror::Error;

use crate::config::ConfigError;
use crate::extractor::ExtractorError;
use crate::lint::LintError;
use crate::translate::{
    FillError,
    TranslateError,
};

/// Any failure that ends a run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to determine the working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error(transparent)]
    Fill(#[from] FillError),

    #[error(transparent)]
    Lint(#[from] LintError),
}
