//! Translation provider abstraction

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Translation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Translation service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected translation response: {0}")]
    UnexpectedResponse(String),
}

/// External service turning text into another language.
///
/// The source language is implied by the provider (usually auto-detected).
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translates `text` into the `target` locale.
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError>;
}
