//! Google Translate client (`translate_a/single` endpoint)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::provider::{
    TranslateError,
    TranslationProvider,
};
use crate::config::TranslationConfig;

/// Upper bound on the error body echoed back in [`TranslateError::Status`]
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Translation provider backed by the public Google Translate endpoint.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
    source_language: String,
}

impl GoogleTranslator {
    /// Builds the HTTP client from settings.
    ///
    /// # Errors
    /// Returns [`TranslateError::Http`] when the client cannot be constructed.
    pub fn new(config: &TranslationConfig) -> Result<Self, TranslateError> {
        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            source_language: config.source_language.clone(),
        })
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslator {
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        tracing::debug!(target_locale = %target, "Requesting translation");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", self.source_language.as_str()),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Status {
                status: status.as_u16(),
                body: body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let payload: Value = response.json().await?;
        parse_response(&payload)
    }
}

/// レスポンスから翻訳結果を取り出す
///
/// 形式: `[[["Hola", "Hello", null, null, 10], ...], null, "en", ...]`
/// 長い文章は複数のセグメントに分割されるため、先頭要素を連結する。
fn parse_response(payload: &Value) -> Result<String, TranslateError> {
    let segments = payload
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::UnexpectedResponse(truncate(&payload.to_string())))?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(part);
        }
    }

    if translated.is_empty() {
        return Err(TranslateError::UnexpectedResponse(truncate(&payload.to_string())));
    }

    Ok(translated)
}

fn truncate(text: &str) -> String {
    text.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
