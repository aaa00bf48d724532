//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパーを提供します。
#![cfg(test)]

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::translate::{
    TranslateError,
    TranslationProvider,
};

/// 呼び出しを記録するテスト用の翻訳プロバイダー
///
/// 翻訳結果は `[<target>] <text>` の形式になる。
#[derive(Debug, Default)]
pub(crate) struct RecordingProvider {
    /// `(text, target)` の呼び出し履歴
    calls: Mutex<Vec<(String, String)>>,
    /// 失敗させる呼び出し番号（1 始まり）
    fail_on: Option<usize>,
}

impl RecordingProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// `call_number` 回目の呼び出しだけ失敗するプロバイダーを作成
    pub(crate) fn failing_on(call_number: usize) -> Self {
        Self { calls: Mutex::default(), fail_on: Some(call_number) }
    }

    pub(crate) fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TranslationProvider for RecordingProvider {
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        let call_number = {
            let mut calls = self
                .calls
                .lock()
                .map_err(|_| TranslateError::UnexpectedResponse("poisoned call log".to_string()))?;
            calls.push((text.to_string(), target.to_string()));
            calls.len()
        };

        if self.fail_on == Some(call_number) {
            return Err(TranslateError::Status {
                status: 503,
                body: format!("call {call_number} refused"),
            });
        }

        Ok(format!("[{target}] {text}"))
    }
}

/// `<dir>/<locale>.json` に JSON を書き込む
///
/// # Panics
/// 書き込みに失敗した場合
#[allow(clippy::unwrap_used)]
pub(crate) fn write_json(dir: &Path, locale: &str, value: &Value) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join(format!("{locale}.json")), serde_json::to_string_pretty(value).unwrap())
        .unwrap();
}
