//! Extractor config template rendering

use std::path::Path;

use serde_json::Value;

use super::ExtractorError;

/// Config bundled with the binary.
const BUNDLED_TEMPLATE: &str = include_str!("../../templates/i18next-parser.config.js");

const OUTPUT_PLACEHOLDER: &str = "___OUTPUT___";
const INPUT_PLACEHOLDER: &str = "___INPUT___";
const DEFAULT_LOCALE_PLACEHOLDER: &str = "___DEFAULT_LOCALE___";
const LOCALES_PLACEHOLDER: &str = "___LOCALES___";

/// Values substituted into the template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateValues<'a> {
    /// Directory the extractor writes `<locale>.json` files into
    pub output_dir: &'a Path,
    /// Source glob, e.g. `src/**/*.{js,jsx,ts,tsx}`
    pub input: &'a str,
    pub default_locale: &'a str,
    pub locales: &'a [String],
}

impl TemplateValues<'_> {
    /// `<output_dir>/$LOCALE.json`
    #[must_use]
    pub fn output_pattern(&self) -> String {
        format!("{}/$LOCALE.json", self.output_dir.display())
    }

    /// JSON array of the locales, e.g. `["en","es"]`
    #[must_use]
    pub fn locales_json(&self) -> String {
        Value::Array(self.locales.iter().cloned().map(Value::String).collect()).to_string()
    }
}

/// i18next-parser 設定ファイルのテンプレート
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigTemplate {
    text: String,
}

impl ConfigTemplate {
    #[must_use]
    pub fn bundled() -> Self {
        Self { text: BUNDLED_TEMPLATE.to_string() }
    }

    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// テンプレートを読み込む
    ///
    /// `template_path` が指定されていれば作業ディレクトリからの相対パスとして読み込み、
    /// なければ同梱のテンプレートを使う。
    ///
    /// # Errors
    /// - テンプレートファイルの読み込みエラー
    pub async fn load(template_path: Option<&str>, working_dir: &Path) -> Result<Self, ExtractorError> {
        let Some(template_path) = template_path else {
            return Ok(Self::bundled());
        };

        let path = working_dir.join(template_path);
        tracing::debug!(path = %path.display(), "Loading config template");

        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ExtractorError::Template { path, source })?;
        Ok(Self { text })
    }

    /// プレースホルダーを置換した設定ファイルの内容を返す
    #[must_use]
    pub fn render(&self, values: &TemplateValues<'_>) -> String {
        self.text
            .replace(OUTPUT_PLACEHOLDER, &values.output_pattern())
            .replace(INPUT_PLACEHOLDER, values.input)
            .replace(DEFAULT_LOCALE_PLACEHOLDER, values.default_locale)
            .replace(LOCALES_PLACEHOLDER, &values.locales_json())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use tempfile::TempDir;

    use super::*;

    fn locales() -> Vec<String> {
        vec!["en".to_string(), "es".to_string(), "ca".to_string()]
    }

    #[googletest::test]
    fn test_render_substitutes_all_placeholders() {
        let template = ConfigTemplate::from_text(
            "output: '___OUTPUT___', input: '___INPUT___', default: '___DEFAULT_LOCALE___', locales: ___LOCALES___",
        );
        let locales = locales();
        let values = TemplateValues {
            output_dir: Path::new("src/locales"),
            input: "src/**/*.{js,ts}",
            default_locale: "en",
            locales: &locales,
        };

        let rendered = template.render(&values);

        expect_that!(
            rendered,
            eq("output: 'src/locales/$LOCALE.json', input: 'src/**/*.{js,ts}', default: 'en', locales: [\"en\",\"es\",\"ca\"]")
        );
    }

    #[googletest::test]
    fn test_bundled_template_has_no_leftover_placeholders() {
        let locales = locales();
        let values = TemplateValues {
            output_dir: Path::new("/tmp/out"),
            input: "src/**/*.tsx",
            default_locale: "en",
            locales: &locales,
        };

        let rendered = ConfigTemplate::bundled().render(&values);

        expect_that!(rendered, not(contains_substring("___")));
        expect_that!(rendered, contains_substring("output: '/tmp/out/$LOCALE.json'"));
        expect_that!(rendered, contains_substring("const defaultLocale = 'en';"));
        expect_that!(rendered, contains_substring("locales: [\"en\",\"es\",\"ca\"]"));
    }

    #[tokio::test]
    async fn test_load_custom_template() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("custom.js"), "module.exports = { input: '___INPUT___' };")
            .unwrap();

        let template = ConfigTemplate::load(Some("custom.js"), temp_dir.path()).await.unwrap();

        assert_eq!(template, ConfigTemplate::from_text("module.exports = { input: '___INPUT___' };"));
    }

    #[tokio::test]
    async fn test_load_missing_template() {
        let temp_dir = TempDir::new().unwrap();

        let result = ConfigTemplate::load(Some("missing.js"), temp_dir.path()).await;

        assert!(matches!(result, Err(ExtractorError::Template { .. })));
    }

    #[tokio::test]
    async fn test_load_defaults_to_bundled() {
        let temp_dir = TempDir::new().unwrap();

        let template = ConfigTemplate::load(None, temp_dir.path()).await.unwrap();

        assert_eq!(template, ConfigTemplate::bundled());
    }
}
