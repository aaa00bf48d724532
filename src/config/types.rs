use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::locale::LocaleError;
use crate::translate::FailurePolicy;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "excludePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid --locales value: {0}")]
    Locales(#[from] LocaleError),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutotranslateSettings {
    pub extractor: ExtractorConfig,

    /// Scratch directory for lint mode, relative to the working directory.
    pub lint_directory: String,

    /// Paths skipped when checking that the input glob matches anything.
    pub exclude_patterns: Vec<String>,

    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractorConfig {
    /// Shell command running `i18next-parser`.
    pub command: String,

    /// Arguments appended in lint mode so the extractor only syncs existing keys.
    pub sync_args: String,

    /// Config template to render instead of the bundled one.
    pub template_path: Option<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            command: "deno run -A npm:i18next-parser".to_string(),
            sync_args: "-s".to_string(),
            template_path: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationConfig {
    pub endpoint: String,

    /// `auto` lets the service detect the source language.
    pub source_language: String,

    pub timeout_secs: u64,

    /// What to do when a single key fails to translate.
    pub on_error: FailurePolicy,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
            source_language: "auto".to_string(),
            timeout_secs: 30,
            on_error: FailurePolicy::default(),
        }
    }
}

impl AutotranslateSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Zero timeout
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.extractor.command.trim().is_empty() {
            errors.push(ValidationError::new(
                "extractor.command",
                "The command cannot be empty. Example: \"npx i18next-parser\"",
            ));
        }

        if self.lint_directory.is_empty() {
            errors.push(ValidationError::new(
                "lintDirectory",
                "The directory cannot be empty. Example: \"node_modules/.tmp/i18linter\"",
            ));
        }

        for (index, pattern) in self.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if self.translation.endpoint.is_empty() {
            errors.push(ValidationError::new(
                "translation.endpoint",
                "The endpoint cannot be empty",
            ));
        }

        if self.translation.timeout_secs == 0 {
            errors.push(ValidationError::new(
                "translation.timeoutSecs",
                "The timeout must be at least 1 second",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for AutotranslateSettings {
    fn default() -> Self {
        Self {
            extractor: ExtractorConfig::default(),
            lint_directory: "node_modules/.tmp/i18linter".to_string(),
            exclude_patterns: vec!["node_modules/**".to_string()],
            translation: TranslationConfig::default(),
        }
    }
}
