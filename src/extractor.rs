//! External `i18next-parser` integration
//!
//! The extractor reads a generated config file from the working directory,
//! scans the sources and writes one catalog per locale.

mod command;
mod guard;
mod preflight;
mod template;

use std::path::PathBuf;

pub use command::Extractor;
pub use guard::{
    CONFLICTING_CONFIG_FILES,
    GENERATED_CONFIG_FILE,
    GeneratedConfig,
    ensure_no_existing_config,
};
pub use preflight::has_source_files;
pub use template::{
    ConfigTemplate,
    TemplateValues,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error(
        "existing i18next-parser config found which will be overwritten ('{}'). remove it and run the command again",
        path.display()
    )]
    ConfigConflict { path: PathBuf },

    #[error("Failed to read config template '{}': {source}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write extractor config '{}': {source}", path.display())]
    WriteConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to start extractor `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Extractor `{command}` failed with {}", describe_exit(.code))]
    Failed { command: String, code: Option<i32> },
}

#[allow(clippy::ref_option)]
fn describe_exit(code: &Option<i32>) -> String {
    code.map_or_else(|| "no exit code (terminated by signal)".to_string(), |c| format!("exit code {c}"))
}
