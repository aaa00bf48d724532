//! i18n-autotranslate
//!
//! i18next-parser でロケールカタログをソースコードと同期し、
//! 空の翻訳を機械翻訳で埋める（または翻訳漏れを lint する）CLI

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod lint;
pub mod locale;
pub mod runner;
pub mod translate;

mod test_utils;

pub use error::Error;
