//! Machine translation of missing catalog entries
mod filler;
mod google;
mod provider;

pub use filler::{
    FailurePolicy,
    FillError,
    FillReport,
    TranslationFiller,
};
pub use google::GoogleTranslator;
pub use provider::{
    TranslateError,
    TranslationProvider,
};
