//! Locale list handling

use std::collections::HashSet;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("At least one locale is required. Example: \"en,es,fr\"")]
    Empty,

    #[error("Locale at position {position} is empty. Example: \"en,es,fr\"")]
    EmptyEntry { position: usize },

    #[error("Locale '{0}' is listed more than once")]
    Duplicate(String),
}

/// 順序付きのロケール一覧
///
/// 先頭がデフォルトロケール（翻訳元）で、自動翻訳の対象にはならない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    /// 先頭がデフォルトロケール（空でないことを保証）
    locales: Vec<String>,
}

impl LocaleSet {
    /// # Errors
    /// - 空の一覧
    /// - 空の要素
    /// - 重複したロケール
    pub fn new<I, S>(locales: I) -> Result<Self, LocaleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let locales: Vec<String> = locales.into_iter().map(Into::into).collect();
        if locales.is_empty() {
            return Err(LocaleError::Empty);
        }

        {
            let mut seen = HashSet::new();
            for (index, locale) in locales.iter().enumerate() {
                if locale.is_empty() {
                    return Err(LocaleError::EmptyEntry { position: index + 1 });
                }
                if !seen.insert(locale.as_str()) {
                    return Err(LocaleError::Duplicate(locale.clone()));
                }
            }
        }

        Ok(Self { locales })
    }

    /// The source-of-truth locale.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        self.locales.first().map_or("", String::as_str)
    }

    /// Every locale except the default one, in the given order.
    #[must_use]
    pub fn targets(&self) -> &[String] {
        self.locales.get(1..).unwrap_or_default()
    }

    #[must_use]
    pub fn all(&self) -> &[String] {
        &self.locales
    }
}

impl FromStr for LocaleSet {
    type Err = LocaleError;

    /// カンマ区切りの文字列（例: `en,es,fr`）をパースする
    fn from_str(csv: &str) -> Result<Self, Self::Err> {
        if csv.trim().is_empty() {
            return Err(LocaleError::Empty);
        }
        Self::new(csv.split(',').map(str::trim))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[googletest::test]
    fn test_parse_csv() {
        let locales: LocaleSet = "en,es,ca".parse().unwrap();

        expect_that!(locales.default_locale(), eq("en"));
        expect_that!(locales.targets().to_vec(), elements_are![eq("es"), eq("ca")]);
        expect_that!(locales.all().len(), eq(3));
    }

    #[googletest::test]
    fn test_parse_trims_whitespace() {
        let locales: LocaleSet = " en , fr ".parse().unwrap();

        expect_that!(locales.default_locale(), eq("en"));
        expect_that!(locales.targets().to_vec(), elements_are![eq("fr")]);
    }

    #[googletest::test]
    fn test_single_locale_has_no_targets() {
        let locales: LocaleSet = "en".parse().unwrap();

        expect_that!(locales.targets().to_vec(), is_empty());
    }

    #[rstest]
    #[case("", LocaleError::Empty)]
    #[case("   ", LocaleError::Empty)]
    #[case("en,,es", LocaleError::EmptyEntry { position: 2 })]
    #[case("en,es,", LocaleError::EmptyEntry { position: 3 })]
    #[case("en,es,en", LocaleError::Duplicate("en".to_string()))]
    fn test_parse_errors(#[case] csv: &str, #[case] expected: LocaleError) {
        assert_eq!(csv.parse::<LocaleSet>(), Err(expected));
    }
}
