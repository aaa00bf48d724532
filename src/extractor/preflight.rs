//! 入力 glob がソースファイルに一致するかの事前確認

use std::path::Path;

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;

/// 入力 glob に一致するソースファイルが 1 つでもあるか
///
/// `.gitignore` を尊重しつつ作業ディレクトリを走査し、最初に一致した時点で終了する。
///
/// # Errors
/// - 無効な glob パターン
pub fn has_source_files(
    working_dir: &Path,
    input: &str,
    exclude_patterns: &[String],
) -> Result<bool, globset::Error> {
    let include = Glob::new(input.trim_start_matches("./"))?.compile_matcher();
    let exclude = build_glob_set(exclude_patterns)?;

    for result in WalkBuilder::new(working_dir)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let Ok(relative_path) = entry.path().strip_prefix(working_dir) else {
            continue;
        };
        if include.is_match(relative_path) && !exclude.is_match(relative_path) {
            tracing::debug!(path = %relative_path.display(), "Found source file");
            return Ok(true);
        }
    }

    Ok(false)
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    builder.build()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "t('hello')").unwrap();
    }

    #[rstest]
    #[case("src/**/*.{js,jsx,ts,tsx}", true)]
    #[case("./src/**/*.tsx", true)]
    #[case("lib/**/*.ts", false)]
    #[case("src/**/*.vue", false)]
    fn test_has_source_files(#[case] input: &str, #[case] expected: bool) {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "src/components/App.tsx");

        let result = has_source_files(temp_dir.path(), input, &[]).unwrap();

        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_has_source_files_respects_excludes() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "node_modules/pkg/index.js");

        let excludes = vec!["node_modules/**".to_string()];
        let result = has_source_files(temp_dir.path(), "**/*.js", &excludes).unwrap();

        assert!(!result);
    }

    #[rstest]
    fn test_has_source_files_invalid_glob() {
        let temp_dir = TempDir::new().unwrap();

        assert!(has_source_files(temp_dir.path(), "src/**/*.{js,ts", &[]).is_err());
    }
}
