//! Addresses of leaves inside a catalog

use std::fmt;

/// Path from the catalog root to one leaf.
///
/// Segments are kept separately so a key containing `.` still addresses a
/// single entry. The textual form joins segments with `.`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    /// Keys from the root, outermost first
    segments: Vec<String>,
}

impl KeyPath {
    /// Separator used by the textual form
    pub const SEPARATOR: char = '.';

    /// The empty path (the catalog itself).
    #[must_use]
    pub const fn root() -> Self {
        Self { segments: Vec::new() }
    }

    /// ドット区切りの文字列からパスを作成
    ///
    /// `"common.hello"` → `["common", "hello"]`
    #[cfg(test)]
    pub(crate) fn parse(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::root();
        }
        Self { segments: dotted.split(Self::SEPARATOR).map(str::to_string).collect() }
    }

    /// Returns a new path with `key` appended.
    #[must_use]
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(key.to_string());
        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                write!(f, "{}", Self::SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}
