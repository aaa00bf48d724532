//! Locale catalog model
//!
//! A catalog is one locale's JSON translation file: a nested mapping whose
//! leaves are strings, possibly inside arrays. An empty string marks a key that still needs a
//! translation.

mod key_path;
pub mod store;

pub use key_path::KeyPath;
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    Map,
    Value,
};
pub use store::{
    CatalogError,
    catalog_path,
    read_catalog,
    write_catalog,
};

/// One locale's translation tree.
///
/// Key order is preserved as read from disk, so writing a catalog back only
/// changes the values that were touched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    /// Top-level entries
    entries: Map<String, Value>,
}

impl Catalog {
    /// 空のカタログを作成
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the key-paths whose leaf is the empty string.
    #[must_use]
    pub fn empty_keys(&self) -> Vec<KeyPath> {
        find_empty_keys(&self.entries)
    }

    /// Looks up the value stored at `path`.
    ///
    /// A segment addresses an array element when it is a valid index.
    #[must_use]
    pub fn get(&self, path: &KeyPath) -> Option<&Value> {
        let (first, rest) = path.segments().split_first()?;
        let mut current = self.entries.get(first)?;
        for segment in rest {
            current = match current {
                Value::Object(nested) => nested.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Looks up the string leaf stored at `path`.
    #[must_use]
    pub fn get_str(&self, path: &KeyPath) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// Stores `value` at `path`.
    ///
    /// Existing array elements are written by index. Missing intermediate
    /// objects are created and scalar intermediates are replaced. An existing
    /// leaf keeps its position in the mapping.
    pub fn set(&mut self, path: &KeyPath, value: impl Into<String>) {
        let Some((first, rest)) = path.segments().split_first() else {
            return;
        };
        let slot = self.entries.entry(first.clone()).or_insert(Value::Null);
        set_value(slot, rest, Value::String(value.into()));
    }
}

/// `target` から `segments` を辿った位置に `value` を書き込む
fn set_value(target: &mut Value, segments: &[String], value: Value) {
    let Some((segment, rest)) = segments.split_first() else {
        *target = value;
        return;
    };

    let element = match target {
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|index| items.get_mut(index)),
        _ => None,
    };
    if let Some(item) = element {
        set_value(item, rest, value);
        return;
    }

    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    let Value::Object(nested) = target else {
        return;
    };
    let slot = nested.entry(segment.clone()).or_insert(Value::Null);
    set_value(slot, rest, value);
}

impl From<Map<String, Value>> for Catalog {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

/// 空文字列の値を持つキーパスを列挙する
///
/// ネストしたオブジェクトと配列は再帰的に辿り、親キー（配列は添字）を連結したパスを返す。
/// 順序は各階層の挿入順に従う。空でない文字列・数値・真偽値・null は無視する。
///
/// # Examples
/// ```
/// use serde_json::json;
/// use i18n_autotranslate::catalog::find_empty_keys;
///
/// let json = json!({ "a": { "b": "", "c": "x" }, "steps": ["", "done"], "d": "" });
/// let keys: Vec<String> =
///     find_empty_keys(json.as_object().unwrap()).iter().map(ToString::to_string).collect();
/// assert_eq!(keys, ["a.b", "steps.0", "d"]);
/// ```
#[must_use]
pub fn find_empty_keys(entries: &Map<String, Value>) -> Vec<KeyPath> {
    let mut result = Vec::new();
    let root = KeyPath::root();
    for (key, value) in entries {
        collect_empty_keys(value, root.child(key), &mut result);
    }
    result
}

/// `find_empty_keys` の再帰本体
fn collect_empty_keys(value: &Value, path: KeyPath, result: &mut Vec<KeyPath>) {
    match value {
        Value::Object(nested) => {
            for (key, child) in nested {
                collect_empty_keys(child, path.child(key), result);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                collect_empty_keys(item, path.child(&index.to_string()), result);
            }
        }
        Value::String(s) if s.is_empty() => result.push(path),
        _ => {}
    }
}
