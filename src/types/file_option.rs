use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::types::fs_options::FileSystemOptions;

/// A named, JSON-valued setting that can be copied onto a [`FileSystemOptions`].
///
/// Implementations are immutable. Equality, hashing and the JSON form are
/// defined once for `dyn FileOption` in terms of `name` and `value`;
/// implementations usually forward their own `Display` to
/// [`write_option_json`].
pub trait FileOption: fmt::Debug + fmt::Display + Send + Sync {
    /// Option identity, e.g. `"zip:charset"`.
    fn name(&self) -> &'static str;

    /// JSON form of the option value.
    fn value(&self) -> Value;

    /// Write this option into the caller's options bag.
    fn apply(&self, opts: &mut FileSystemOptions);
}

/// Render `{"<name>":<value>}` for an option.
pub fn write_option_json(option: &dyn FileOption, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut map = serde_json::Map::with_capacity(1);
    map.insert(option.name().to_string(), option.value());
    write!(f, "{}", Value::Object(map))
}

impl PartialEq for dyn FileOption {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.value() == other.value()
    }
}

impl Eq for dyn FileOption {}

impl Hash for dyn FileOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
        // serde_json::Value has no Hash impl; its compact text is canonical enough
        self.value().to_string().hash(state);
    }
}

impl Serialize for dyn FileOption {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.name(), &self.value())?;
        map.end()
    }
}
