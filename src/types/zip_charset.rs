use linkme::distributed_slice;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::fmt;

use crate::errors::FileOptionError;
use crate::registry::{FILE_OPTION_RESOLVERS, ResolverDef};
use crate::types::charset::Charset;
use crate::types::file_option::{FileOption, write_option_json};
use crate::types::fs_options::FileSystemOptions;
use crate::types::zip_config::ZipFileSystemConfigBuilder;

/// Charset the ZIP provider uses for entry names and comments.
///
/// Built from a JSON string naming a charset, or directly from a [`Charset`].
/// Immutable; applying it writes the ZIP builder's `charset` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZipCharset {
    value: Charset,
}

impl ZipCharset {
    pub const NAME: &'static str = "zip:charset";

    /// Parse the option from its JSON value.
    ///
    /// Anything other than a JSON string holding a known charset name,
    /// JSON `null` included, is an [`FileOptionError::InvalidOption`].
    pub fn new(value: &Value) -> Result<Self, FileOptionError> {
        let invalid = |source| FileOptionError::InvalidOption {
            name: Self::NAME,
            expected: "charset",
            source,
        };
        let name = value.as_str().ok_or_else(|| invalid(None))?;
        let charset = Charset::for_name(name).map_err(|e| invalid(Some(e)))?;
        Ok(Self { value: charset })
    }

    pub fn from_optional_value(value: Option<&Value>) -> Result<Self, FileOptionError> {
        Self::new(value.ok_or(FileOptionError::NullInput("value"))?)
    }

    pub fn from_optional_charset(charset: Option<Charset>) -> Result<Self, FileOptionError> {
        charset.map(Self::from).ok_or(FileOptionError::NullInput("charset"))
    }

    pub fn charset(&self) -> Charset {
        self.value
    }
}

impl From<Charset> for ZipCharset {
    fn from(value: Charset) -> Self {
        Self { value }
    }
}

impl FileOption for ZipCharset {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn value(&self) -> Value {
        Value::String(self.value.name().to_string())
    }

    fn apply(&self, opts: &mut FileSystemOptions) {
        tracing::debug!(charset = self.value.name(), "applying {}", Self::NAME);
        ZipFileSystemConfigBuilder::set_charset(opts, self.value);
    }
}

impl fmt::Display for ZipCharset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_option_json(self, f)
    }
}

impl Serialize for ZipCharset {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(Self::NAME, self.value.name())?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for ZipCharset {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // accept both the bare value and the `{"zip:charset": ...}` form `serialize` writes
        let value = match Value::deserialize(deserializer)? {
            Value::Object(mut map) => match (map.remove(Self::NAME), map.is_empty()) {
                (Some(v), true) => v,
                _ => return Err(de::Error::custom(format!("expected a single [{}] entry", Self::NAME))),
            },
            other => other,
        };
        ZipCharset::new(&value).map_err(de::Error::custom)
    }
}

#[distributed_slice(FILE_OPTION_RESOLVERS)]
static ZIP_CHARSET_RESOLVER: ResolverDef = ResolverDef {
    name: ZipCharset::NAME,
    description: "Charset for ZIP entry names and comments",
    resolve: resolve_zip_charset,
};

fn resolve_zip_charset(value: &Value) -> Result<Box<dyn FileOption>, FileOptionError> {
    Ok(Box::new(ZipCharset::new(value)?))
}
