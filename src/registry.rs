//! Link-time registry of [`FileOption`] resolvers.
//!
//! Option modules add a [`ResolverDef`] to [`FILE_OPTION_RESOLVERS`] with
//! `#[distributed_slice(FILE_OPTION_RESOLVERS)]`; the lookups here only ever
//! see the slice, never the option types behind it.

use linkme::distributed_slice;
use serde_json::Value;
use std::fmt;

use crate::errors::FileOptionError;
use crate::types::file_option::FileOption;

/// Builds one option type from its JSON value.
#[derive(Clone, Copy)]
pub struct ResolverDef {
    /// Option name the resolver answers to (e.g. `"zip:charset"`).
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
    pub resolve: fn(&Value) -> Result<Box<dyn FileOption>, FileOptionError>,
}

impl ResolverDef {
    pub fn new_instance(&self, value: &Value) -> Result<Box<dyn FileOption>, FileOptionError> {
        (self.resolve)(value)
    }
}

impl fmt::Debug for ResolverDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverDef")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// Registry of all file option resolvers.
#[distributed_slice]
pub static FILE_OPTION_RESOLVERS: [ResolverDef];

/// Find the single resolver registered under `name`.
pub fn find_resolver(name: &str) -> Result<&'static ResolverDef, FileOptionError> {
    find_unique(&FILE_OPTION_RESOLVERS, name)
}

fn find_unique<'a>(resolvers: &'a [ResolverDef], name: &str) -> Result<&'a ResolverDef, FileOptionError> {
    let mut found = resolvers.iter().filter(|r| r.name == name);
    match (found.next(), found.next()) {
        (Some(r), None) => Ok(r),
        (Some(_), Some(_)) => Err(FileOptionError::DuplicateResolver(name.to_string())),
        (None, _) => Err(FileOptionError::UnknownOption(name.to_string())),
    }
}

/// Resolvers whose name starts with `prefix`, sorted by name.
pub fn resolvers_with_prefix(prefix: &str) -> Vec<&'static ResolverDef> {
    let mut out: Vec<_> = FILE_OPTION_RESOLVERS.iter().filter(|r| r.name.starts_with(prefix)).collect();
    out.sort_by_key(|r| r.name);
    out
}

pub fn all_resolvers() -> Vec<&'static ResolverDef> {
    resolvers_with_prefix("")
}

/// Construct the option registered under `name` from its JSON value.
///
/// `None` means the caller had no value at all, which is reported as
/// [`FileOptionError::NullInput`] rather than a validation failure.
pub fn resolve(name: &str, value: Option<&Value>) -> Result<Box<dyn FileOption>, FileOptionError> {
    let resolver = find_resolver(name)?;
    let value = value.ok_or(FileOptionError::NullInput("value"))?;
    let option = resolver.new_instance(value)?;
    tracing::debug!(option = %option, "resolved file option");
    Ok(option)
}
