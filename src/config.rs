//! Loading file options from a JSON options document.
//!
//! A document is one JSON object mapping option names to their values:
//!
//! ```json
//! { "zip:charset": "ISO-8859-1" }
//! ```

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::errors::{Result, VfsZipError};
use crate::registry;
use crate::types::file_option::FileOption;
use crate::types::fs_options::FileSystemOptions;

/// Resolve every entry of an options document, in option-name order.
pub fn parse_file_options(content: &str) -> Result<Vec<Box<dyn FileOption>>> {
    let doc: Value = serde_json::from_str(content)?;
    let entries = match doc {
        Value::Object(map) => map,
        other => {
            return Err(VfsZipError::InvalidDocument(format!(
                "expected a JSON object of file options, found {}",
                json_kind(&other)
            )));
        }
    };

    let mut options = Vec::with_capacity(entries.len());
    for (name, value) in &entries {
        options.push(registry::resolve(name, Some(value))?);
    }
    Ok(options)
}

/// Read and resolve an options document from disk.
pub fn load_file_options(path: &Path) -> Result<Vec<Box<dyn FileOption>>> {
    let content = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loading file options");
    parse_file_options(&content)
}

/// Apply options in order onto a fresh bag.
pub fn build_file_system_options(options: &[Box<dyn FileOption>]) -> FileSystemOptions {
    let mut opts = FileSystemOptions::new();
    for option in options {
        option.apply(&mut opts);
    }
    opts
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FileOptionError;
    use crate::types::charset::Charset;
    use crate::types::zip_config::ZipFileSystemConfigBuilder;

    #[test]
    fn test_parse_and_apply() {
        let options = parse_file_options(r#"{ "zip:charset": "latin1" }"#).unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].to_string(), r#"{"zip:charset":"ISO-8859-1"}"#);

        let opts = build_file_system_options(&options);
        assert_eq!(ZipFileSystemConfigBuilder::charset(&opts), Some(Charset::ISO_8859_1));
    }

    #[test]
    fn test_empty_document() {
        let options = parse_file_options("{}").unwrap();
        assert!(options.is_empty());
        assert!(build_file_system_options(&options).is_empty());
    }

    #[test]
    fn test_not_an_object() {
        let err = parse_file_options(r#"["zip:charset"]"#).unwrap_err();
        assert!(matches!(err, VfsZipError::InvalidDocument(ref m) if m.contains("an array")));
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(parse_file_options("{"), Err(VfsZipError::Json(_))));
    }

    #[test]
    fn test_unknown_option() {
        let err = parse_file_options(r#"{ "zip:password": "secret" }"#).unwrap_err();
        assert!(matches!(err, VfsZipError::FileOption(FileOptionError::UnknownOption(_))));
    }

    #[test]
    fn test_invalid_value() {
        let err = parse_file_options(r#"{ "zip:charset": 1 }"#).unwrap_err();
        assert!(matches!(err, VfsZipError::FileOption(FileOptionError::InvalidOption { .. })));
    }
}
