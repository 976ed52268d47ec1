use thiserror::Error;

use crate::errors::CharsetError;

/// Errors raised while building, resolving or applying a file option
#[derive(Error, Debug)]
pub enum FileOptionError {
    /// A required argument was absent. Always a caller bug.
    #[error("Required argument not provided: {0}")]
    NullInput(&'static str),

    /// The JSON value cannot be turned into the option's type.
    #[error("FileOption value of [{name}] must be convertible to {expected}.")]
    InvalidOption {
        name: &'static str,
        expected: &'static str,
        #[source]
        source: Option<CharsetError>,
    },

    /// No resolver is registered under the name.
    #[error("No FileOption resolver registered for [{0}]")]
    UnknownOption(String),

    /// More than one resolver claims the name.
    #[error("More than one FileOption resolver registered for [{0}]")]
    DuplicateResolver(String),
}
