use thiserror::Error;

/// Errors raised while looking up a charset by name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CharsetError {
    #[error("Illegal charset name: {0:?}")]
    IllegalName(String),

    #[error("Unsupported charset: {0}")]
    Unsupported(String),
}
