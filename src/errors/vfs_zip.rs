use thiserror::Error;

/// Crate-wide error type to avoid `Box<dyn Error>` in public APIs.
#[derive(Error, Debug)]
pub enum VfsZipError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("FileOption error: {0}")]
    FileOption(#[from] crate::errors::FileOptionError),

    #[error("Charset error: {0}")]
    Charset(#[from] crate::errors::CharsetError),

    #[error("Invalid options document: {0}")]
    InvalidDocument(String),

    #[error("Check failed for {0} file(s)")]
    CheckFailed(usize),
}
