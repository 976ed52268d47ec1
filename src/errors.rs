// Central error aggregation module. This file defines the crate-wide
// `VfsZipError` and re-exports the narrower error types under `crate::errors::*`.
pub mod charset;
pub mod file_option;
pub mod vfs_zip;

pub use charset::CharsetError;
pub use file_option::FileOptionError;

pub use vfs_zip::VfsZipError;
pub type Result<T> = std::result::Result<T, VfsZipError>;
