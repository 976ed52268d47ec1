pub mod charset;
pub mod file_option;
pub mod fs_options;
pub mod zip_charset;
pub mod zip_config;

// Re-export the common types for convenience
pub use charset::Charset;
pub use file_option::{FileOption, write_option_json};
pub use fs_options::FileSystemOptions;
pub use zip_charset::ZipCharset;
pub use zip_config::ZipFileSystemConfigBuilder;
