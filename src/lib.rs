//! ZIP file options for a virtual file system.
//!
//! The crate provides the `zip:charset` [`FileOption`](types::FileOption),
//! the options bag it is applied to, and the link-time [`registry`] through
//! which options are constructed by name from JSON.
pub mod cmds;
pub mod config;
pub mod errors;
pub mod registry;
pub mod types;
