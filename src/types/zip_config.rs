use crate::types::charset::Charset;
use crate::types::fs_options::FileSystemOptions;

/// View over [`FileSystemOptions`] for the slots the ZIP provider reads.
pub struct ZipFileSystemConfigBuilder;

impl ZipFileSystemConfigBuilder {
    /// Namespace of every ZIP provider slot.
    pub const SCOPE: &'static str = "zip";
    pub const CHARSET: &'static str = "charset";

    /// Charset used for entry names and comments when none is configured.
    pub const DEFAULT_CHARSET: Charset = Charset::UTF_8;

    pub fn set_charset(opts: &mut FileSystemOptions, charset: Charset) {
        opts.set_param(Self::SCOPE, Self::CHARSET, charset);
    }

    pub fn charset(opts: &FileSystemOptions) -> Option<Charset> {
        opts.get_param::<Charset>(Self::SCOPE, Self::CHARSET).copied()
    }

    pub fn charset_or_default(opts: &FileSystemOptions) -> Charset {
        Self::charset(opts).unwrap_or(Self::DEFAULT_CHARSET)
    }
}
