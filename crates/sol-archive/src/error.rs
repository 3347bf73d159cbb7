use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("stream is not gzip data")]
    NotGzip,

    #[error("failed to begin decompression: {0}")]
    Decompression(#[source] io::Error),

    #[error("malformed archive: {0}")]
    Malformed(#[source] io::Error),

    #[error("entry name '{entry}' has no components left after stripping {strip}")]
    ShallowEntryName { entry: PathBuf, strip: usize },

    #[error("entry '{entry}' resolves outside the destination: '{resolved}'")]
    PathEscape { entry: PathBuf, resolved: PathBuf },

    #[error("symlink target is an absolute path: '{target}' at '{link}'")]
    AbsoluteLinkTarget { target: PathBuf, link: PathBuf },

    #[error("symlink target escapes the destination: '{target}' -> '{resolved}'")]
    LinkEscape { target: PathBuf, resolved: PathBuf },

    #[error("unsupported entry type {kind:?} for '{entry}'")]
    UnsupportedEntryType {
        kind: tar::EntryType,
        entry: PathBuf,
    },

    #[error("failed to create directory '{path}': {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write file '{path}': {source}")]
    WriteFile { path: PathBuf, source: io::Error },

    #[error("failed to create symlink '{link}': {source}")]
    CreateSymlink { link: PathBuf, source: io::Error },

    #[error("failed to set permissions on '{path}': {source}")]
    SetPermissions { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
