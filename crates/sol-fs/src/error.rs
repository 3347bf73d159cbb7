use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to replace '{path}': {source}")]
    Replace { path: PathBuf, source: io::Error },

    #[error("retry limit exceeded replacing '{path}'")]
    RetryLimitExceeded { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;
