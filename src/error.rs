use std::{io, path::PathBuf};

/// Errors raised while writing or loading ROM images.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file at `path` could not be opened, read or written.
    #[error("file system error at '{}': {}", path.display(), source)]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn file_system(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// The path the failed operation targeted.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::FileSystem { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
