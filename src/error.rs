use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::task::JoinError;

pub type Result<T> = std::result::Result<T, LoadError>;

/// The single error exit shared by every step of a composite load.
///
/// Each I/O variant carries the path it failed on, so the terminal message
/// names the resource without the caller re-deriving context.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to list directory {}", .path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to inspect {}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A worker died before reporting a result, usually from a panic inside
    /// its handler.
    #[error("worker task failed")]
    Task(#[from] JoinError),
}

impl LoadError {
    pub(crate) fn list(path: &Path, source: io::Error) -> Self {
        LoadError::List {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn stat(path: &Path, source: io::Error) -> Self {
        LoadError::Stat {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn open(path: &Path, source: io::Error) -> Self {
        LoadError::Open {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        LoadError::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}
