use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the tree, snapshot and header operations.
///
/// None of these abort the process; callers log them and move on.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A directory listing could not be read during the walk.
    #[error("Error accessing {}: {source}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading or writing a snapshot or markdown file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No fenced block could be located in a markdown document.
    #[error("{missing} not found in {}", path.display())]
    NotFound { path: PathBuf, missing: FenceError },

    /// The target file is missing or is not a markdown document.
    #[error("{} {reason}", path.display())]
    InvalidInput { path: PathBuf, reason: &'static str },
}

/// Which half of a fenced block is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FenceError {
    #[error("opening fence")]
    MissingOpen,
    #[error("closing fence")]
    MissingClose,
}

impl SyncError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            source,
        }
    }
}
