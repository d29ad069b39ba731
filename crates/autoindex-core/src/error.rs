//! Error types for barrel regeneration.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for autoindex operations.
pub type Result<T> = std::result::Result<T, AutoindexError>;

#[derive(Error, Debug)]
pub enum AutoindexError {
    /// The directory listing no longer contains an `autoindex` entry.
    #[error("could not find autoindex file in dir {}", .dir.display())]
    MarkerNotFound { dir: PathBuf },

    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The change-event subscription could not be created or registered.
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),
}

impl AutoindexError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
