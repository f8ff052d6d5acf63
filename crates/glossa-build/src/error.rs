//! Error types for a generator run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generator run.
///
/// None of these are recovered from: the run stops at the first one and any
/// documents already written stay as they are.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The documentation root does not exist or is not a directory.
    #[error("documentation root not found: {}", path.display())]
    MissingRoot { path: PathBuf },

    /// A template required for a document is missing.
    #[error("template not found: {}", path.display())]
    MissingTemplate { path: PathBuf },

    /// A template or markdown note could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A generated document could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Listing a directory failed during the walk.
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

impl BuildError {
    /// Returns `true` when the error is about missing input (root or
    /// template) rather than a failed I/O operation.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingRoot { .. } | Self::MissingTemplate { .. })
    }

    /// The path the error is about, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::MissingRoot { path }
            | Self::MissingTemplate { path }
            | Self::Read { path, .. }
            | Self::Write { path, .. } => Some(path.as_path()),
            Self::Walk(e) => e.path(),
        }
    }
}

/// Convenience alias for generator results.
pub type BuildResult<T> = std::result::Result<T, BuildError>;
