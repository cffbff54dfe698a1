//! Error types for table-of-contents generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using TocError.
pub type Result<T> = std::result::Result<T, TocError>;

/// Errors that can occur while generating a table of contents.
#[derive(Error, Debug)]
pub enum TocError {
    /// The source path does not point at a directory.
    #[error("{} is not a directory.", path.display())]
    NotADirectory { path: PathBuf },

    /// The source directory holds no qualifying documents.
    #[error("The directory {} does not contain any valid input files.", path.display())]
    NoInputFiles { path: PathBuf },

    /// The reserved title document is missing.
    #[error("The directory {} does not contain an {file} file.", path.display())]
    MissingIndex { path: PathBuf, file: String },

    /// Failed to read a source document.
    #[error("failed to read file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the descriptor.
    #[error("failed to write file '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the output directory.
    #[error("failed to create directory '{}': {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to move the finished descriptor into place.
    #[error("failed to persist '{}': {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TocError {
    /// Create a FileRead error.
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a FileWrite error.
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Whether this error stems from an unusable source directory rather than
    /// a failed read or write.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            TocError::NotADirectory { .. }
                | TocError::NoInputFiles { .. }
                | TocError::MissingIndex { .. }
        )
    }
}
