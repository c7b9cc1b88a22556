//! Error types for word-ladder operations.

use pathfinder::SearchError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for word-ladder operations.
pub type Result<T> = std::result::Result<T, LadderError>;

/// Error type for dictionary loading and ladder searches.
#[derive(Error, Debug)]
pub enum LadderError {
    /// Dictionary could not be read
    #[error("Failed to read dictionary {path}: {source}")]
    Io {
        /// Path of the dictionary file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Word is not in the dictionary
    #[error("Word not in dictionary: {word}")]
    InvalidWord {
        /// The rejected word
        word: String,
    },

    /// Error from the search engine
    #[error(transparent)]
    Search(#[from] SearchError),
}

impl LadderError {
    /// Create an I/O error for the dictionary at `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
