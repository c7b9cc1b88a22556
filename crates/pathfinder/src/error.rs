//! Error types for pathfinder operations.
//!
//! A search that finds no path is not an error: it is reported through
//! [`SearchResult::success`](crate::SearchResult). Errors are reserved for
//! caller mistakes such as naming an unknown algorithm or building a graph
//! with an unusable edge weight.

use thiserror::Error;

/// Result type alias for pathfinder operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Error type for the search engine and its in-memory graph.
///
/// All variants describe usage mistakes. None of them are retryable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Algorithm name not recognised at dispatch
    #[error("Unknown search algorithm: {name}")]
    UnknownAlgorithm {
        /// The name that failed to parse
        name: String,
    },

    /// Edge weight that Dijkstra and A* cannot handle (negative or NaN)
    #[error("Invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        /// Source vertex, rendered with `Debug`
        from: String,
        /// Target vertex, rendered with `Debug`
        to: String,
        /// The rejected weight
        weight: f64,
    },

    /// Search configuration that cannot be honoured
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what went wrong
        message: String,
    },
}

impl SearchError {
    /// Create an unknown-algorithm error from the offending name.
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm { name: name.into() }
    }

    /// Create an invalid-weight error for the edge `from -> to`.
    pub fn invalid_weight<V: std::fmt::Debug>(from: &V, to: &V, weight: f64) -> Self {
        Self::InvalidWeight {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            weight,
        }
    }
}
