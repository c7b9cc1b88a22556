//! Search configuration.

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};

/// Configuration for [`PathFinder`](crate::PathFinder).
///
/// Only the random walk reads these settings. Dijkstra and A* always run
/// until the goal is finalized or the frontier is exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of random-walk steps (None = walk until goal or dead end)
    ///
    /// Running out of steps yields a failed result, not an error.
    pub max_steps: Option<usize>,

    /// Seed for the random-walk RNG (None = seed from OS entropy)
    pub seed: Option<u64>,
}

impl SearchConfig {
    /// Create config with a random-walk step budget
    pub fn bounded(max_steps: usize) -> Self {
        Self {
            max_steps: Some(max_steps),
            ..Default::default()
        }
    }

    /// Create config with a fixed RNG seed, for reproducible walks
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Set the random-walk step budget
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the settings can be honoured.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfig`] for a zero step budget, which
    /// would fail every walk before the start vertex is even checked.
    pub fn validate(&self) -> Result<()> {
        if self.max_steps == Some(0) {
            return Err(SearchError::InvalidConfig {
                message: "max_steps must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
