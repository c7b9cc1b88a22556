//! The outcome of a single search call.

use serde::Serialize;
use std::time::{Duration, Instant};

/// Completed search outcome.
///
/// Built exactly once, when a search reaches success or failure, and
/// immutable afterwards. A failed search is a normal result: check
/// [`success`](SearchResult::success) rather than expecting an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<V> {
    success: bool,
    start: V,
    goal: Option<V>,
    cost: f64,
    path: Option<Vec<V>>,
    visited_nodes: usize,
    elapsed: Duration,
}

impl<V> SearchResult<V> {
    /// Cost reported by a failed search.
    pub const NO_PATH_COST: f64 = -1.0;

    /// Successful search. `path` runs from `start` to `goal` inclusive.
    pub(crate) fn found(
        start: V,
        goal: V,
        cost: f64,
        path: Vec<V>,
        visited_nodes: usize,
        started: Instant,
    ) -> Self {
        Self {
            success: true,
            start,
            goal: Some(goal),
            cost,
            path: Some(path),
            visited_nodes,
            elapsed: started.elapsed(),
        }
    }

    /// Failed search: no goal, no path, cost [`NO_PATH_COST`](Self::NO_PATH_COST).
    pub(crate) fn not_found(start: V, visited_nodes: usize, started: Instant) -> Self {
        Self {
            success: false,
            start,
            goal: None,
            cost: Self::NO_PATH_COST,
            path: None,
            visited_nodes,
            elapsed: started.elapsed(),
        }
    }

    /// Whether a path to the goal was found
    pub fn success(&self) -> bool {
        self.success
    }

    /// Start vertex
    pub fn start(&self) -> &V {
        &self.start
    }

    /// Goal vertex, present only on success
    pub fn goal(&self) -> Option<&V> {
        self.goal.as_ref()
    }

    /// Sum of the edge weights along the path, or `-1` on failure
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Vertices from start to goal inclusive, present only on success
    pub fn path(&self) -> Option<&[V]> {
        self.path.as_deref()
    }

    /// Consume the result and take the path
    pub fn into_path(self) -> Option<Vec<V>> {
        self.path
    }

    /// Expanded vertices for Dijkstra/A*, steps taken for the random walk
    pub fn visited_nodes(&self) -> usize {
        self.visited_nodes
    }

    /// Wall-clock time between dispatch and result construction
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl<V: std::fmt::Display> std::fmt::Display for SearchResult<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Visited nodes: {}", self.visited_nodes)?;
        writeln!(f, "Elapsed time: {:.1} seconds", self.elapsed_secs())?;
        match (&self.goal, &self.path) {
            (Some(goal), Some(path)) if self.success => {
                writeln!(f, "Total cost from {} -> {}: {}", self.start, goal, self.cost)?;
                write!(f, "Path: ")?;
                for (i, vertex) in path.iter().enumerate() {
                    if i > 0 {
                        write!(f, " -> ")?;
                    }
                    write!(f, "{vertex}")?;
                }
                Ok(())
            }
            _ => write!(f, "No path found from {}", self.start),
        }
    }
}
