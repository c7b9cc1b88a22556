//! Core graph types: the weighted edge and the graph contract.

use serde::{Deserialize, Serialize};

/// A directed, weighted edge `from -> to`.
///
/// Edges are produced by a [`DirectedGraph`] implementation and only read by
/// the search engine. Dijkstra and A* require `weight >= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectedEdge<V> {
    from: V,
    to: V,
    weight: f64,
}

impl<V> DirectedEdge<V> {
    /// Create a new edge with the given weight.
    pub fn new(from: V, to: V, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Create a new edge of weight 1.
    pub fn unit(from: V, to: V) -> Self {
        Self::new(from, to, 1.0)
    }

    /// Source vertex
    pub fn from(&self) -> &V {
        &self.from
    }

    /// Target vertex
    pub fn to(&self) -> &V {
        &self.to
    }

    /// Edge weight
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl<V: std::fmt::Display> std::fmt::Display for DirectedEdge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.weight)
    }
}

/// Graph data source consumed by the search engine.
///
/// Implementations are treated as read-only for the duration of a search.
///
/// # Preconditions
///
/// - Edge weights must be non-negative for Dijkstra and A* to return the
///   minimum-cost path. Negative weights are not detected.
/// - [`guess_cost`](DirectedGraph::guess_cost) must never overestimate the
///   true remaining cost (admissible), and should satisfy
///   `guess_cost(u, g) <= w(u, v) + guess_cost(v, g)` for every edge
///   (consistent). A violating heuristic silently yields suboptimal paths.
pub trait DirectedGraph<V> {
    /// Outgoing edges of `vertex`.
    ///
    /// Returns an empty vector for a vertex without outgoing edges, including
    /// a vertex the graph has never heard of. Order affects tie-breaking only.
    fn outgoing_edges(&self, vertex: &V) -> Vec<DirectedEdge<V>>;

    /// Estimated remaining cost from `vertex` to `goal`, used by A* only.
    ///
    /// Defaults to zero, which turns A* into Dijkstra.
    fn guess_cost(&self, _vertex: &V, _goal: &V) -> f64 {
        0.0
    }
}

impl<V, G: DirectedGraph<V> + ?Sized> DirectedGraph<V> for &G {
    fn outgoing_edges(&self, vertex: &V) -> Vec<DirectedEdge<V>> {
        (**self).outgoing_edges(vertex)
    }

    fn guess_cost(&self, vertex: &V, goal: &V) -> f64 {
        (**self).guess_cost(vertex, goal)
    }
}
