//! In-memory adjacency-list graph.

use super::types::{DirectedEdge, DirectedGraph};
use crate::error::{Result, SearchError};
use log::debug;
use std::collections::HashMap;
use std::hash::Hash;

type Heuristic<V> = Box<dyn Fn(&V, &V) -> f64>;

/// Directed, weighted graph held in memory as adjacency lists.
///
/// Vertices are created implicitly by [`add_edge`](MemoryGraph::add_edge).
/// Parallel edges are kept; the search uses whichever one relaxes a vertex
/// first. Edges are returned in insertion order.
pub struct MemoryGraph<V> {
    adjacency_out: HashMap<V, Vec<DirectedEdge<V>>>,
    edge_count: usize,
    heuristic: Option<Heuristic<V>>,
}

impl<V: Clone + Eq + Hash + std::fmt::Debug> MemoryGraph<V> {
    /// Create a new empty graph with a zero heuristic.
    pub fn new() -> Self {
        Self {
            adjacency_out: HashMap::new(),
            edge_count: 0,
            heuristic: None,
        }
    }

    /// Attach a heuristic for A*.
    ///
    /// The function receives `(vertex, goal)` and must not overestimate the
    /// remaining cost. See [`DirectedGraph`] for the full precondition.
    pub fn with_heuristic<F>(mut self, heuristic: F) -> Self
    where
        F: Fn(&V, &V) -> f64 + 'static,
    {
        self.heuristic = Some(Box::new(heuristic));
        self
    }

    /// Add a vertex without edges. Returns `false` if it already existed.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency_out.contains_key(&vertex) {
            return false;
        }
        self.adjacency_out.insert(vertex, Vec::new());
        true
    }

    /// Add the edge `from -> to`, creating both vertices if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidWeight`] if `weight` is negative or NaN.
    pub fn add_edge(&mut self, from: V, to: V, weight: f64) -> Result<()> {
        if weight.is_nan() || weight < 0.0 {
            return Err(SearchError::invalid_weight(&from, &to, weight));
        }
        debug!("Adding edge: {from:?} -> {to:?} ({weight})");

        self.add_vertex(to.clone());
        self.adjacency_out
            .entry(from.clone())
            .or_default()
            .push(DirectedEdge::new(from, to, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Add both `a -> b` and `b -> a` with the same weight.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidWeight`] if `weight` is negative or NaN.
    pub fn add_undirected_edge(&mut self, a: V, b: V, weight: f64) -> Result<()> {
        self.add_edge(a.clone(), b.clone(), weight)?;
        self.add_edge(b, a, weight)
    }

    /// Check whether the graph knows `vertex`.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency_out.contains_key(vertex)
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.adjacency_out.len()
    }

    /// Number of edges, counting parallel edges separately
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterate over all vertices in arbitrary order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency_out.keys()
    }
}

impl<V: Clone + Eq + Hash + std::fmt::Debug> Default for MemoryGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for MemoryGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryGraph")
            .field("vertices", &self.adjacency_out.len())
            .field("edges", &self.edge_count)
            .field("heuristic", &self.heuristic.is_some())
            .finish()
    }
}

impl<V: Clone + Eq + Hash> DirectedGraph<V> for MemoryGraph<V> {
    fn outgoing_edges(&self, vertex: &V) -> Vec<DirectedEdge<V>> {
        self.adjacency_out.get(vertex).cloned().unwrap_or_default()
    }

    fn guess_cost(&self, vertex: &V, goal: &V) -> f64 {
        self.heuristic.as_ref().map_or(0.0, |h| h(vertex, goal))
    }
}
