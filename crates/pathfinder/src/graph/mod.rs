//! Graph contract and graph implementations.
//!
//! This module defines the building blocks the search engine consumes:
//! - [`DirectedEdge`]: a directed, weighted edge
//! - [`DirectedGraph`]: the contract any graph source implements
//! - [`MemoryGraph`]: a ready-made adjacency-list graph

mod memory;
mod types;

pub use memory::MemoryGraph;
pub use types::{DirectedEdge, DirectedGraph};
