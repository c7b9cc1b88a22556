//! # pathfinder
//!
//! A small shortest-path search engine over any directed, weighted graph.
//!
//! ## Core Principles
//!
//! - **Graph Agnostic**: Bring your own graph, implement [`DirectedGraph`]
//! - **Generic Vertices**: Anything `Clone + Eq + Hash + Debug` can be a vertex
//! - **No Hidden State**: Every search call owns its own bookkeeping
//! - **Failure Is Data**: "No path" is a [`SearchResult`], not an error
//!
//! ## Architecture
//!
//! ```text
//! Caller (CLI, demo, tests)
//!     ↓
//! PathFinder (dispatch by Algorithm)
//!     ↓
//! Random walk | Dijkstra | A*
//!     ↓
//! DirectedGraph contract (outgoing_edges, guess_cost)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pathfinder::{Algorithm, MemoryGraph, PathFinder};
//!
//! let mut graph = MemoryGraph::new();
//! graph.add_edge("A", "B", 1.0).unwrap();
//! graph.add_edge("B", "C", 1.0).unwrap();
//! graph.add_edge("A", "C", 5.0).unwrap();
//! graph.add_edge("C", "D", 1.0).unwrap();
//!
//! let finder = PathFinder::new(&graph);
//! let result = finder.search_by_name("astar", &"A", &"D").unwrap();
//! assert_eq!(result.cost(), 3.0);
//! println!("{result}");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod graph;
pub mod search;

// Re-export main types
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use graph::{DirectedEdge, DirectedGraph, MemoryGraph};
pub use search::{Algorithm, PathFinder, SearchResult};
