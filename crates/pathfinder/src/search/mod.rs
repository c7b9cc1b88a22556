//! Search engine: algorithm selection and dispatch.
//!
//! [`PathFinder`] borrows a [`DirectedGraph`] and runs one of three
//! strategies per call:
//! - [`Algorithm::RandomWalk`]: follows random edges, no optimality
//! - [`Algorithm::Dijkstra`]: uniform-cost search, optimal for weights >= 0
//! - [`Algorithm::AStar`]: Dijkstra guided by [`DirectedGraph::guess_cost`]
//!
//! Every call owns its distance maps and frontier, so searches never share
//! state.

mod best_first;
mod frontier;
mod random_walk;
mod result;

pub use result::SearchResult;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::graph::DirectedGraph;
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;
use std::time::Instant;

/// Search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Uniformly random outgoing edge at each step
    #[serde(rename = "random")]
    RandomWalk,
    /// Uniform-cost search
    #[serde(rename = "dijkstra")]
    Dijkstra,
    /// Best-first search ordered by distance plus heuristic
    #[serde(rename = "astar")]
    AStar,
}

impl Algorithm {
    /// All algorithms, in the order they are usually compared
    pub const ALL: [Algorithm; 3] = [Algorithm::RandomWalk, Algorithm::Dijkstra, Algorithm::AStar];

    /// Name accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::RandomWalk => "random",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "random" => Ok(Algorithm::RandomWalk),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" => Ok(Algorithm::AStar),
            other => Err(SearchError::unknown_algorithm(other)),
        }
    }
}

/// Shortest-path search engine over a borrowed graph.
///
/// # Example
///
/// ```
/// use pathfinder::{Algorithm, MemoryGraph, PathFinder};
///
/// let mut graph = MemoryGraph::new();
/// graph.add_edge("A", "B", 1.0).unwrap();
/// graph.add_edge("B", "C", 1.0).unwrap();
/// graph.add_edge("A", "C", 5.0).unwrap();
///
/// let finder = PathFinder::new(&graph);
/// let result = finder.search(Algorithm::Dijkstra, &"A", &"C");
/// assert!(result.success());
/// assert_eq!(result.cost(), 2.0);
/// assert_eq!(result.path(), Some(&["A", "B", "C"][..]));
/// ```
#[derive(Debug)]
pub struct PathFinder<'g, G: ?Sized> {
    graph: &'g G,
    config: SearchConfig,
}

impl<'g, G: ?Sized> PathFinder<'g, G> {
    /// Create a search engine with the default configuration.
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            config: SearchConfig::default(),
        }
    }

    /// Create a search engine with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfig`] if the configuration is rejected
    /// by [`SearchConfig::validate`].
    pub fn with_config(graph: &'g G, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { graph, config })
    }

    /// The active configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run `algorithm` from `start` to `goal`.
    ///
    /// The elapsed time in the result is measured from this call.
    pub fn search<V>(&self, algorithm: Algorithm, start: &V, goal: &V) -> SearchResult<V>
    where
        G: DirectedGraph<V>,
        V: Clone + Eq + Hash + Debug,
    {
        let started = Instant::now();
        debug!("Starting {algorithm} search: {start:?} -> {goal:?}");

        let result = match algorithm {
            Algorithm::RandomWalk => self.random_walk_from(start, goal, started),
            Algorithm::Dijkstra => best_first::best_first(self.graph, start, goal, |_| 0.0, started),
            Algorithm::AStar => best_first::best_first(
                self.graph,
                start,
                goal,
                |vertex| self.graph.guess_cost(vertex, goal),
                started,
            ),
        };

        debug!(
            "Finished {algorithm} search: success={}, visited={}, cost={}",
            result.success(),
            result.visited_nodes(),
            result.cost()
        );
        result
    }

    /// Parse `algorithm` and run it.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownAlgorithm`] for a name other than
    /// `random`, `dijkstra` or `astar`. No search state is created in that case.
    pub fn search_by_name<V>(&self, algorithm: &str, start: &V, goal: &V) -> Result<SearchResult<V>>
    where
        G: DirectedGraph<V>,
        V: Clone + Eq + Hash + Debug,
    {
        let algorithm = algorithm.parse::<Algorithm>()?;
        Ok(self.search(algorithm, start, goal))
    }

    /// Random walk from `start` to `goal`.
    pub fn search_random<V>(&self, start: &V, goal: &V) -> SearchResult<V>
    where
        G: DirectedGraph<V>,
        V: Clone + Eq + Hash + Debug,
    {
        self.search(Algorithm::RandomWalk, start, goal)
    }

    /// Dijkstra's search from `start` to `goal`.
    pub fn search_dijkstra<V>(&self, start: &V, goal: &V) -> SearchResult<V>
    where
        G: DirectedGraph<V>,
        V: Clone + Eq + Hash + Debug,
    {
        self.search(Algorithm::Dijkstra, start, goal)
    }

    /// A* search from `start` to `goal`.
    pub fn search_astar<V>(&self, start: &V, goal: &V) -> SearchResult<V>
    where
        G: DirectedGraph<V>,
        V: Clone + Eq + Hash + Debug,
    {
        self.search(Algorithm::AStar, start, goal)
    }

    fn random_walk_from<V>(&self, start: &V, goal: &V, started: Instant) -> SearchResult<V>
    where
        G: DirectedGraph<V>,
        V: Clone + Eq + Debug,
    {
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        random_walk::random_walk(self.graph, start, goal, self.config.max_steps, &mut rng, started)
    }
}
