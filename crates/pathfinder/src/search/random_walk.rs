//! Uninformed random walk.

use super::result::SearchResult;
use crate::graph::DirectedGraph;
use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt::Debug;
use std::time::Instant;

/// Follow a uniformly random outgoing edge of the current vertex until the
/// goal is reached, a dead end is hit, or `max_steps` steps are used up.
///
/// Every step counts towards `visited_nodes`, revisits included. There is no
/// cycle detection, so without `max_steps` the walk may not terminate on a
/// cyclic graph where the goal is unreachable.
pub(crate) fn random_walk<V, G, R>(
    graph: &G,
    start: &V,
    goal: &V,
    max_steps: Option<usize>,
    rng: &mut R,
    started: Instant,
) -> SearchResult<V>
where
    V: Clone + Eq + Debug,
    G: DirectedGraph<V> + ?Sized,
    R: Rng + ?Sized,
{
    let mut visited_nodes = 0;
    let mut path = vec![start.clone()];
    let mut cost = 0.0;
    let mut current = start.clone();

    loop {
        if max_steps.is_some_and(|max| visited_nodes >= max) {
            warn!("Random walk from {start:?} gave up after {visited_nodes} steps");
            break;
        }
        visited_nodes += 1;

        if current == *goal {
            return SearchResult::found(start.clone(), current, cost, path, visited_nodes, started);
        }

        let edges = graph.outgoing_edges(&current);
        let Some(edge) = edges.choose(rng) else {
            break;
        };
        cost += edge.weight();
        current = edge.to().clone();
        path.push(current.clone());
    }

    SearchResult::not_found(start.clone(), visited_nodes, started)
}
