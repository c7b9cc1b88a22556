//! Dijkstra and A*: one best-first loop, two priority functions.

use super::frontier::Frontier;
use super::result::SearchResult;
use crate::graph::{DirectedEdge, DirectedGraph};
use log::trace;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

/// Best-first search from `start` to `goal`.
///
/// The frontier is ordered by `dist_to[v] + estimate(v)`. With a zero
/// estimate this is Dijkstra's algorithm; with the graph's heuristic it is A*.
/// A vertex is finalized, and counted as visited, the first time it is
/// popped. Relaxation only records strictly shorter distances.
pub(crate) fn best_first<V, G, H>(
    graph: &G,
    start: &V,
    goal: &V,
    estimate: H,
    started: Instant,
) -> SearchResult<V>
where
    V: Clone + Eq + Hash + Debug,
    G: DirectedGraph<V> + ?Sized,
    H: Fn(&V) -> f64,
{
    let mut visited_nodes = 0;
    let mut dist_to: HashMap<V, f64> = HashMap::new();
    let mut edge_to: HashMap<V, DirectedEdge<V>> = HashMap::new();
    let mut visited: HashSet<V> = HashSet::new();
    let mut frontier = Frontier::new();

    dist_to.insert(start.clone(), 0.0);
    frontier.push(start.clone(), estimate(start));

    while let Some(node) = frontier.pop() {
        // Stale entry for a vertex that was already finalized
        if !visited.insert(node.clone()) {
            continue;
        }
        visited_nodes += 1;
        trace!("Expanding {node:?} (frontier size {})", frontier.len());

        if node == *goal {
            let (path, cost) = reconstruct_path(&edge_to, start, goal);
            return SearchResult::found(start.clone(), node, cost, path, visited_nodes, started);
        }

        let Some(&node_distance) = dist_to.get(&node) else {
            continue;
        };

        for edge in graph.outgoing_edges(&node) {
            let next = edge.to();
            if visited.contains(next) {
                continue;
            }
            let new_distance = node_distance + edge.weight();
            let improves = dist_to
                .get(next)
                .map_or(true, |&known| known > new_distance);

            if improves {
                let next = next.clone();
                dist_to.insert(next.clone(), new_distance);
                frontier.push(next.clone(), new_distance + estimate(&next));
                edge_to.insert(next, edge);
            }
        }
    }

    SearchResult::not_found(start.clone(), visited_nodes, started)
}

/// Walk `edge_to` backward from `goal` to `start`.
///
/// Returns the path in start-to-goal order and the summed weight of the
/// recorded edges.
fn reconstruct_path<V>(edge_to: &HashMap<V, DirectedEdge<V>>, start: &V, goal: &V) -> (Vec<V>, f64)
where
    V: Clone + Eq + Hash,
{
    let mut path = vec![goal.clone()];
    let mut cost = 0.0;
    let mut current = goal;

    while current != start {
        let Some(edge) = edge_to.get(current) else {
            break;
        };
        cost += edge.weight();
        current = edge.from();
        path.push(current.clone());
    }

    path.reverse();
    (path, cost)
}
