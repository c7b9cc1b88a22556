//! Unit tests for the three search algorithms.
//!
//! Tests cover:
//! - Dijkstra picks the cheaper multi-hop route over a direct edge
//! - A* with a zero heuristic matches Dijkstra exactly
//! - start == goal succeeds immediately
//! - dead ends and unreachable goals fail for every algorithm
//! - stale frontier entries and parallel edges
//! - random walk step counting, budgets and determinism

use pathfinder::{
    Algorithm, DirectedEdge, DirectedGraph, MemoryGraph, PathFinder, SearchConfig, SearchError,
};

// A -> B (1), B -> C (1), A -> C (5), C -> D (1)
fn create_diamond() -> MemoryGraph<&'static str> {
    let mut graph = MemoryGraph::new();
    graph.add_edge("A", "B", 1.0).unwrap();
    graph.add_edge("B", "C", 1.0).unwrap();
    graph.add_edge("A", "C", 5.0).unwrap();
    graph.add_edge("C", "D", 1.0).unwrap();
    graph.add_vertex("X");
    graph
}

// Checks that consecutive path vertices are joined by an edge in `graph`
fn is_walk<G: DirectedGraph<&'static str>>(graph: &G, path: &[&'static str]) -> bool {
    path.windows(2).all(|pair| {
        graph
            .outgoing_edges(&pair[0])
            .iter()
            .any(|edge| edge.to() == &pair[1])
    })
}

#[test]
fn test_dijkstra_prefers_cheaper_route() {
    let graph = create_diamond();
    let result = PathFinder::new(&graph).search(Algorithm::Dijkstra, &"A", &"D");

    assert!(result.success());
    assert_eq!(result.path(), Some(&["A", "B", "C", "D"][..]));
    assert_eq!(result.cost(), 3.0);
    assert!(is_walk(&graph, result.path().unwrap()));
}

#[test]
fn test_astar_zero_heuristic_matches_dijkstra() {
    let graph = create_diamond();
    let finder = PathFinder::new(&graph);

    let dijkstra = finder.search(Algorithm::Dijkstra, &"A", &"D");
    let astar = finder.search(Algorithm::AStar, &"A", &"D");

    assert_eq!(astar.path(), dijkstra.path());
    assert_eq!(astar.cost(), dijkstra.cost());
    assert_eq!(astar.visited_nodes(), dijkstra.visited_nodes());
}

#[test]
fn test_start_equals_goal() {
    let graph = create_diamond();
    let finder = PathFinder::new(&graph);

    for algorithm in Algorithm::ALL {
        let result = finder.search(algorithm, &"B", &"B");
        assert!(result.success(), "{algorithm} should succeed");
        assert_eq!(result.cost(), 0.0);
        assert_eq!(result.path(), Some(&["B"][..]));
        assert_eq!(result.visited_nodes(), 1);
    }
}

#[test]
fn test_dead_end_start_fails_everywhere() {
    let graph = create_diamond();
    let finder = PathFinder::new(&graph);

    for algorithm in Algorithm::ALL {
        let result = finder.search(algorithm, &"X", &"A");
        assert!(!result.success(), "{algorithm} should fail");
        assert_eq!(result.cost(), -1.0);
        assert_eq!(result.path(), None);
        assert_eq!(result.visited_nodes(), 1);
    }
}

#[test]
fn test_unreachable_goal_fails_everywhere() {
    let graph = create_diamond();
    // Acyclic, so the random walk always ends at D's dead end
    let finder = PathFinder::new(&graph);

    for algorithm in Algorithm::ALL {
        let result = finder.search(algorithm, &"A", &"X");
        assert!(!result.success(), "{algorithm} should fail");
        assert_eq!(result.cost(), -1.0);
        assert_eq!(result.path(), None);
        assert!(result.visited_nodes() >= 1);
    }
}

#[test]
fn test_dijkstra_counts_each_vertex_once() {
    let graph = create_diamond();
    // C enters the frontier twice (via A at 5, then via B at 2)
    let result = PathFinder::new(&graph).search(Algorithm::Dijkstra, &"A", &"X");
    assert_eq!(result.visited_nodes(), 4);
}

#[test]
fn test_unknown_vertex_is_a_dead_end() {
    let graph = create_diamond();
    let result = PathFinder::new(&graph).search(Algorithm::Dijkstra, &"nowhere", &"A");
    assert!(!result.success());
    assert_eq!(result.visited_nodes(), 1);
}

#[test]
fn test_parallel_edges_use_cheapest() {
    let mut graph = MemoryGraph::new();
    graph.add_edge(1, 2, 4.0).unwrap();
    graph.add_edge(1, 2, 1.5).unwrap();
    graph.add_edge(1, 2, 3.0).unwrap();

    let finder = PathFinder::new(&graph);
    for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
        let result = finder.search(algorithm, &1, &2);
        assert_eq!(result.cost(), 1.5);
        assert_eq!(result.path(), Some(&[1, 2][..]));
    }
}

#[test]
fn test_equal_cost_paths_keep_first_recorded() {
    // Two routes of cost 2: S -> L -> T and S -> R -> T
    let mut graph = MemoryGraph::new();
    graph.add_edge("S", "L", 1.0).unwrap();
    graph.add_edge("S", "R", 1.0).unwrap();
    graph.add_edge("L", "T", 1.0).unwrap();
    graph.add_edge("R", "T", 1.0).unwrap();

    let result = PathFinder::new(&graph).search(Algorithm::Dijkstra, &"S", &"T");
    assert_eq!(result.cost(), 2.0);
    assert_eq!(result.path(), Some(&["S", "L", "T"][..]));
}

#[test]
fn test_cycle_does_not_trap_dijkstra() {
    let mut graph = MemoryGraph::new();
    graph.add_undirected_edge(0, 1, 1.0).unwrap();
    graph.add_undirected_edge(1, 2, 1.0).unwrap();
    graph.add_undirected_edge(2, 0, 1.0).unwrap();
    graph.add_vertex(9);

    let finder = PathFinder::new(&graph);
    let result = finder.search(Algorithm::Dijkstra, &0, &9);
    assert!(!result.success());
    assert_eq!(result.visited_nodes(), 3);

    let result = finder.search(Algorithm::AStar, &0, &2);
    assert_eq!(result.cost(), 1.0);
}

#[test]
fn test_astar_with_admissible_heuristic_visits_fewer() {
    // Vertices on a number line; the direct line to the goal is cheap, a long
    // spur in the other direction is just as cheap per step.
    let mut graph = MemoryGraph::new();
    for i in -10..10 {
        graph.add_undirected_edge(i, i + 1, 1.0).unwrap();
    }
    let graph = graph.with_heuristic(|v: &i32, goal: &i32| f64::from((goal - v).abs()));

    let finder = PathFinder::new(&graph);
    let dijkstra = finder.search(Algorithm::Dijkstra, &0, &5);
    let astar = finder.search(Algorithm::AStar, &0, &5);

    assert_eq!(astar.cost(), 5.0);
    assert_eq!(astar.cost(), dijkstra.cost());
    assert_eq!(astar.path(), Some(&[0, 1, 2, 3, 4, 5][..]));
    assert!(astar.visited_nodes() <= dijkstra.visited_nodes());
    assert_eq!(astar.visited_nodes(), 6);
}

#[test]
fn test_search_by_name() {
    let graph = create_diamond();
    let finder = PathFinder::new(&graph);

    let result = finder.search_by_name("dijkstra", &"A", &"D").unwrap();
    assert_eq!(result.cost(), 3.0);

    let err = finder.search_by_name("bellman-ford", &"A", &"D").unwrap_err();
    assert!(matches!(err, SearchError::UnknownAlgorithm { ref name } if name == "bellman-ford"));
}

#[test]
fn test_named_shortcuts_dispatch() {
    let graph = create_diamond();
    let finder = PathFinder::new(&graph);

    assert_eq!(finder.search_dijkstra(&"A", &"D").cost(), 3.0);
    assert_eq!(finder.search_astar(&"A", &"D").cost(), 3.0);
    assert!(finder.search_random(&"D", &"D").success());
}

#[test]
fn test_random_walk_reaches_goal_on_chain() {
    let mut graph = MemoryGraph::new();
    graph.add_edge("a", "b", 2.0).unwrap();
    graph.add_edge("b", "c", 3.0).unwrap();

    let result = PathFinder::new(&graph).search(Algorithm::RandomWalk, &"a", &"c");
    assert!(result.success());
    assert_eq!(result.path(), Some(&["a", "b", "c"][..]));
    assert_eq!(result.cost(), 5.0);
    assert_eq!(result.visited_nodes(), 3);
}

#[test]
fn test_random_walk_path_is_contiguous() {
    let mut graph = MemoryGraph::new();
    graph.add_undirected_edge("hub", "x", 1.0).unwrap();
    graph.add_undirected_edge("hub", "y", 1.0).unwrap();
    graph.add_undirected_edge("hub", "z", 1.0).unwrap();
    graph.add_edge("z", "goal", 1.0).unwrap();

    let config = SearchConfig::seeded(17).with_max_steps(10_000);
    let finder = PathFinder::with_config(&graph, config).unwrap();
    let result = finder.search(Algorithm::RandomWalk, &"hub", &"goal");

    assert!(result.visited_nodes() >= 1);
    if result.success() {
        let path = result.path().unwrap();
        assert_eq!(path.first(), Some(&"hub"));
        assert_eq!(path.last(), Some(&"goal"));
        assert!(is_walk(&graph, path));
        // One vertex per step, plus the final goal check
        assert_eq!(path.len(), result.visited_nodes());
        assert_eq!(result.cost(), (path.len() - 1) as f64);
    }
}

#[test]
fn test_random_walk_step_budget() {
    // A two-cycle never reaches "far"
    let mut graph = MemoryGraph::new();
    graph.add_undirected_edge("p", "q", 1.0).unwrap();
    graph.add_vertex("far");

    let finder = PathFinder::with_config(&graph, SearchConfig::bounded(25)).unwrap();
    let result = finder.search(Algorithm::RandomWalk, &"p", &"far");

    assert!(!result.success());
    assert_eq!(result.visited_nodes(), 25);
    assert_eq!(result.cost(), -1.0);
}

#[test]
fn test_random_walk_seed_is_deterministic() {
    let mut graph = MemoryGraph::new();
    for i in 0..6 {
        graph.add_undirected_edge(i, (i + 1) % 6, 1.0).unwrap();
        graph.add_undirected_edge(i, (i + 3) % 6, 1.0).unwrap();
    }
    graph.add_edge(4, 100, 1.0).unwrap();

    let config = SearchConfig::seeded(99).with_max_steps(500);
    let finder = PathFinder::with_config(&graph, config).unwrap();

    let first = finder.search(Algorithm::RandomWalk, &0, &100);
    let second = finder.search(Algorithm::RandomWalk, &0, &100);
    assert_eq!(first.path(), second.path());
    assert_eq!(first.visited_nodes(), second.visited_nodes());
}

#[test]
fn test_random_walk_uses_current_vertex_edges() {
    // Start only links to "mid"; the goal hangs off "mid". A walk that kept
    // reading the start's edges would loop on "mid" forever.
    let mut graph = MemoryGraph::new();
    graph.add_edge("start", "mid", 1.0).unwrap();
    graph.add_edge("mid", "goal", 1.0).unwrap();

    let finder = PathFinder::with_config(&graph, SearchConfig::bounded(10)).unwrap();
    let result = finder.search(Algorithm::RandomWalk, &"start", &"goal");
    assert!(result.success());
    assert_eq!(result.path(), Some(&["start", "mid", "goal"][..]));
}

#[test]
fn test_invalid_config_rejected() {
    let graph = create_diamond();
    let err = PathFinder::with_config(&graph, SearchConfig::bounded(0)).unwrap_err();
    assert!(matches!(err, SearchError::InvalidConfig { .. }));
}

struct Grid {
    width: i32,
    height: i32,
}

impl DirectedGraph<(i32, i32)> for Grid {
    fn outgoing_edges(&self, &(x, y): &(i32, i32)) -> Vec<DirectedEdge<(i32, i32)>> {
        [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .into_iter()
            .map(|(dx, dy)| (x + dx, y + dy))
            .filter(|&(nx, ny)| nx >= 0 && ny >= 0 && nx < self.width && ny < self.height)
            .map(|next| DirectedEdge::unit((x, y), next))
            .collect()
    }

    fn guess_cost(&self, &(x, y): &(i32, i32), &(gx, gy): &(i32, i32)) -> f64 {
        f64::from((gx - x).abs() + (gy - y).abs())
    }
}

#[test]
fn test_custom_graph_implementation() {
    let grid = Grid { width: 8, height: 8 };
    let finder = PathFinder::new(&grid);

    let dijkstra = finder.search(Algorithm::Dijkstra, &(0, 0), &(7, 7));
    let astar = finder.search(Algorithm::AStar, &(0, 0), &(7, 7));

    assert_eq!(dijkstra.cost(), 14.0);
    assert_eq!(astar.cost(), 14.0);
    assert_eq!(astar.path().unwrap().len(), 15);
    assert!(astar.visited_nodes() <= dijkstra.visited_nodes());
}
