//! Basic usage example for pathfinder
//!
//! Builds a small road network and compares the three search algorithms.

use pathfinder::{Algorithm, MemoryGraph, PathFinder, SearchConfig};

fn main() -> pathfinder::Result<()> {
    println!("=== pathfinder basic usage ===\n");

    // Straight-line distances to "harbor", used as the A* heuristic
    let to_harbor = |town: &&str| match *town {
        "mill" => 9.0,
        "ford" => 7.0,
        "bridge" => 4.0,
        "market" => 5.0,
        "castle" => 3.0,
        _ => 0.0,
    };

    let mut graph = MemoryGraph::new().with_heuristic(move |town: &&str, goal: &&str| {
        if *goal == "harbor" {
            to_harbor(town)
        } else {
            0.0
        }
    });

    graph.add_undirected_edge("mill", "ford", 3.0)?;
    graph.add_undirected_edge("mill", "market", 6.0)?;
    graph.add_undirected_edge("ford", "bridge", 4.0)?;
    graph.add_undirected_edge("market", "castle", 2.0)?;
    graph.add_undirected_edge("bridge", "harbor", 5.0)?;
    graph.add_undirected_edge("castle", "harbor", 4.0)?;
    graph.add_vertex("island");

    println!(
        "✓ Built graph: {} towns, {} roads\n",
        graph.vertex_count(),
        graph.edge_count()
    );

    let config = SearchConfig::seeded(42).with_max_steps(1_000);
    let finder = PathFinder::with_config(&graph, config)?;

    for algorithm in Algorithm::ALL {
        println!("--- {algorithm}: mill -> harbor ---");
        println!("{}\n", finder.search(algorithm, &"mill", &"harbor"));
    }

    println!("--- dijkstra: mill -> island ---");
    println!("{}\n", finder.search_by_name("dijkstra", &"mill", &"island")?);

    match finder.search_by_name("bfs", &"mill", &"harbor") {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("✓ Rejected: {e}"),
    }

    Ok(())
}
