//! Word ladder example: find a ladder between two dictionary words
//!
//! Usage:
//!
//! ```text
//! cargo run -p pathfinder-wordladder --example word_ladder -- \
//!     words.txt astar cold warm
//! ```

use pathfinder::{Algorithm, PathFinder};
use pathfinder_wordladder::WordLadder;
use std::process::ExitCode;

const USAGE: &str = "Usage: word_ladder <dictionary-file> <random|dijkstra|astar> <start> <goal>";

fn run(dictionary: &str, algorithm: &str, start: &str, goal: &str) -> pathfinder_wordladder::Result<()> {
    let algorithm: Algorithm = algorithm.parse()?;
    let ladder = WordLadder::from_file(dictionary)?;
    println!("{ladder}");

    let start = ladder.lookup(start)?;
    let goal = ladder.lookup(goal)?;

    println!("--- {algorithm} search: {start} -> {goal} ---\n");
    let finder = PathFinder::new(&ladder);
    let result = finder.search(algorithm, &start, &goal);
    println!("{result}");

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [dictionary, algorithm, start, goal] = args.as_slice() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match run(dictionary, algorithm, start, goal) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}
