//! # pathfinder-wordladder
//!
//! Word-ladder puzzles on top of the [`pathfinder`] search engine.
//!
//! A word ladder turns one word into another by changing one letter at a
//! time, each intermediate step being a dictionary word:
//!
//! ```rust
//! use pathfinder::{Algorithm, PathFinder};
//! use pathfinder_wordladder::WordLadder;
//!
//! let mut ladder = WordLadder::new();
//! for word in ["cold", "cord", "card", "ward", "warm", "word"] {
//!     ladder.add_word(word);
//! }
//!
//! let finder = PathFinder::new(&ladder);
//! let result = finder.search(Algorithm::AStar, &"cold".to_string(), &"warm".to_string());
//! assert_eq!(result.cost(), 4.0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod ladder;

pub use error::{LadderError, Result};
pub use ladder::WordLadder;
