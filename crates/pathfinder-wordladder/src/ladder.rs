//! Word-ladder graph: words are vertices, one-letter substitutions are edges.

use crate::error::{LadderError, Result};
use log::{debug, info};
use pathfinder::{DirectedEdge, DirectedGraph};
use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Five-letter words shown by the `Display` summary
const EXAMPLE_WORD_LEN: usize = 5;
const EXAMPLE_LIMIT: usize = 12;

/// Dictionary-backed word-ladder graph.
///
/// Two words are connected when they have the same length and differ in
/// exactly one position. Every edge has weight 1, so the Hamming distance
/// to the goal is an admissible and consistent A* heuristic.
#[derive(Debug, Clone, Default)]
pub struct WordLadder {
    dictionary: HashSet<String>,
    charset: BTreeSet<char>,
}

impl WordLadder {
    /// Create an empty ladder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a dictionary file, one word per line.
    ///
    /// # Errors
    ///
    /// Returns [`LadderError::Io`] if the file cannot be opened or read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LadderError::io(path, e))?;
        let ladder = Self::from_reader(BufReader::new(file)).map_err(|e| LadderError::io(path, e))?;
        info!(
            "Loaded dictionary {}: {} words, {} characters",
            path.display(),
            ladder.node_count(),
            ladder.charset.len()
        );
        Ok(ladder)
    }

    /// Read words from `reader`, one per line.
    ///
    /// Lines are trimmed. Blank lines and lines starting with `#` are skipped,
    /// as are tokens that contain anything other than letters.
    ///
    /// # Errors
    ///
    /// Propagates read errors from `reader`.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut ladder = Self::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            ladder.add_word(word);
        }
        Ok(ladder)
    }

    /// Add `word` to the dictionary, lower-cased.
    ///
    /// Returns `false` (and adds nothing) unless the word is non-empty and
    /// made of letters only.
    pub fn add_word(&mut self, word: &str) -> bool {
        if word.is_empty() || !word.chars().all(char::is_alphabetic) {
            debug!("Skipping non-alphabetic token: {word:?}");
            return false;
        }
        let word = word.to_lowercase();
        self.charset.extend(word.chars());
        self.dictionary.insert(word);
        true
    }

    /// Number of words in the dictionary
    pub fn node_count(&self) -> usize {
        self.dictionary.len()
    }

    /// Check whether `word` is in the dictionary (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.dictionary.contains(&word.to_lowercase())
    }

    /// Normalise `word` to its dictionary form.
    ///
    /// # Errors
    ///
    /// Returns [`LadderError::InvalidWord`] if the word is not in the dictionary.
    pub fn lookup(&self, word: &str) -> Result<String> {
        let word = word.trim().to_lowercase();
        if self.dictionary.contains(&word) {
            Ok(word)
        } else {
            Err(LadderError::InvalidWord { word })
        }
    }

    /// Characters occurring in any dictionary word, in sorted order
    pub fn charset(&self) -> &BTreeSet<char> {
        &self.charset
    }

    /// Iterate over all words in arbitrary order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.dictionary.iter().map(String::as_str)
    }
}

impl DirectedGraph<String> for WordLadder {
    fn outgoing_edges(&self, word: &String) -> Vec<DirectedEdge<String>> {
        let mut chars: Vec<char> = word.chars().collect();
        let mut edges = Vec::new();

        for i in 0..chars.len() {
            let original = chars[i];
            for &c in &self.charset {
                if c == original {
                    continue;
                }
                chars[i] = c;
                let candidate: String = chars.iter().collect();
                if self.dictionary.contains(&candidate) {
                    edges.push(DirectedEdge::unit(word.clone(), candidate));
                }
            }
            chars[i] = original;
        }

        edges
    }

    fn guess_cost(&self, word: &String, goal: &String) -> f64 {
        let differing = word.chars().zip(goal.chars()).filter(|(a, b)| a != b).count();
        let length_gap = word.chars().count().abs_diff(goal.chars().count());
        (differing + length_gap) as f64
    }
}

impl std::fmt::Display for WordLadder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let charset: String = self.charset.iter().collect();
        writeln!(
            f,
            "Word ladder with {} words, charset: \"{}\"",
            self.node_count(),
            charset
        )?;
        writeln!(f)?;
        writeln!(f, "Example words and ladder steps:")?;

        let mut words: Vec<&String> = self
            .dictionary
            .iter()
            .filter(|w| w.chars().count() == EXAMPLE_WORD_LEN)
            .collect();
        words.sort();

        let mut shown = 0;
        for word in words {
            if shown == EXAMPLE_LIMIT {
                break;
            }
            let edges = self.outgoing_edges(word);
            if edges.is_empty() {
                continue;
            }
            let steps: Vec<&str> = edges.iter().map(|e| e.to().as_str()).collect();
            writeln!(f, "{word} --> {}", steps.join(", "))?;
            shown += 1;
        }
        Ok(())
    }
}
