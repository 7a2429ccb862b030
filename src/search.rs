use std::cmp::Reverse;
use std::fmt;

use itertools::Itertools;
use log::{info, trace};
use rayon::prelude::*;
use serde::Serialize;

use crate::charset::LowerAsciiCharset;
use crate::word_filter::{Puzzle, WordId};

/// Which letters a chain has to use before it counts as a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coverage {
    /// Every letter on the box.
    #[default]
    Layout,
    /// Only the letters that start at least one admissible word, see [`Puzzle::allowed_letters`].
    StartingLetters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_words: usize,
    pub coverage: Coverage,
}

impl SearchConfig {
    pub fn new(max_words: usize) -> SearchConfig {
        SearchConfig {
            max_words,
            coverage: Coverage::default(),
        }
    }

    pub fn with_coverage(self, coverage: Coverage) -> SearchConfig {
        SearchConfig { coverage, ..self }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::new(3)
    }
}

/// A chain of words that uses every required letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Solution(Vec<String>);

impl Solution {
    pub fn words(&self) -> &[String] {
        &self.0
    }

    pub fn into_words(self) -> Vec<String> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn letters(&self) -> LowerAsciiCharset {
        self.0.iter().flat_map(|w| w.bytes()).collect()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" -> "))
    }
}

/// Candidates for one position of the chain, best first.
struct Frame {
    candidates: Vec<WordId>,
    next: usize,
    unused: LowerAsciiCharset,
}

impl Frame {
    fn new(puzzle: &Puzzle, chain: &[WordId], unused: LowerAsciiCharset) -> Frame {
        let vocabulary = puzzle.vocabulary();
        let mut candidates = match chain.last() {
            None => vocabulary.ids().collect_vec(),
            Some(&last) => puzzle
                .prefix_index()
                .bucket(vocabulary.last_letter(last))
                .to_vec(),
        };
        candidates.retain(|id| !chain.contains(id));
        // Ids are in lexicographic order, which breaks ties between equally useful words.
        candidates.sort_unstable_by_key(|&id| {
            (Reverse((vocabulary.letters(id) & unused).len()), id)
        });

        trace!(
            "depth {}: {} candidates, unused {:?}",
            chain.len(),
            candidates.len(),
            unused
        );
        Frame {
            candidates,
            next: 0,
            unused,
        }
    }
}

/// Lazy depth-first enumeration of the solutions of a [`Puzzle`].
///
/// Each call to `next` resumes the search right after the previously found solution. Dropping
/// the iterator abandons the search.
pub struct Solutions<'p> {
    puzzle: &'p Puzzle,
    max_words: usize,
    chain: Vec<WordId>,
    stack: Vec<Frame>,
}

impl<'p> Solutions<'p> {
    fn new(puzzle: &'p Puzzle, config: &SearchConfig) -> Solutions<'p> {
        let root = (config.max_words > 0)
            .then(|| Frame::new(puzzle, &[], puzzle.coverage_target(config.coverage)));
        Solutions::from_root(puzzle, config.max_words, root)
    }

    fn from_root(puzzle: &'p Puzzle, max_words: usize, root: Option<Frame>) -> Solutions<'p> {
        Solutions {
            puzzle,
            max_words,
            // a chain never repeats a word
            chain: Vec::with_capacity(max_words.min(puzzle.vocabulary().len())),
            stack: root.into_iter().collect(),
        }
    }

    fn solution_ending_with(&self, last: WordId) -> Solution {
        let vocabulary = self.puzzle.vocabulary();
        Solution(
            self.chain
                .iter()
                .chain(Some(&last))
                .map(|&id| vocabulary.word(id).to_owned())
                .collect(),
        )
    }
}

impl Iterator for Solutions<'_> {
    type Item = Solution;

    fn next(&mut self) -> Option<Solution> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some(&word) = frame.candidates.get(frame.next) else {
                self.stack.pop();
                self.chain.pop();
                continue;
            };
            frame.next += 1;

            let remaining = frame.unused - self.puzzle.vocabulary().letters(word);
            if remaining.is_empty() {
                return Some(self.solution_ending_with(word));
            }
            if self.chain.len() + 1 < self.max_words {
                self.chain.push(word);
                let frame = Frame::new(self.puzzle, &self.chain, remaining);
                self.stack.push(frame);
            }
        }
    }
}

impl Puzzle {
    pub fn coverage_target(&self, coverage: Coverage) -> LowerAsciiCharset {
        match coverage {
            Coverage::Layout => self.layout_letters(),
            Coverage::StartingLetters => self.allowed_letters(),
        }
    }

    /// Lazily enumerates chains of at most `max_words` words covering every letter of the box.
    pub fn solve(&self, max_words: usize) -> Solutions<'_> {
        self.search(&SearchConfig::new(max_words))
    }

    pub fn search(&self, config: &SearchConfig) -> Solutions<'_> {
        Solutions::new(self, config)
    }

    /// Finds every solution on the rayon pool, one task per first word.
    ///
    /// Returns the same solutions as [`Puzzle::search`], sorted by their space separated words.
    pub fn solve_all(&self, config: &SearchConfig) -> Vec<Solution> {
        if config.max_words == 0 {
            return Vec::new();
        }

        let target = self.coverage_target(config.coverage);
        let roots = Frame::new(self, &[], target).candidates;
        let mut solutions: Vec<Solution> = roots
            .par_iter()
            .flat_map_iter(|&word| {
                let root = Frame {
                    candidates: vec![word],
                    next: 0,
                    unused: target,
                };
                Solutions::from_root(self, config.max_words, Some(root))
            })
            .collect();
        solutions.sort_by_cached_key(|s| s.words().join(" "));

        info!(
            "found {} solutions of at most {} words from {} first words",
            solutions.len(),
            config.max_words,
            roots.len()
        );
        solutions
    }
}
