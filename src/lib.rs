//! Solver for the Letter Boxed word puzzle.
//!
//! A [`Layout`] lists the sides of the box. [`Puzzle::compile`] keeps the dictionary words that
//! can be spelled on it and indexes them by first letter, then [`Puzzle::solve`] lazily yields
//! chains of words, each starting with the last letter of the previous one, that use every
//! letter on the box.
//!
//! ```
//! use letter_boxed::{Layout, Puzzle};
//!
//! let layout: Layout = "abc,def,ghi,jkl".parse()?;
//! let puzzle = Puzzle::compile(["adgjbehk", "kcfil", "cab"], layout);
//! let solutions: Vec<String> = puzzle.solve(2).map(|s| s.to_string()).collect();
//! assert_eq!(solutions, ["adgjbehk -> kcfil"]);
//! # Ok::<(), letter_boxed::Error>(())
//! ```

mod charset;
mod dictionary;
mod error;
mod layout;
mod search;
mod word_filter;

pub use charset::LowerAsciiCharset;
pub use dictionary::{read_word_list, GameData, GameDataFile, WordListFile, WordProvider};
pub use error::{Error, Result};
pub use layout::Layout;
pub use search::{Coverage, SearchConfig, Solution, Solutions};
pub use word_filter::{
    compile, is_admissible, PrefixIndex, Puzzle, Vocabulary, WordId, MIN_WORD_LEN,
};
