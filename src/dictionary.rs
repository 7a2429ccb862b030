use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::Layout;

/// A source of lowercase candidate words.
pub trait WordProvider {
    fn words(&self) -> Result<Vec<String>>;
}

impl WordProvider for [String] {
    fn words(&self) -> Result<Vec<String>> {
        Ok(self.to_vec())
    }
}

impl WordProvider for [&str] {
    fn words(&self) -> Result<Vec<String>> {
        Ok(self.iter().map(|w| w.to_string()).collect())
    }
}

impl WordProvider for Vec<String> {
    fn words(&self) -> Result<Vec<String>> {
        self.as_slice().words()
    }
}

/// Reads one word per line, trimming and lowercasing, skipping blank lines.
pub fn read_word_list(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader
        .lines()
        .filter_map(|line| match line {
            Ok(line) => {
                let word = line.trim();
                (!word.is_empty()).then(|| Ok(word.to_lowercase()))
            }
            Err(e) => Some(Err(e)),
        })
        .collect()
}

/// A newline delimited word list on disk.
#[derive(Debug, Clone)]
pub struct WordListFile {
    path: PathBuf,
}

impl WordListFile {
    pub fn new(path: impl Into<PathBuf>) -> WordListFile {
        WordListFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordProvider for WordListFile {
    fn words(&self) -> Result<Vec<String>> {
        let io_err = |source| Error::Io {
            path: self.path.clone(),
            source,
        };
        let file = File::open(&self.path).map_err(io_err)?;
        let words = read_word_list(BufReader::new(file)).map_err(io_err)?;
        debug!("read {} words from {}", words.len(), self.path.display());
        Ok(words)
    }
}

/// The game data document published with each daily puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    pub dictionary: Vec<String>,
    pub sides: Vec<String>,
    #[serde(default)]
    pub print_date: Option<String>,
}

impl GameData {
    pub fn from_json(json: &str) -> serde_json::Result<GameData> {
        serde_json::from_str(json)
    }

    /// The puzzle's sides. Game data spells them in uppercase.
    pub fn layout(&self) -> Result<Layout> {
        Layout::new(self.sides.iter().map(|s| s.to_lowercase()))
    }
}

impl WordProvider for GameData {
    fn words(&self) -> Result<Vec<String>> {
        Ok(self.dictionary.iter().map(|w| w.to_lowercase()).collect())
    }
}

/// A game data JSON document on disk.
#[derive(Debug, Clone)]
pub struct GameDataFile {
    path: PathBuf,
}

impl GameDataFile {
    pub fn new(path: impl Into<PathBuf>) -> GameDataFile {
        GameDataFile { path: path.into() }
    }

    pub fn load(&self) -> Result<GameData> {
        let file = File::open(&self.path).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::GameData {
            path: self.path.clone(),
            source,
        })
    }
}

impl WordProvider for GameDataFile {
    fn words(&self) -> Result<Vec<String>> {
        self.load()?.words()
    }
}
