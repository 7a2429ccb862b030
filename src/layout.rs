use std::str::FromStr;

use crate::charset::LowerAsciiCharset;
use crate::error::{Error, Result};

/// The sides of a puzzle box.
///
/// Two letters on the same side may not follow each other inside a word, and a letter may not
/// follow itself. That rule is stored as one mask per letter holding every letter of its side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    sides: Vec<String>,
    letters: LowerAsciiCharset,
    side_of: [LowerAsciiCharset; 26],
}

impl Layout {
    pub fn new<I, S>(sides: I) -> Result<Layout>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sides: Vec<String> = sides.into_iter().map(|s| s.as_ref().to_owned()).collect();
        if sides.is_empty() {
            return Err(Error::EmptyLayout);
        }

        let mut letters = LowerAsciiCharset::EMPTY;
        let mut side_of = [LowerAsciiCharset::EMPTY; 26];
        for (index, side) in sides.iter().enumerate() {
            if side.is_empty() {
                return Err(Error::EmptySide { index });
            }
            if let Some(letter) = side.chars().find(|c| !c.is_ascii_lowercase()) {
                return Err(Error::InvalidLetter { letter });
            }

            let mut mask = LowerAsciiCharset::EMPTY;
            for b in side.bytes() {
                if !letters.insert(b) {
                    return Err(Error::RepeatedLetter { letter: b as char });
                }
                mask.insert(b);
            }
            for b in side.bytes() {
                side_of[(b - b'a') as usize] = mask;
            }
        }

        Ok(Layout {
            sides,
            letters,
            side_of,
        })
    }

    pub fn sides(&self) -> &[String] {
        &self.sides
    }

    /// Every letter on the box.
    pub fn letters(&self) -> LowerAsciiCharset {
        self.letters
    }

    /// Whether `b` may not directly follow `a` inside a word.
    pub fn same_side(&self, a: u8, b: u8) -> bool {
        a.is_ascii_lowercase() && self.side_of[(a - b'a') as usize].contains(b)
    }
}

/// Parses comma separated sides, e.g. `rxn,aof,htc,epi`.
impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Layout> {
        if s.trim().is_empty() {
            return Err(Error::EmptyLayout);
        }
        Layout::new(s.split(',').map(str::trim))
    }
}
