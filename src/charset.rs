use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Sub};

/// A set of lowercase ASCII letters, one bit per letter.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LowerAsciiCharset(u32);

impl LowerAsciiCharset {
    pub const EMPTY: LowerAsciiCharset = LowerAsciiCharset(0);

    pub fn from_byte(b: u8) -> Option<LowerAsciiCharset> {
        b.is_ascii_lowercase().then(|| LowerAsciiCharset(1 << (b - b'a')))
    }

    /// The letters of `word`, or `None` if it holds anything outside `a..=z`.
    pub fn from_word(word: &str) -> Option<LowerAsciiCharset> {
        word.bytes().try_fold(LowerAsciiCharset::EMPTY, |set, b| {
            Some(set | LowerAsciiCharset::from_byte(b)?)
        })
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, b: u8) -> bool {
        LowerAsciiCharset::from_byte(b).map_or(false, |c| self.intersects(c))
    }

    pub fn insert(&mut self, b: u8) -> bool {
        match LowerAsciiCharset::from_byte(b) {
            Some(c) if !self.intersects(c) => {
                self.0 |= c.0;
                true
            }
            _ => false,
        }
    }

    pub fn intersects(self, other: LowerAsciiCharset) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_subset(self, other: LowerAsciiCharset) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order.
    pub fn letters(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&b| self.contains(b))
    }
}

impl BitOr for LowerAsciiCharset {
    type Output = LowerAsciiCharset;

    fn bitor(self, rhs: LowerAsciiCharset) -> LowerAsciiCharset {
        LowerAsciiCharset(self.0 | rhs.0)
    }
}

impl BitOrAssign for LowerAsciiCharset {
    fn bitor_assign(&mut self, rhs: LowerAsciiCharset) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for LowerAsciiCharset {
    type Output = LowerAsciiCharset;

    fn bitand(self, rhs: LowerAsciiCharset) -> LowerAsciiCharset {
        LowerAsciiCharset(self.0 & rhs.0)
    }
}

/// Set difference.
impl Sub for LowerAsciiCharset {
    type Output = LowerAsciiCharset;

    fn sub(self, rhs: LowerAsciiCharset) -> LowerAsciiCharset {
        LowerAsciiCharset(self.0 & !rhs.0)
    }
}

impl FromIterator<u8> for LowerAsciiCharset {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> LowerAsciiCharset {
        let mut set = LowerAsciiCharset::EMPTY;
        iter.into_iter().for_each(|b| {
            set.insert(b);
        });
        set
    }
}

impl fmt::Display for LowerAsciiCharset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters().try_for_each(|b| write!(f, "{}", b as char))
    }
}

impl fmt::Debug for LowerAsciiCharset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self)
    }
}
