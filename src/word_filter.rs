use itertools::Itertools;
use log::debug;
use rustc_hash::FxHashMap;

use crate::charset::LowerAsciiCharset;
use crate::layout::Layout;

pub const MIN_WORD_LEN: usize = 3;

/// Index of a word in its [`Vocabulary`].
pub type WordId = usize;

/// Admissible words, deduplicated and sorted, so word ids follow lexicographic order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<Box<str>>,
    letters: Vec<LowerAsciiCharset>,
}

impl Vocabulary {
    fn from_sorted(words: Vec<String>) -> Vocabulary {
        let letters = words
            .iter()
            .map(|w| LowerAsciiCharset::from_word(w).unwrap_or_default())
            .collect();
        Vocabulary {
            words: words.into_iter().map(String::into_boxed_str).collect(),
            letters,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = WordId> {
        0..self.words.len()
    }

    pub fn word(&self, id: WordId) -> &str {
        &self.words[id]
    }

    pub fn letters(&self, id: WordId) -> LowerAsciiCharset {
        self.letters[id]
    }

    pub fn last_letter(&self, id: WordId) -> u8 {
        self.words[id].bytes().last().unwrap_or_default()
    }

    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.words.binary_search_by(|w| (**w).cmp(word)).ok()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.id_of(word).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| &**w)
    }
}

/// Starting letter to the ids of the words beginning with it. Buckets are in id order.
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    buckets: FxHashMap<u8, Vec<WordId>>,
}

impl PrefixIndex {
    fn build(vocabulary: &Vocabulary) -> PrefixIndex {
        let mut buckets: FxHashMap<u8, Vec<WordId>> = FxHashMap::default();
        for id in vocabulary.ids() {
            let first = vocabulary.word(id).as_bytes()[0];
            buckets.entry(first).or_default().push(id);
        }
        PrefixIndex { buckets }
    }

    pub fn bucket(&self, letter: u8) -> &[WordId] {
        self.buckets
            .get(&letter)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Letters that start at least one word.
    pub fn letters(&self) -> LowerAsciiCharset {
        self.buckets.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

pub fn is_admissible(word: &str, layout: &Layout) -> bool {
    word.len() >= MIN_WORD_LEN
        && LowerAsciiCharset::from_word(word).map_or(false, |c| c.is_subset(layout.letters()))
        && word
            .bytes()
            .tuple_windows()
            .all(|(a, b)| !layout.same_side(a, b))
}

/// A layout compiled against a dictionary: the state every search over it borrows.
#[derive(Debug, Clone)]
pub struct Puzzle {
    layout: Layout,
    vocabulary: Vocabulary,
    prefix_index: PrefixIndex,
}

impl Puzzle {
    /// Keeps the admissible dictionary words and indexes them by first letter.
    ///
    /// The dictionary may be in any order and hold duplicates. Words are expected to already be
    /// lowercase; anything else is rejected like any other letter missing from the layout.
    pub fn compile<I, S>(dictionary: I, layout: Layout) -> Puzzle
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = 0usize;
        let words = dictionary
            .into_iter()
            .inspect(|_| seen += 1)
            .filter(|w| is_admissible(w.as_ref(), &layout))
            .map(|w| w.as_ref().to_owned())
            .sorted()
            .dedup()
            .collect_vec();

        let vocabulary = Vocabulary::from_sorted(words);
        let prefix_index = PrefixIndex::build(&vocabulary);
        debug!(
            "compiled {:?}: {} of {} dictionary words admissible, {} starting letters",
            layout.sides(),
            vocabulary.len(),
            seen,
            prefix_index.len()
        );

        Puzzle {
            layout,
            vocabulary,
            prefix_index,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn prefix_index(&self) -> &PrefixIndex {
        &self.prefix_index
    }

    /// Letters that start at least one admissible word.
    ///
    /// This can be narrower than [`Puzzle::layout_letters`] when a letter only ever shows up
    /// inside or at the end of words.
    pub fn allowed_letters(&self) -> LowerAsciiCharset {
        self.prefix_index.letters()
    }

    pub fn layout_letters(&self) -> LowerAsciiCharset {
        self.layout.letters()
    }
}

pub fn compile<I, S>(dictionary: I, layout: Layout) -> Puzzle
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Puzzle::compile(dictionary, layout)
}
