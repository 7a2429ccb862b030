use std::collections::HashSet;

use itertools::Itertools;
use letter_boxed::{
    is_admissible, Coverage, Layout, LowerAsciiCharset, Puzzle, SearchConfig, Solution,
};

const SIDES: [&str; 4] = ["abc", "def", "ghi", "jkl"];

// Random admissible words over `SIDES`.
const WORDS: &[&str] = &[
    "aiekecka", "biahfle", "bieajbgf", "bkelil", "cdjeckc", "cechkcd", "cfjbfj", "chbiea",
    "dcfhfg", "dgfaijejb", "ehfcdkie", "eicjglfkc", "eilakdafb", "falebhlif", "fckdl",
    "fhkgcdakf", "gecjce", "gfjakafgb", "gkfjb", "glckf", "hcdhaija", "hdcdc", "hdjibga",
    "hflfle", "hkfkehkgc", "iclcgfk", "ieagckcgc", "jfcielbhf", "jgkdce", "jhcfad", "jijag",
    "kajbilc", "kdcgjeaij", "kekelfi", "kfbhfhkfc", "kfjfckf", "kgjgdke", "khdha", "lbjclge",
    "lgjcheke",
];

// Words breaking a rule, mixed into the dictionary.
const REJECTS: &[&str] = &["ab", "cab", "adgm", "adgg", "Adgj", "jkdg"];

fn layout() -> Layout {
    Layout::new(SIDES).unwrap()
}

fn puzzle() -> Puzzle {
    let dictionary = WORDS.iter().chain(REJECTS).chain(WORDS.iter().take(5));
    Puzzle::compile(dictionary, layout())
}

fn joined(solutions: impl IntoIterator<Item = Solution>) -> Vec<String> {
    solutions
        .into_iter()
        .map(|s| s.words().join(" "))
        .collect()
}

fn check_solution(puzzle: &Puzzle, solution: &Solution, max_words: usize) {
    let words = solution.words();
    assert!(!words.is_empty());
    assert!(words.len() <= max_words, "{} is too long", solution);
    assert_eq!(solution.letters(), puzzle.layout_letters(), "{}", solution);
    assert!(words.iter().all_unique(), "{} repeats a word", solution);
    for (a, b) in words.iter().tuple_windows() {
        assert_eq!(a.as_bytes().last(), b.as_bytes().first(), "{} breaks the chain", solution);
    }
    assert!(words.iter().all(|w| puzzle.vocabulary().contains(w)));
}

#[test]
fn vocabulary_is_admissible() {
    let puzzle = puzzle();
    let layout = layout();
    assert_eq!(puzzle.vocabulary().len(), WORDS.len());
    for word in puzzle.vocabulary().iter() {
        assert!(word.len() >= 3);
        assert!(LowerAsciiCharset::from_word(word)
            .unwrap()
            .is_subset(layout.letters()));
        assert!(is_admissible(word, &layout));
    }
    for word in REJECTS {
        assert!(!puzzle.vocabulary().contains(word), "{} was kept", word);
    }
}

#[test]
fn solutions_hold_up() {
    let puzzle = puzzle();
    for max_words in 1..=3 {
        for solution in puzzle.solve(max_words) {
            check_solution(&puzzle, &solution, max_words);
        }
    }
}

#[test]
fn solution_counts() {
    let puzzle = puzzle();
    assert_eq!(puzzle.solve(1).count(), 0);
    assert_eq!(
        joined(puzzle.solve(2)),
        [
            "jfcielbhf fhkgcdakf",
            "kdcgjeaij jfcielbhf",
            "lgjcheke eilakdafb",
        ]
    );
    assert_eq!(puzzle.solve(3).count(), 53);
}

#[test]
fn greedy_order_is_deterministic() {
    let puzzle = puzzle();
    let first = joined(puzzle.solve(3).take(3));
    assert_eq!(
        first,
        [
            "dgfaijejb biahfle ehfcdkie",
            "dgfaijejb biahfle eicjglfkc",
            "dgfaijejb bkelil lgjcheke",
        ]
    );
    assert_eq!(joined(puzzle.solve(3)), joined(puzzle.solve(3)));
}

#[test]
fn parallel_search_matches_lazy_search() {
    let puzzle = puzzle();
    let config = SearchConfig::new(3);
    let parallel = joined(puzzle.solve_all(&config));
    assert_eq!(parallel.len(), 53);
    assert!(parallel.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(
        &parallel[..3],
        [
            "biahfle ehfcdkie eicjglfkc",
            "biahfle eicjglfkc cdjeckc",
            "biahfle eicjglfkc cechkcd",
        ]
    );

    let lazy: HashSet<String> = joined(puzzle.search(&config)).into_iter().collect();
    let parallel: HashSet<String> = parallel.into_iter().collect();
    assert_eq!(lazy, parallel);
}

#[test]
fn exactly_one_two_word_solution() {
    let puzzle = Puzzle::compile(["adgjbehk", "kcfil", "cab", "big", "gal", "lid"], layout());
    assert_eq!(joined(puzzle.solve(1)), Vec::<String>::new());
    assert_eq!(joined(puzzle.solve(2)), ["adgjbehk kcfil"]);
    assert_eq!(joined(puzzle.solve(3)), ["adgjbehk kcfil"]);
}

#[test]
fn same_side_neighbours_are_rejected() {
    let puzzle = Puzzle::compile(["adg", "aadg", "adgh", "dgab"], layout());
    assert_eq!(puzzle.vocabulary().iter().collect_vec(), ["adg"]);
}

#[test]
fn empty_dictionary_has_no_solutions() {
    let puzzle = Puzzle::compile(Vec::<String>::new(), layout());
    for max_words in 0..5 {
        assert_eq!(puzzle.solve(max_words).count(), 0);
        assert!(puzzle.solve_all(&SearchConfig::new(max_words)).is_empty());
    }
}

#[test]
fn pangram_is_a_one_word_solution() {
    let puzzle = Puzzle::compile(["adgjbehkcfil", "lid"], layout());
    for max_words in 1..4 {
        assert_eq!(joined(puzzle.solve(max_words)), ["adgjbehkcfil"]);
    }
}

#[test]
fn early_stop() {
    let puzzle = puzzle();
    let mut solutions = puzzle.solve(3);
    assert!(solutions.next().is_some());
    drop(solutions);
    assert_eq!(puzzle.solve(3).count(), 53);
}

#[test]
fn starting_letter_coverage_is_looser() {
    let puzzle = puzzle();
    let config = SearchConfig::new(2).with_coverage(Coverage::StartingLetters);
    assert_eq!(puzzle.allowed_letters(), puzzle.layout_letters());
    assert_eq!(
        joined(puzzle.search(&config)),
        joined(puzzle.solve(2))
    );
}
