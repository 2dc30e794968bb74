//! Letter frequency ranking
//!
//! Counts every letter across a word set and orders the letters by how often
//! they occur, breaking ties alphabetically so the ranking is deterministic.

use rustc_hash::FxHashMap;
use std::fmt;

/// Occurrences of each distinct letter across a word set
pub type LetterCount = FxHashMap<char, usize>;

/// A letter paired with its occurrence count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankedPair {
    pub letter: char,
    pub count: usize,
}

impl RankedPair {
    #[inline]
    #[must_use]
    pub const fn new(letter: char, count: usize) -> Self {
        Self { letter, count }
    }
}

impl fmt::Display for RankedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} times", self.letter, self.count)
    }
}

/// Count every character of every word
///
/// Letters are not deduplicated within a word: "jazz" contributes two `z`.
///
/// # Examples
/// ```
/// use wordle_guesser::core::count_letters;
///
/// let counts = count_letters(&["jazz", "zebra"]);
/// assert_eq!(counts[&'z'], 3);
/// assert_eq!(counts[&'a'], 2);
/// ```
#[must_use]
pub fn count_letters<S: AsRef<str>>(words: &[S]) -> LetterCount {
    let mut counts = LetterCount::default();
    for word in words {
        for ch in word.as_ref().chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
    }
    counts
}

/// Order letters by count, highest first
///
/// Letters sharing a count come out in map iteration order; pass the result
/// through [`stable_alphabetical_tiebreak`] for a deterministic ranking.
#[must_use]
pub fn rank_by_frequency(counts: &LetterCount) -> Vec<RankedPair> {
    let mut pairs: Vec<RankedPair> = counts
        .iter()
        .map(|(&letter, &count)| RankedPair::new(letter, count))
        .collect();
    pairs.sort_by(|a, b| b.count.cmp(&a.count));
    pairs
}

/// Sort each run of equal counts alphabetically
///
/// Expects pairs already ordered by count descending. Runs keep their relative
/// order; only the letters inside a run are reordered.
#[must_use]
pub fn stable_alphabetical_tiebreak(mut pairs: Vec<RankedPair>) -> Vec<RankedPair> {
    for run in pairs.chunk_by_mut(|a, b| a.count == b.count) {
        run.sort_unstable_by_key(|pair| pair.letter);
    }
    pairs
}

/// Rank the letters of a word set by descending frequency, alphabetical among ties
///
/// # Examples
/// ```
/// use wordle_guesser::core::{RankedPair, rank};
///
/// let ranking = rank(&["zebra", "bar"]);
/// assert_eq!(ranking[0], RankedPair::new('a', 2));
/// assert_eq!(ranking[3], RankedPair::new('e', 1));
/// ```
#[must_use]
pub fn rank<S: AsRef<str>>(words: &[S]) -> Vec<RankedPair> {
    let counts = count_letters(words);
    stable_alphabetical_tiebreak(rank_by_frequency(&counts))
}
