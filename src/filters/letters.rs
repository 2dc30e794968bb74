//! Letter membership filters

use rustc_hash::FxHashSet;

fn letter_set(letters: &str) -> FxHashSet<char> {
    letters.to_lowercase().chars().collect()
}

/// Keep words containing every letter in `letters`
///
/// Order and repetition in `letters` don't matter: `"aa"` only asks for one
/// `a`. Constraint letters are lower-cased, words are matched as-is.
///
/// # Examples
/// ```
/// use wordle_guesser::filters::include_letters;
///
/// let words = ["foo", "bar"];
/// assert_eq!(include_letters("RA", &words), vec!["bar"]);
/// ```
#[must_use]
pub fn include_letters<S: AsRef<str>>(letters: &str, words: &[S]) -> Vec<String> {
    let required = letter_set(letters);
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| required.iter().all(|&letter| word.contains(letter)))
        .map(str::to_string)
        .collect()
}

/// Keep words containing none of the letters in `letters`
///
/// An empty `letters` excludes nothing.
///
/// # Examples
/// ```
/// use wordle_guesser::filters::exclude_letters;
///
/// let words = ["foo", "bar"];
/// assert_eq!(exclude_letters("abcd", &words), vec!["foo"]);
/// ```
#[must_use]
pub fn exclude_letters<S: AsRef<str>>(letters: &str, words: &[S]) -> Vec<String> {
    let excluded = letter_set(letters);
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| !word.chars().any(|ch| excluded.contains(&ch)))
        .map(str::to_string)
        .collect()
}
