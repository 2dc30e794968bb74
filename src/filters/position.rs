//! Positional filters driven by a [`Template`]

use crate::core::Template;

/// Keep words with the template's letters at exactly their positions
///
/// # Examples
/// ```
/// use wordle_guesser::core::Template;
/// use wordle_guesser::filters::match_pattern;
///
/// let pattern = Template::parse("j----").unwrap();
/// assert_eq!(match_pattern(&pattern, &["jazzy", "zebra"]), vec!["jazzy"]);
/// ```
#[must_use]
pub fn match_pattern<S: AsRef<str>>(pattern: &Template, words: &[S]) -> Vec<String> {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| pattern.matches(word))
        .map(str::to_string)
        .collect()
}

/// Keep words that don't have the template's letters at their positions
///
/// A letter in the anti-pattern is known to be in the word but not at that
/// slot. It is only forbidden there, not word-wide.
#[must_use]
pub fn match_anti_pattern<S: AsRef<str>>(anti_pattern: &Template, words: &[S]) -> Vec<String> {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| anti_pattern.avoids(word))
        .map(str::to_string)
        .collect()
}
