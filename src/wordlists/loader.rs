//! Word list loading utilities
//!
//! Reads a dictionary file and narrows it to words of a given length.

use super::DEFAULT_WORDLIST;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns one entry per line in file order. Line terminators are stripped;
/// nothing else is trimmed or validated.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_guesser::wordlists::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words: Vec<String> = content.lines().map(str::to_string).collect();

    log::debug!("read {} lines from {}", words.len(), path.display());
    Ok(words)
}

/// Load words from `words.txt` in the working directory
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load() -> io::Result<Vec<String>> {
    load_from_dir(".")
}

/// Load `words.txt` from `dir`
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> io::Result<Vec<String>> {
    load_from_file(dir.as_ref().join(DEFAULT_WORDLIST))
}

/// Keep only words of exactly `length` characters
///
/// # Examples
/// ```
/// use wordle_guesser::wordlists::filter_by_length;
///
/// let words = filter_by_length(&["crane", "toolong", "abc", "slate"], 5);
/// assert_eq!(words, vec!["crane", "slate"]);
/// ```
#[must_use]
pub fn filter_by_length<S: AsRef<str>>(words: &[S], length: usize) -> Vec<String> {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| word.chars().count() == length)
        .map(str::to_string)
        .collect()
}
