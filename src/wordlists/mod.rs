//! Word lists
//!
//! Loading of the newline-delimited dictionary and length filtering.

pub mod loader;

pub use loader::{filter_by_length, load, load_from_dir, load_from_file};

/// Dictionary file read when no other path is given
pub const DEFAULT_WORDLIST: &str = "words.txt";

/// Length of every candidate word
pub const WORD_LENGTH: usize = 5;
