//! Constraint filters
//!
//! Each filter takes a word set and returns the words that satisfy it, in
//! their original order.

mod letters;
mod position;

pub use letters::{exclude_letters, include_letters};
pub use position::{match_anti_pattern, match_pattern};
