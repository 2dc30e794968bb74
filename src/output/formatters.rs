//! Formatting utilities for report text

use crate::core::RankedPair;

/// One word per line, each line terminated
#[must_use]
pub fn format_word_list<S: AsRef<str>>(words: &[S]) -> String {
    let mut result = String::new();
    for word in words {
        result.push_str(word.as_ref());
        result.push('\n');
    }
    result
}

/// One `"<letter>: <count> times"` line per ranked pair, each preceded by a newline
#[must_use]
pub fn format_ranking(ranking: &[RankedPair]) -> String {
    ranking.iter().map(|pair| format!("\n{pair}")).collect()
}
