//! Core domain types
//!
//! Letter frequency ranking and position templates. Everything here is pure
//! and independent of file or terminal I/O.

mod frequency;
mod template;

pub use frequency::{
    LetterCount, RankedPair, count_letters, rank, rank_by_frequency, stable_alphabetical_tiebreak,
};
pub use template::{PLACEHOLDER, Slot, TEMPLATE_LENGTH, Template, TemplateError};
