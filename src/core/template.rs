//! Five-slot position templates
//!
//! A template such as `"-n-i-"` pins letters to positions. The `-` placeholder
//! leaves a slot open. The same template type backs both the pattern filter
//! (letter required at the slot) and the anti-pattern filter (letter forbidden
//! at the slot).

use crate::wordlists::WORD_LENGTH;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Placeholder character for an unconstrained slot
pub const PLACEHOLDER: char = '-';

/// Number of slots in a template, one per letter of a candidate word
pub const TEMPLATE_LENGTH: usize = WORD_LENGTH;

/// A single template position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// `-`: no constraint at this position
    Any,
    /// A lower-cased literal letter
    Letter(char),
}

/// Error type for malformed templates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template must be exactly 5 characters, got {0}")]
    InvalidLength(usize),
    #[error("template has invalid character '{found}' at position {position} (expected a letter or '-')")]
    InvalidCharacter { position: usize, found: char },
}

/// A parsed five-slot template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Template {
    slots: [Slot; TEMPLATE_LENGTH],
}

impl Template {
    /// Parse a template string
    ///
    /// # Errors
    /// Returns `TemplateError` if:
    /// - Length is not exactly 5 characters
    /// - A character is neither an ASCII letter nor `-`
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::{Slot, Template};
    ///
    /// let template = Template::parse("-N-i-").unwrap();
    /// assert_eq!(template.slot(1), Slot::Letter('n'));
    /// assert_eq!(template.slot(0), Slot::Any);
    ///
    /// assert!(Template::parse("-n-i--").is_err());
    /// assert!(Template::parse("ab3de").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let length = text.chars().count();
        if length != TEMPLATE_LENGTH {
            return Err(TemplateError::InvalidLength(length));
        }

        let mut slots = [Slot::Any; TEMPLATE_LENGTH];
        for (position, (slot, ch)) in slots.iter_mut().zip(text.chars()).enumerate() {
            *slot = match ch {
                PLACEHOLDER => Slot::Any,
                c if c.is_ascii_alphabetic() => Slot::Letter(c.to_ascii_lowercase()),
                found => return Err(TemplateError::InvalidCharacter { position, found }),
            };
        }

        Ok(Self { slots })
    }

    /// Get the slot at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn slot(&self, position: usize) -> Slot {
        self.slots[position]
    }

    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[Slot; TEMPLATE_LENGTH] {
        &self.slots
    }

    /// Check that every literal slot holds its letter
    ///
    /// Words of any other length never match.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        self.zip_word(word).is_some_and(|mut pairs| {
            pairs.all(|(slot, ch)| match slot {
                Slot::Any => true,
                Slot::Letter(letter) => ch == letter,
            })
        })
    }

    /// Check that no literal slot holds its letter
    ///
    /// Words of any other length never match.
    #[must_use]
    pub fn avoids(&self, word: &str) -> bool {
        self.zip_word(word).is_some_and(|mut pairs| {
            pairs.all(|(slot, ch)| match slot {
                Slot::Any => true,
                Slot::Letter(letter) => ch != letter,
            })
        })
    }

    fn zip_word<'a>(&'a self, word: &'a str) -> Option<impl Iterator<Item = (Slot, char)> + 'a> {
        if word.chars().count() == TEMPLATE_LENGTH {
            Some(self.slots.iter().copied().zip(word.chars()))
        } else {
            None
        }
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            let ch = match slot {
                Slot::Any => PLACEHOLDER,
                Slot::Letter(letter) => *letter,
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
