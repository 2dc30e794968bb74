//! Wordle Guesser
//!
//! Filters a dictionary of five-letter words by what a Wordle game has
//! revealed so far and ranks the letters of the words that remain.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_guesser::commands::{Config, generate_report};
//!
//! let words = ["zebra", "jazzy", "hotel", "armor", "aroma", "carom"];
//! let config = Config {
//!     include: "z".to_string(),
//!     exclude: "h".to_string(),
//!     anti_pattern: "-e---".to_string(),
//!     ..Config::default()
//! };
//!
//! let report = generate_report(&words, &config).unwrap();
//! assert_eq!(report.words(), ["jazzy"]);
//! println!("{report}");
//! ```

// Core domain types
pub mod core;

// Constraint filters
pub mod filters;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
