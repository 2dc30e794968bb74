//! Terminal output formatting
//!
//! Text layout for reports and printing them to the terminal.

pub mod display;
pub mod formatters;

pub use display::print_report;
