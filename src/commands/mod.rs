//! Command implementations

pub mod report;

pub use report::{Config, Constraints, Report, ReportError, generate_report};
