//! Display functions for reports

use crate::commands::Report;
use colored::Colorize;

/// Print a report to standard output
///
/// With `color` set, the summary line is highlighted; the text is otherwise
/// identical to the report's `Display` output.
pub fn print_report(report: &Report, color: bool) {
    if color {
        println!("{}{}", report.summary().bright_cyan().bold(), report.body());
    } else {
        println!("{report}");
    }
}
