//! Output formatting for subnet reports.
//!
//! This module handles formatting and printing the computed report:
//! - [`terminal`] - fixed-width terminal output

mod terminal;

pub use terminal::{format_row, print_report, render_report};
