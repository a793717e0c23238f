//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analyze_result, print_feedback, print_read_result, print_segment_result, print_summary,
    print_tray, print_trial,
};
