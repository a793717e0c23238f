//! Formatting utilities for terminal output

use crate::core::{Fragment, Role};
use colored::{ColoredString, Colorize};

/// Color a piece of text by morpheme role
#[must_use]
pub fn paint(text: &str, role: Role) -> ColoredString {
    match role {
        Role::Prefix => text.bright_blue().bold(),
        Role::Root => text.bright_green().bold(),
        Role::Suffix => text.bright_magenta().bold(),
    }
}

/// Role-colored dot shown on tiles when hint dots are enabled
#[must_use]
pub fn hint_dot(role: Role) -> ColoredString {
    paint("•", role)
}

/// Fragments joined with `-`, each colored by role
#[must_use]
pub fn colored_segmentation(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(|f| paint(f.text(), f.role()).to_string())
        .collect::<Vec<_>>()
        .join("-")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Milliseconds as `850ms` or `2.4s`
#[must_use]
pub fn format_latency(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{:.1}s", ms as f64 / 1000.0)
    }
}

/// Check or cross for a slot result
#[must_use]
pub const fn slot_mark(correct: bool) -> &'static str {
    if correct { "✓" } else { "✗" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(1.0, 2.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn latency_units() {
        assert_eq!(format_latency(850), "850ms");
        assert_eq!(format_latency(2400), "2.4s");
    }
}
