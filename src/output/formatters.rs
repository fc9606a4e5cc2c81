//! Formatting utilities for terminal output

use crate::core::{DigitMark, Feedback};

/// Emoji tile for a digit mark
#[must_use]
pub const fn mark_to_emoji(mark: DigitMark) -> char {
    match mark {
        DigitMark::Exact => '🟩',
        DigitMark::Present => '🟦',
        DigitMark::Absent => '⬜',
    }
}

/// Format a row of marks as emoji tiles
#[must_use]
pub fn marks_to_emoji(marks: &[DigitMark]) -> String {
    marks.iter().map(|&m| mark_to_emoji(m)).collect()
}

/// One-line summary of the aggregate counts
#[must_use]
pub fn feedback_summary(feedback: Feedback) -> String {
    format!(
        "{} exact, {} misplaced, {} absent",
        feedback.exact_matches, feedback.present_wrong_position, feedback.absent
    )
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
