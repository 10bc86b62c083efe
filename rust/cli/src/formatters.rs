//! Message and slot formatters for terminal display.
//!
//! This module provides pure functions for turning engine feedback and UI
//! slot values into terminal lines. Keeping them pure makes the play and
//! replay output easy to test without a terminal.
//!
//! ## Example
//!
//! ```rust
//! use hilo_engine::render::Feedback;
//! use hilo_cli::formatters::{format_feedback, format_score};
//!
//! assert_eq!(format_feedback(Feedback::TooLow), "Too low");
//! assert_eq!(format_score(15), "Score: 15");
//! ```

use hilo_engine::render::Feedback;

/// Format a feedback message as the player sees it.
///
/// # Arguments
///
/// * `feedback` - The feedback chosen by the session
///
/// # Returns
///
/// The display text for the message slot
pub fn format_feedback(feedback: Feedback) -> &'static str {
    match feedback {
        Feedback::Start => "Start guessing...",
        Feedback::TooLow => "Too low",
        Feedback::TooHigh => "Too high",
        Feedback::Correct => "Correct number",
        Feedback::Lost => "You lost the game",
    }
}

/// Format the guessing range label.
///
/// # Example
///
/// ```rust
/// # use hilo_cli::formatters::format_bounds;
///
/// assert_eq!(format_bounds(1, 20), "Guess a number between 1 and 20");
/// ```
pub fn format_bounds(min: i64, max: i64) -> String {
    format!("Guess a number between {} and {}", min, max)
}

/// Format the current-number slot; `None` renders the placeholder.
///
/// # Example
///
/// ```rust
/// # use hilo_cli::formatters::format_guess_slot;
///
/// assert_eq!(format_guess_slot(Some(7)), "Number: 7");
/// assert_eq!(format_guess_slot(None), "Number: ?");
/// ```
pub fn format_guess_slot(guess: Option<i64>) -> String {
    match guess {
        Some(g) => format!("Number: {}", g),
        None => "Number: ?".to_string(),
    }
}

/// Format the score slot.
pub fn format_score(score: u32) -> String {
    format!("Score: {}", score)
}

/// Format the best-score slot.
pub fn format_best(best: u32) -> String {
    format!("Best score: {}", best)
}
