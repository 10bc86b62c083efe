//! Input parsing and validation for interactive commands.
//!
//! This module provides functions for parsing and validating user input in
//! interactive CLI commands. It handles:
//! - Guess input parsing (numbers, restart, quit)
//! - Replay speed validation
//!
//! ## Error Handling
//!
//! Unparseable guess input is not an error: the game drops it silently with
//! no state change and no message, so the parser reports it as
//! [`GuessInput::Ignored`] rather than failing.

/// Result type for parsing one line of play input.
///
/// This enum represents the possible outcomes when parsing user input
/// during interactive play:
/// - A numeric guess to submit
/// - Restart command (new session, same run)
/// - Quit command (user wants to exit)
/// - Ignored input (empty or non-numeric; dropped without feedback)
#[derive(Debug, PartialEq, Eq)]
pub enum GuessInput {
    /// Numeric guess parsed from input
    Guess(i64),
    /// User asked for a fresh session (a, again, restart)
    Restart,
    /// User entered quit command (q or quit)
    Quit,
    /// Empty or non-numeric input; silently dropped
    Ignored,
}

/// Parse one line of play input into a guess or a control command.
///
/// Accepts the following input formats (case-insensitive):
/// - any integer, e.g. "7" or "-3" → Guess
/// - "a", "again", or "restart" → Restart
/// - "q", "quit", or "exit" → Quit
/// - anything else (including empty lines) → Ignored
///
/// # Arguments
///
/// * `input` - User input line to parse
///
/// # Example
///
/// ```rust
/// # use hilo_cli::validation::{parse_guess_line, GuessInput};
///
/// assert_eq!(parse_guess_line("15"), GuessInput::Guess(15));
/// assert_eq!(parse_guess_line("again"), GuessInput::Restart);
/// assert_eq!(parse_guess_line("q"), GuessInput::Quit);
/// assert_eq!(parse_guess_line("fifteen"), GuessInput::Ignored);
/// ```
pub fn parse_guess_line(input: &str) -> GuessInput {
    let token = input.trim();
    if token.is_empty() {
        return GuessInput::Ignored;
    }
    match token.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => GuessInput::Quit,
        "a" | "again" | "restart" => GuessInput::Restart,
        t => match t.parse::<i64>() {
            Ok(n) => GuessInput::Guess(n),
            Err(_) => GuessInput::Ignored,
        },
    }
}

/// Validate replay speed value.
///
/// Ensures the speed parameter is positive. Used by replay command to
/// validate the user-provided playback multiplier.
///
/// # Arguments
///
/// * `speed` - Optional playback speed multiplier
///
/// # Returns
///
/// * `Ok(())` - Speed is valid (None or positive value)
/// * `Err(String)` - Speed is invalid (zero or negative) with error message
///
/// # Example
///
/// ```rust
/// # use hilo_cli::validation::validate_speed;
///
/// assert!(validate_speed(Some(2.0)).is_ok());
/// assert!(validate_speed(None).is_ok());
/// assert!(validate_speed(Some(0.0)).is_err());
/// assert!(validate_speed(Some(-1.0)).is_err());
/// ```
pub fn validate_speed(speed: Option<f64>) -> Result<(), String> {
    if let Some(s) = speed
        && s <= 0.0
    {
        return Err("speed must be > 0".into());
    }
    Ok(())
}
