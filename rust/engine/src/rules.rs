use std::cmp::Ordering;

use crate::errors::GameError;
use crate::render::Feedback;

/// Score value at which a session can no longer be won.
pub const EXHAUSTED: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    TooLow,
    TooHigh,
    Correct,
    Exhausted,
}

impl Outcome {
    pub fn feedback(self) -> Feedback {
        match self {
            Outcome::TooLow => Feedback::TooLow,
            Outcome::TooHigh => Feedback::TooHigh,
            Outcome::Correct => Feedback::Correct,
            Outcome::Exhausted => Feedback::Lost,
        }
    }
}

/// Evaluates one accepted guess against the secret.
///
/// The comparison is a total ordering over `i64`, so every guess maps to
/// exactly one of [`Outcome::TooLow`], [`Outcome::TooHigh`] or
/// [`Outcome::Correct`]. A session whose score already sits at
/// [`EXHAUSTED`] cannot be won any more and yields [`Outcome::Exhausted`]
/// without consulting the secret.
///
/// # Arguments
///
/// * `guess` - The number submitted by the player
/// * `secret` - The hidden number for this session
/// * `score` - The score at the moment the guess is evaluated
///
/// # Examples
///
/// ```
/// use hilo_engine::rules::{evaluate_guess, Outcome};
///
/// assert_eq!(evaluate_guess(3, 7, 15), Outcome::TooLow);
/// assert_eq!(evaluate_guess(12, 7, 15), Outcome::TooHigh);
/// assert_eq!(evaluate_guess(7, 7, 1), Outcome::Correct);
///
/// // No score left: even the right number cannot win.
/// assert_eq!(evaluate_guess(7, 7, 0), Outcome::Exhausted);
/// ```
pub fn evaluate_guess(guess: i64, secret: i64, score: u32) -> Outcome {
    if score == EXHAUSTED {
        return Outcome::Exhausted;
    }
    match guess.cmp(&secret) {
        Ordering::Less => Outcome::TooLow,
        Ordering::Greater => Outcome::TooHigh,
        Ordering::Equal => Outcome::Correct,
    }
}

/// Checks that a guessing range is well formed.
///
/// A range is valid when `min <= max`; a single-value range is legal and
/// makes the session trivial.
///
/// # Errors
///
/// Returns [`GameError::InvalidRange`] when `min > max`.
///
/// # Examples
///
/// ```
/// use hilo_engine::rules::validate_range;
/// use hilo_engine::errors::GameError;
///
/// assert!(validate_range(1, 20).is_ok());
/// assert!(validate_range(5, 5).is_ok());
/// assert!(matches!(
///     validate_range(20, 1),
///     Err(GameError::InvalidRange { .. })
/// ));
/// ```
pub fn validate_range(min: i64, max: i64) -> Result<(), GameError> {
    if min > max {
        return Err(GameError::InvalidRange { min, max });
    }
    Ok(())
}
