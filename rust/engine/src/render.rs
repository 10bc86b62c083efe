use serde::{Deserialize, Serialize};

/// Player-facing feedback message for a session state change.
/// The engine picks the message; presentation text belongs to the frontend.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Feedback {
    /// Opening prompt shown before the first guess
    Start,
    /// Guess was below the secret
    TooLow,
    /// Guess was above the secret
    TooHigh,
    /// Guess matched the secret
    Correct,
    /// Score ran out without finding the secret
    Lost,
}

/// One UI slot update emitted by the session.
///
/// Effects are ordered: applying them in sequence reproduces the exact
/// presentation the session intends, including the rule that the score
/// shown for a guess is the value before that guess is charged.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RenderEffect {
    /// Label the guessing range
    ShowBounds { min: i64, max: i64 },
    /// Fill the number slot with the submitted guess
    ShowGuess(i64),
    /// Reset the number slot to its placeholder
    ClearGuess,
    /// Update the message slot
    ShowMessage(Feedback),
    /// Update the score slot
    ShowScore(u32),
    /// Update the best-score slot
    ShowBest(u32),
    /// Write the best score to durable storage
    PersistBest(u32),
    /// Flag the session as won (celebratory styling)
    MarkWon,
    /// Flag the session as lost
    MarkLost,
    /// Stop accepting guess input until restart
    DisableGuessing,
}
