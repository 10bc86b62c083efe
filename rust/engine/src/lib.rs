//! # hilo-engine: Guess-My-Number Game Core
//!
//! A deterministic engine for the classic number-guessing game: one secret
//! per session, comparison feedback per guess, a score that shrinks with
//! every miss, and a best score that survives across sessions. Reproducible
//! RNG makes whole runs replayable for debugging and verification.
//!
//! ## Core Modules
//!
//! - [`session`] - Session state machine: guesses, score, win/loss
//! - [`draw`] - Deterministic secret drawing with ChaCha20 RNG
//! - [`rules`] - Guess evaluation and range validation
//! - [`render`] - Feedback messages and UI slot effects
//! - [`highscore`] - Best-score candidate and overwrite policy
//! - [`logger`] - Session recording and SessionRecord serialization
//! - [`errors`] - Error types for session operations
//!
//! ## Quick Start
//!
//! ```rust
//! use hilo_engine::session::{GameSession, SessionConfig, Status};
//!
//! // Build a session around a known secret
//! let config = SessionConfig::default();
//! let mut session = GameSession::with_secret(config, None, 7).unwrap();
//!
//! let report = session.submit_guess(12).unwrap();
//! assert_eq!(report.score_shown, 15);
//!
//! session.submit_guess(7).unwrap();
//! assert_eq!(session.status(), Status::Won);
//! assert_eq!(session.best(), Some(14));
//! ```
//!
//! ## Deterministic Secrets
//!
//! All secrets are reproducible using seeded RNG:
//!
//! ```rust
//! use hilo_engine::draw::SecretDrawer;
//!
//! // Same seed produces the same stream of secrets
//! let mut d1 = SecretDrawer::new_with_seed(42);
//! let mut d2 = SecretDrawer::new_with_seed(42);
//! assert_eq!(d1.draw(1, 20), d2.draw(1, 20));
//! ```
//!
//! ## Rendering Without a Surface
//!
//! Transitions return effects instead of touching any output:
//!
//! ```rust
//! use hilo_engine::render::RenderEffect;
//! use hilo_engine::session::{GameSession, SessionConfig};
//!
//! let session = GameSession::with_secret(SessionConfig::default(), None, 7).unwrap();
//! let effects = session.opening_effects();
//!
//! assert!(effects.contains(&RenderEffect::ShowScore(15)));
//! assert!(effects.contains(&RenderEffect::ClearGuess));
//! ```

pub mod draw;
pub mod errors;
pub mod highscore;
pub mod logger;
pub mod render;
pub mod rules;
pub mod session;
