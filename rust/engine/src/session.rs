use crate::draw::SecretDrawer;
use crate::errors::GameError;
use crate::highscore;
use crate::render::{Feedback, RenderEffect};
use crate::rules::{self, Outcome};

/// Construction-time settings for a session.
///
/// The values are fixed for the lifetime of a session; changing them means
/// starting a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Inclusive lower bound of the guessing range
    pub min_number: i64,
    /// Inclusive upper bound of the guessing range
    pub max_number: i64,
    /// Score the session opens with; each wrong guess costs one point
    pub starting_score: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_number: 1,
            max_number: 20,
            starting_score: 15,
        }
    }
}

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Accepting guesses
    Playing,
    /// Secret found; only restart is possible
    Won,
    /// Score exhausted; only restart is possible
    Lost,
}

/// Result of one accepted guess: the feedback that was chosen, the score
/// value displayed for this guess (charged only after display), and the
/// ordered slot updates to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub feedback: Feedback,
    pub score_shown: u32,
    pub effects: Vec<RenderEffect>,
}

/// One round of the guessing game against a single hidden number.
///
/// The session is a pure state machine: it owns the secret, the score and
/// the win/loss state, and answers every guess with a [`GuessReport`] whose
/// effects a frontend applies verbatim. It never touches storage or I/O
/// itself; persistence is requested through [`RenderEffect::PersistBest`].
///
/// # Examples
///
/// ```
/// use hilo_engine::session::{GameSession, SessionConfig, Status};
///
/// let mut session = GameSession::with_secret(SessionConfig::default(), None, 7).unwrap();
///
/// let report = session.submit_guess(12).unwrap();
/// assert_eq!(report.score_shown, 15);
/// assert_eq!(session.score(), 14);
///
/// session.submit_guess(7).unwrap();
/// assert_eq!(session.status(), Status::Won);
/// assert_eq!(session.best(), Some(14));
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Hidden number the player is hunting for
    secret: i64,
    /// Settings the session was built with
    config: SessionConfig,
    /// Remaining score after all charges so far
    score: u32,
    /// Most recent accepted guess, if any
    last_guess: Option<i64>,
    /// Best score carried in from storage, updated on qualifying wins
    best: Option<u32>,
    status: Status,
}

impl GameSession {
    /// Builds a session with a secret drawn from `drawer`.
    ///
    /// `best` is whatever the caller loaded from storage; `None` means no
    /// best score has ever been recorded.
    pub fn new(
        config: SessionConfig,
        best: Option<u32>,
        drawer: &mut SecretDrawer,
    ) -> Result<Self, GameError> {
        rules::validate_range(config.min_number, config.max_number)?;
        let secret = drawer.draw(config.min_number, config.max_number);
        Ok(Self::from_parts(config, best, secret))
    }

    /// Builds a session around a known secret, for replay verification and
    /// deterministic tests.
    pub fn with_secret(
        config: SessionConfig,
        best: Option<u32>,
        secret: i64,
    ) -> Result<Self, GameError> {
        rules::validate_range(config.min_number, config.max_number)?;
        if secret < config.min_number || secret > config.max_number {
            return Err(GameError::SecretOutOfRange {
                secret,
                min: config.min_number,
                max: config.max_number,
            });
        }
        Ok(Self::from_parts(config, best, secret))
    }

    fn from_parts(config: SessionConfig, best: Option<u32>, secret: i64) -> Self {
        Self {
            secret,
            config,
            score: config.starting_score,
            last_guess: None,
            best,
            status: Status::Playing,
        }
    }

    /// Slot updates for a freshly built session: range label, cleared
    /// number slot, opening message, starting score and stored best.
    ///
    /// Rendering the opening costs nothing; the score starts being charged
    /// with the first guess.
    pub fn opening_effects(&self) -> Vec<RenderEffect> {
        vec![
            RenderEffect::ShowBounds {
                min: self.config.min_number,
                max: self.config.max_number,
            },
            RenderEffect::ClearGuess,
            RenderEffect::ShowMessage(Feedback::Start),
            RenderEffect::ShowScore(self.score),
            RenderEffect::ShowBest(self.best.unwrap_or(0)),
        ]
    }

    /// Evaluates one guess and advances the session.
    ///
    /// The score shown with the feedback is the value from before this
    /// guess; the point is deducted afterwards. A wrong guess that leaves
    /// the score at zero ends the session as lost, a correct guess ends it
    /// as won and may carry a [`RenderEffect::PersistBest`] effect.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SessionOver`] once the session is won or lost;
    /// terminal sessions only accept restart.
    pub fn submit_guess(&mut self, guess: i64) -> Result<GuessReport, GameError> {
        if self.status != Status::Playing {
            return Err(GameError::SessionOver);
        }

        self.last_guess = Some(guess);
        let shown = self.score;
        let outcome = rules::evaluate_guess(guess, self.secret, shown);

        let mut effects = vec![
            RenderEffect::ShowGuess(guess),
            RenderEffect::ShowMessage(outcome.feedback()),
            RenderEffect::ShowScore(shown),
        ];
        self.score = shown.saturating_sub(1);

        match outcome {
            Outcome::Correct => {
                self.status = Status::Won;
                let candidate = highscore::candidate_best(self.score);
                if highscore::qualifies(self.best, candidate) {
                    self.best = Some(candidate);
                    effects.push(RenderEffect::PersistBest(candidate));
                    effects.push(RenderEffect::ShowBest(candidate));
                }
                effects.push(RenderEffect::MarkWon);
                effects.push(RenderEffect::DisableGuessing);
            }
            Outcome::Exhausted => {
                self.status = Status::Lost;
                effects.push(RenderEffect::MarkLost);
                effects.push(RenderEffect::DisableGuessing);
            }
            Outcome::TooLow | Outcome::TooHigh => {
                if self.score == rules::EXHAUSTED {
                    // the charge for this miss used up the last point
                    self.status = Status::Lost;
                    effects.push(RenderEffect::MarkLost);
                    effects.push(RenderEffect::DisableGuessing);
                }
            }
        }

        Ok(GuessReport {
            feedback: outcome.feedback(),
            score_shown: shown,
            effects,
        })
    }

    /// Full restart: the old session is consumed and a fresh one is drawn
    /// from the same stream. Nothing carries over except the configuration
    /// and whatever best score the caller passes back in.
    pub fn restart(
        self,
        best: Option<u32>,
        drawer: &mut SecretDrawer,
    ) -> Result<GameSession, GameError> {
        GameSession::new(self.config, best, drawer)
    }

    pub fn secret(&self) -> i64 {
        self.secret
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Remaining score after every charge so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> Option<u32> {
        self.best
    }

    pub fn last_guess(&self) -> Option<i64> {
        self.last_guess
    }

    pub fn status(&self) -> Status {
        self.status
    }
}
