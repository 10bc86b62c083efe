//! # Play Command
//!
//! Interactive guess-my-number sessions at the terminal.
//!
//! This module provides the `handle_play_command` function for playing
//! sessions in the hilo CLI. The handler drives a [`GameSession`] over stdin:
//! integers are submitted as guesses, `again`/`restart` rebuilds the session,
//! `q`/`quit` (or EOF) ends the run, and anything else is silently ignored.
//!
//! ## Features
//!
//! - Render effects from the engine applied to the terminal line by line
//! - Best score persisted through [`HighScoreStore`] when a win qualifies
//! - Optional session recording to a JSONL file via [`SessionLogger`]
//! - Configuration merge: flags take precedence over env and config file

use crate::config;
use crate::error::CliError;
use crate::formatters;
use crate::io_utils::read_stdin_line;
use crate::store::{default_store_path, HighScoreStore};
use crate::ui;
use crate::validation::{parse_guess_line, GuessInput};
use hilo_engine::draw::SecretDrawer;
use hilo_engine::logger::{GuessRecord, SessionLogger, SessionRecord};
use hilo_engine::render::RenderEffect;
use hilo_engine::session::{GameSession, SessionConfig, Status};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Handle the play command: interactive guessing sessions
///
/// # Arguments
///
/// * `min` - Lower bound of the secret range (default: configuration)
/// * `max` - Upper bound of the secret range (default: configuration)
/// * `score` - Starting score, must be >= 1 (default: configuration)
/// * `seed` - Seed for the secret stream (default: configuration or random)
/// * `store` - Best-score store path (default: configuration or data dir)
/// * `record` - JSONL file to append finished sessions to (default: off)
/// * `out` - Output stream for the session display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for guesses and commands
///
/// # Returns
///
/// * `Ok(())` when the player quits or input ends
/// * `Err(CliError)` if configuration, engine setup, or recording fails
///
/// # Examples
///
/// ```ignore
/// use hilo_cli::commands::handle_play_command;
/// use std::io::{stdin, stderr, stdout};
///
/// let mut out = stdout();
/// let mut err = stderr();
/// let mut input = stdin().lock();
///
/// handle_play_command(None, None, None, None, None, None, &mut out, &mut err, &mut input)
///     .unwrap();
/// ```
#[allow(clippy::too_many_arguments)]
pub fn handle_play_command(
    min: Option<i64>,
    max: Option<i64>,
    score: Option<u32>,
    seed: Option<u64>,
    store: Option<String>,
    record: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;

    let config = SessionConfig {
        min_number: min.unwrap_or(cfg.min_number),
        max_number: max.unwrap_or(cfg.max_number),
        starting_score: score.unwrap_or(cfg.starting_score),
    };
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let store_path = store
        .or(cfg.store)
        .map(PathBuf::from)
        .unwrap_or_else(default_store_path);

    execute_play_command(config, seed, store_path, record, stdin, out, err)
}

/// Execute the play command with resolved parameters (module-private helper)
///
/// Runs the session loop: prompt, parse, submit, apply render effects,
/// repeat until quit or end of input.
fn execute_play_command(
    config: SessionConfig,
    seed: u64,
    store_path: PathBuf,
    record: Option<String>,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let store = HighScoreStore::at(store_path);
    let mut logger = match record {
        Some(path) => Some(SessionLogger::create(path)?),
        None => None,
    };

    writeln!(
        out,
        "play: range=[{}, {}] score={} seed={}",
        config.min_number, config.max_number, config.starting_score, seed
    )?;

    let mut drawer = SecretDrawer::new_with_seed(seed);
    let mut session = GameSession::new(config, store.load(), &mut drawer)
        .map_err(|e| CliError::Engine(e.to_string()))?;
    apply_effects(&session.opening_effects(), &store, out, err)?;

    let mut guesses: Vec<GuessRecord> = Vec::new();
    let mut finished = 0u32;

    loop {
        let prompt = match session.status() {
            Status::Playing => "Enter guess (or 'q' to quit): ",
            _ => "Enter 'again' to restart or 'q' to quit: ",
        };
        write!(out, "{}", prompt)?;
        out.flush()?;

        let Some(input) = read_stdin_line(stdin) else {
            break;
        };

        match parse_guess_line(&input) {
            GuessInput::Guess(guess) => {
                if session.status() != Status::Playing {
                    ui::write_error(err, "Session is over. Type 'again' or 'q'.")?;
                    continue;
                }
                let report = session
                    .submit_guess(guess)
                    .map_err(|e| CliError::Engine(e.to_string()))?;
                apply_effects(&report.effects, &store, out, err)?;
                guesses.push(GuessRecord {
                    guess,
                    feedback: report.feedback,
                    score_shown: report.score_shown,
                });
                match session.status() {
                    Status::Won => {
                        finish_session(&mut logger, &session, seed, &mut guesses, "won")?;
                        finished += 1;
                        writeln!(out, "Type 'again' for a new round, 'q' to quit.")?;
                    }
                    Status::Lost => {
                        finish_session(&mut logger, &session, seed, &mut guesses, "lost")?;
                        finished += 1;
                        writeln!(out, "Type 'again' for a new round, 'q' to quit.")?;
                    }
                    Status::Playing => {}
                }
            }
            GuessInput::Restart => {
                if !guesses.is_empty() {
                    finish_session(&mut logger, &session, seed, &mut guesses, "abandoned")?;
                }
                session = session
                    .restart(store.load(), &mut drawer)
                    .map_err(|e| CliError::Engine(e.to_string()))?;
                apply_effects(&session.opening_effects(), &store, out, err)?;
            }
            GuessInput::Quit => break,
            GuessInput::Ignored => {}
        }
    }

    if !guesses.is_empty() {
        finish_session(&mut logger, &session, seed, &mut guesses, "abandoned")?;
    }
    writeln!(out, "Sessions finished: {}", finished)?;
    Ok(())
}

/// Apply the engine's render effects to the terminal (module-private helper)
///
/// `PersistBest` writes through the store; a failed write degrades to a
/// warning so the session keeps going. `DisableGuessing` has no terminal
/// rendering; input gating is handled by the play loop.
fn apply_effects(
    effects: &[RenderEffect],
    store: &HighScoreStore,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    for effect in effects {
        match effect {
            RenderEffect::ShowBounds { min, max } => {
                writeln!(out, "{}", formatters::format_bounds(*min, *max))?;
            }
            RenderEffect::ShowGuess(guess) => {
                writeln!(out, "{}", formatters::format_guess_slot(Some(*guess)))?;
            }
            RenderEffect::ClearGuess => {
                writeln!(out, "{}", formatters::format_guess_slot(None))?;
            }
            RenderEffect::ShowMessage(feedback) => {
                writeln!(out, "{}", formatters::format_feedback(*feedback))?;
            }
            RenderEffect::ShowScore(score) => {
                writeln!(out, "{}", formatters::format_score(*score))?;
            }
            RenderEffect::ShowBest(best) => {
                writeln!(out, "{}", formatters::format_best(*best))?;
            }
            RenderEffect::PersistBest(best) => {
                if let Err(e) = store.save(*best) {
                    ui::display_warning(err, &format!("failed to persist best score: {}", e))?;
                }
            }
            RenderEffect::MarkWon => {
                writeln!(out, "You won!")?;
            }
            RenderEffect::MarkLost => {
                writeln!(out, "You lost.")?;
            }
            RenderEffect::DisableGuessing => {}
        }
    }
    Ok(())
}

/// Write the finished session to the record file (module-private helper)
///
/// Drains the collected guesses either way so the next session starts from
/// an empty list even when recording is off.
fn finish_session(
    logger: &mut Option<SessionLogger>,
    session: &GameSession,
    seed: u64,
    guesses: &mut Vec<GuessRecord>,
    result: &str,
) -> Result<(), CliError> {
    let guesses = std::mem::take(guesses);
    if let Some(log) = logger.as_mut() {
        let config = session.config();
        let record = SessionRecord {
            session_id: log.next_id(),
            seed: Some(seed),
            min_number: config.min_number,
            max_number: config.max_number,
            starting_score: config.starting_score,
            secret: session.secret(),
            guesses,
            result: Some(result.to_string()),
            final_score: session.score(),
            best_after: session.best(),
            ts: None,
        };
        log.write(&record)?;
    }
    Ok(())
}
