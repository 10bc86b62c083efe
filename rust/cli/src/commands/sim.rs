//! Simulation command handler for unattended session generation.
//!
//! This module runs batches of guess-my-number sessions without a human at
//! the keyboard. A strategy picks every guess: `binary` bisects the remaining
//! interval, `random` samples the full range each turn. Finished sessions can
//! be recorded to JSONL, which `stats` and `replay` consume.
//!
//! # Examples
//!
//! ```no_run
//! use hilo_cli::commands::handle_sim_command;
//! use hilo_cli::Strategy;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//!
//! // Run 1000 sessions with seed 42
//! handle_sim_command(
//!     1000,
//!     Some("data/sim.jsonl".to_string()),
//!     Some(42),
//!     None,
//!     None,
//!     None,
//!     Strategy::Binary,
//!     &mut out,
//!     &mut err,
//! )
//! .unwrap();
//! ```

use crate::cli::Strategy;
use crate::config;
use crate::error::CliError;
use crate::ui;
use hilo_engine::draw::SecretDrawer;
use hilo_engine::errors::GameError;
use hilo_engine::logger::{GuessRecord, SessionLogger, SessionRecord};
use hilo_engine::render::Feedback;
use hilo_engine::session::{GameSession, SessionConfig, Status};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::io::Write;

/// Handle the sim command: run unattended session batches.
///
/// Secrets come from one seeded drawer stream; the random strategy uses a
/// second stream derived from the same base seed, so a run is reproducible
/// from `seed` alone. The best score store is never touched.
///
/// # Arguments
///
/// * `sessions` - Total number of sessions to play
/// * `output` - Path to save session records (JSONL format)
/// * `seed` - Base seed for secrets and strategy (default: random)
/// * `min` - Lower bound of the secret range (default: configuration)
/// * `max` - Upper bound of the secret range (default: configuration)
/// * `score` - Starting score per session (default: configuration)
/// * `strategy` - Guessing strategy
/// * `out` - Output stream for normal messages
/// * `err` - Output stream for error messages
///
/// # Returns
///
/// `Ok(())` on success, or `CliError` on failure
#[allow(clippy::too_many_arguments)]
pub fn handle_sim_command(
    sessions: u64,
    output: Option<String>,
    seed: Option<u64>,
    min: Option<i64>,
    max: Option<i64>,
    score: Option<u32>,
    strategy: Strategy,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let total = sessions as usize;
    if total == 0 {
        ui::write_error(err, "sessions must be >= 1")?;
        return Err(CliError::InvalidInput("sessions must be >= 1".to_string()));
    }

    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let config = SessionConfig {
        min_number: min.unwrap_or(cfg.min_number),
        max_number: max.unwrap_or(cfg.max_number),
        starting_score: score.unwrap_or(cfg.starting_score),
    };
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    writeln!(
        out,
        "sim: sessions={} range=[{}, {}] score={} strategy={} seed={}",
        sessions,
        config.min_number,
        config.max_number,
        config.starting_score,
        strategy.as_str(),
        base_seed
    )?;

    let mut drawer = SecretDrawer::new_with_seed(base_seed);
    let mut strategy_rng = ChaCha20Rng::seed_from_u64(base_seed.wrapping_add(1));
    let mut logger = match output {
        Some(path) => Some(SessionLogger::create(path)?),
        None => None,
    };

    let mut session = GameSession::new(config, None, &mut drawer)
        .map_err(|e| CliError::Engine(e.to_string()))?;

    let mut completed = 0usize;
    let mut won = 0usize;
    let mut lost = 0usize;
    let mut guesses_on_wins = 0usize;

    loop {
        let guesses = play_session_to_completion(&mut session, strategy, &mut strategy_rng)
            .map_err(|e| CliError::Engine(e.to_string()))?;

        let result = match session.status() {
            Status::Won => {
                won += 1;
                guesses_on_wins += guesses.len();
                "won"
            }
            _ => {
                lost += 1;
                "lost"
            }
        };

        if let Some(log) = logger.as_mut() {
            let record = SessionRecord {
                session_id: log.next_id(),
                seed: Some(base_seed),
                min_number: config.min_number,
                max_number: config.max_number,
                starting_score: config.starting_score,
                secret: session.secret(),
                guesses,
                result: Some(result.to_string()),
                final_score: session.score(),
                best_after: None,
                ts: None,
            };
            log.write(&record)?;
        }

        completed += 1;
        if completed == total {
            break;
        }
        session = session
            .restart(None, &mut drawer)
            .map_err(|e| CliError::Engine(e.to_string()))?;
    }

    writeln!(out, "Simulated: {} sessions", completed)?;
    writeln!(out, "Won: {} Lost: {}", won, lost)?;
    if won > 0 {
        writeln!(
            out,
            "Average guesses per win: {:.2}",
            guesses_on_wins as f64 / won as f64
        )?;
    }
    Ok(())
}

/// Play a session to completion with the given strategy (module-private
/// helper).
///
/// Returns the accepted guesses in order; the session is terminal when this
/// returns. The binary strategy tracks the interval the feedback has not yet
/// ruled out, so it never repeats a guess.
fn play_session_to_completion(
    session: &mut GameSession,
    strategy: Strategy,
    rng: &mut ChaCha20Rng,
) -> Result<Vec<GuessRecord>, GameError> {
    let config = session.config();
    let mut lo = config.min_number;
    let mut hi = config.max_number;
    let mut guesses = Vec::new();

    while session.status() == Status::Playing {
        let guess = match strategy {
            Strategy::Binary => lo + (hi - lo) / 2,
            Strategy::Random => rng.random_range(config.min_number..=config.max_number),
        };
        let report = session.submit_guess(guess)?;
        match report.feedback {
            Feedback::TooLow => lo = guess + 1,
            Feedback::TooHigh => hi = guess - 1,
            _ => {}
        }
        guesses.push(GuessRecord {
            guess,
            feedback: report.feedback,
            score_shown: report.score_shown,
        });
    }
    Ok(guesses)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_records(path: &std::path::Path) -> Vec<SessionRecord> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_handle_sim_command_zero_sessions_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_sim_command(
            0,
            None,
            Some(1),
            Some(1),
            Some(20),
            Some(15),
            Strategy::Binary,
            &mut out,
            &mut err,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(String::from_utf8(err).unwrap().contains("sessions must be >= 1"));
    }

    #[test]
    fn test_handle_sim_command_binary_always_wins_with_ample_score() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim.jsonl");
        let mut out = Vec::new();
        let mut err = Vec::new();

        // Fifteen points cover any binary search over twenty values.
        let result = handle_sim_command(
            5,
            Some(path.to_string_lossy().into_owned()),
            Some(42),
            Some(1),
            Some(20),
            Some(15),
            Strategy::Binary,
            &mut out,
            &mut err,
        );
        assert!(result.is_ok());

        let records = read_records(&path);
        assert_eq!(records.len(), 5);
        for record in &records {
            assert_eq!(record.result.as_deref(), Some("won"));
            assert!(record.guesses.len() <= 5, "binary needs at most five guesses");
            assert!((1..=20).contains(&record.secret));
        }

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Simulated: 5 sessions"));
        assert!(output.contains("Won: 5 Lost: 0"));
        assert!(output.contains("Average guesses per win:"));
    }

    #[test]
    fn test_handle_sim_command_same_seed_same_secrets() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.jsonl");
        let second = dir.path().join("b.jsonl");

        for path in [&first, &second] {
            let mut out = Vec::new();
            let mut err = Vec::new();
            handle_sim_command(
                4,
                Some(path.to_string_lossy().into_owned()),
                Some(7),
                Some(1),
                Some(100),
                Some(10),
                Strategy::Random,
                &mut out,
                &mut err,
            )
            .unwrap();
        }

        let secrets_a: Vec<i64> = read_records(&first).iter().map(|r| r.secret).collect();
        let secrets_b: Vec<i64> = read_records(&second).iter().map(|r| r.secret).collect();
        assert_eq!(secrets_a, secrets_b, "one seed fixes the secret stream");

        let guesses_a: Vec<Vec<i64>> = read_records(&first)
            .iter()
            .map(|r| r.guesses.iter().map(|g| g.guess).collect())
            .collect();
        let guesses_b: Vec<Vec<i64>> = read_records(&second)
            .iter()
            .map(|r| r.guesses.iter().map(|g| g.guess).collect())
            .collect();
        assert_eq!(guesses_a, guesses_b, "one seed fixes the strategy too");
    }

    #[test]
    fn test_handle_sim_command_tallies_match_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim.jsonl");
        let mut out = Vec::new();
        let mut err = Vec::new();

        // A single point over a wide range loses most sessions.
        handle_sim_command(
            8,
            Some(path.to_string_lossy().into_owned()),
            Some(11),
            Some(1),
            Some(1000),
            Some(1),
            Strategy::Random,
            &mut out,
            &mut err,
        )
        .unwrap();

        let records = read_records(&path);
        let won = records
            .iter()
            .filter(|r| r.result.as_deref() == Some("won"))
            .count();
        let lost = records
            .iter()
            .filter(|r| r.result.as_deref() == Some("lost"))
            .count();
        assert_eq!(won + lost, 8);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains(&format!("Won: {} Lost: {}", won, lost)));
    }

    #[test]
    fn test_handle_sim_command_score_accounting_in_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim.jsonl");
        let mut out = Vec::new();
        let mut err = Vec::new();

        handle_sim_command(
            3,
            Some(path.to_string_lossy().into_owned()),
            Some(5),
            Some(1),
            Some(50),
            Some(6),
            Strategy::Binary,
            &mut out,
            &mut err,
        )
        .unwrap();

        for record in read_records(&path) {
            for (k, guess) in record.guesses.iter().enumerate() {
                assert_eq!(
                    guess.score_shown,
                    record.starting_score - k as u32,
                    "displayed score counts down one per guess"
                );
            }
            assert_eq!(
                record.final_score,
                record.starting_score - record.guesses.len() as u32
            );
        }
    }

    #[test]
    fn test_play_session_to_completion_single_value_range() {
        let config = SessionConfig {
            min_number: 9,
            max_number: 9,
            starting_score: 3,
        };
        let mut session = GameSession::with_secret(config, None, 9).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(0);

        let guesses = play_session_to_completion(&mut session, Strategy::Binary, &mut rng).unwrap();
        assert_eq!(guesses.len(), 1);
        assert_eq!(guesses[0].guess, 9);
        assert_eq!(session.status(), Status::Won);
    }
}
