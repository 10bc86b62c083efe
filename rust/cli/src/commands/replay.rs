//! Replay command handler.
//!
//! This module implements session history replay, allowing users to step
//! through previously recorded guess-my-number sessions from JSONL files.
//!
//! ## Features
//!
//! - Interactive session-by-session replay
//! - Timed playback with `--speed` (skips the interactive prompt)
//! - Every recorded guess is re-run against a session rebuilt from the
//!   recorded secret; feedback or score divergence fails the command
//!
//! ## Format
//!
//! Replays sessions from JSONL files containing `SessionRecord` structures
//! with range, starting score, secret, the accepted guesses, and the outcome.

use crate::error::CliError;
use crate::formatters::{format_feedback, format_score};
use crate::io_utils::read_text_file;
use crate::parse_json_or_continue;
use crate::ui;
use crate::validation::validate_speed;
use hilo_engine::logger::SessionRecord;
use hilo_engine::session::{GameSession, SessionConfig, Status};
use std::io::Write;

/// Handle the replay command.
///
/// Loads sessions from a JSONL file, renders each as a transcript and
/// verifies the recorded feedback against a fresh engine run. Without
/// `--speed` the user steps through sessions interactively; with it the
/// replay advances on a timer.
///
/// # Arguments
///
/// * `input` - Path to JSONL file containing session histories
/// * `speed` - Optional playback speed multiplier (must be positive)
/// * `out` - Output stream for the transcript display
/// * `err` - Error stream for warnings and errors
///
/// # Returns
///
/// `Ok(())` when every session replays cleanly, `Err(CliError)` if the file
/// cannot be read, the speed is invalid, or any session diverges.
pub fn handle_replay_command(
    input: String,
    speed: Option<f64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if let Err(msg) = validate_speed(speed) {
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }

    // Delay between sessions in timed mode; speed 1.0 is half a second.
    let delay = speed.map(|s| std::time::Duration::from_millis((500.0 / s) as u64));

    let content = match read_text_file(&input) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!("Failed to read {}: {}", input, e);
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };

    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    let total_sessions = lines.len();

    if total_sessions == 0 {
        writeln!(out, "No sessions found in file.")?;
        return Ok(());
    }

    let mut session_num = 0;
    let mut sessions_shown = 0usize;
    let mut diverged = 0usize;

    for line in lines {
        session_num += 1;

        let record: SessionRecord =
            parse_json_or_continue!(line, err, format!("session {}", session_num));
        sessions_shown += 1;

        writeln!(
            out,
            "Session {} (Seed: {})",
            record.session_id,
            record
                .seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "N/A".to_string())
        )?;
        writeln!(out, "═══════════════════════════════════════")?;
        writeln!(
            out,
            "Range: [{}, {}]  Starting score: {}",
            record.min_number, record.max_number, record.starting_score
        )?;

        if !replay_session(&record, out, err)? {
            diverged += 1;
        }
        writeln!(out)?;

        if session_num < total_sessions {
            match delay {
                Some(d) => std::thread::sleep(d),
                None => {
                    writeln!(out, "Press Enter for next session (or 'q' to quit)...")?;
                    let mut user_input = String::new();
                    if std::io::stdin().read_line(&mut user_input).is_ok() {
                        let trimmed = user_input.trim().to_lowercase();
                        if trimmed == "q" || trimmed == "quit" {
                            writeln!(
                                out,
                                "Replay stopped at session {}/{}",
                                session_num, total_sessions
                            )?;
                            return replay_result(diverged);
                        }
                    }
                }
            }
        }
    }

    writeln!(out, "Replay complete. {} sessions shown.", sessions_shown)?;
    replay_result(diverged)
}

/// Re-run one recorded session against the engine (module-private helper).
///
/// Renders the transcript as it goes. Returns `Ok(true)` when the engine
/// reproduced every recorded guess and the outcome, `Ok(false)` on
/// divergence; `Err` only for stream failures.
fn replay_session(
    record: &SessionRecord,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<bool, CliError> {
    let config = SessionConfig {
        min_number: record.min_number,
        max_number: record.max_number,
        starting_score: record.starting_score,
    };
    let mut session = match GameSession::with_secret(config, None, record.secret) {
        Ok(s) => s,
        Err(e) => {
            ui::write_error(
                err,
                &format!("Cannot rebuild session {}: {}", record.session_id, e),
            )?;
            return Ok(false);
        }
    };

    for (k, recorded) in record.guesses.iter().enumerate() {
        let report = match session.submit_guess(recorded.guess) {
            Ok(r) => r,
            Err(e) => {
                ui::write_error(
                    err,
                    &format!(
                        "Divergence at session {} guess {}: {}",
                        record.session_id,
                        k + 1,
                        e
                    ),
                )?;
                return Ok(false);
            }
        };

        writeln!(
            out,
            "  {} -> {} ({})",
            recorded.guess,
            format_feedback(report.feedback),
            format_score(report.score_shown)
        )?;

        if report.feedback != recorded.feedback || report.score_shown != recorded.score_shown {
            ui::write_error(
                err,
                &format!(
                    "Divergence at session {} guess {}: recorded {} ({}), engine answered {} ({})",
                    record.session_id,
                    k + 1,
                    format_feedback(recorded.feedback),
                    recorded.score_shown,
                    format_feedback(report.feedback),
                    report.score_shown
                ),
            )?;
            return Ok(false);
        }
    }

    if let Some(result) = record.result.as_deref() {
        writeln!(out, "Result: {} (final score {})", result, record.final_score)?;
        let expected = match session.status() {
            Status::Won => "won",
            Status::Lost => "lost",
            Status::Playing => "abandoned",
        };
        if result != expected {
            ui::write_error(
                err,
                &format!(
                    "Divergence at session {}: recorded outcome {} but engine ended {}",
                    record.session_id, result, expected
                ),
            )?;
            return Ok(false);
        }
    }

    Ok(true)
}

fn replay_result(diverged: usize) -> Result<(), CliError> {
    if diverged == 0 {
        Ok(())
    } else {
        Err(CliError::InvalidInput(format!(
            "Replay diverged in {} session(s)",
            diverged
        )))
    }
}
