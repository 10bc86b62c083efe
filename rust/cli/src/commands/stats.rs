//! Statistics aggregation command for session history analysis.
//!
//! This module provides functionality to aggregate statistics from JSONL
//! session history files. It computes summary metrics including total
//! sessions played, outcome distribution, best score seen, and validates
//! score accounting within every record.

use crate::error::CliError;
use crate::io_utils::read_text_file;
use crate::ui;
use hilo_engine::highscore;
use hilo_engine::logger::SessionRecord;
use hilo_engine::render::Feedback;
use std::io::Write;
use std::path::Path;

/// Aggregates statistics from JSONL session history files.
///
/// Reads session history files and computes summary statistics including
/// total sessions played, win/loss/abandoned counts, win rate, best score
/// seen, and average guesses per win.
///
/// # Arguments
///
/// * `input` - Path to JSONL file or directory containing session histories
/// * `out` - Output stream for statistics report
/// * `err` - Output stream for error messages and warnings
///
/// # Returns
///
/// `Result<(), CliError>`: `Ok(())` when statistics are valid, otherwise an
/// `Err` that maps to exit code `2`.
///
/// # Validation
///
/// - Detects corrupted or incomplete records
/// - Verifies score accounting (displayed score counts down one per guess
///   and the final score matches the number of guesses charged)
/// - Verifies the recorded outcome matches the recorded feedback
/// - Reports warnings for skipped records
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    run_stats(&input, out, err)
}

/// Internal statistics aggregation implementation
fn run_stats(input: &str, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    struct StatsState {
        sessions: u64,
        won: u64,
        lost: u64,
        abandoned: u64,
        skipped: u64,
        corrupted: u64,
        guesses_on_wins: u64,
        best_seen: Option<u32>,
        stats_ok: bool,
    }

    fn record_violations(rec: &SessionRecord) -> Vec<String> {
        let mut violations = Vec::new();

        for (k, guess) in rec.guesses.iter().enumerate() {
            if Some(guess.score_shown) != rec.starting_score.checked_sub(k as u32) {
                violations.push(format!(
                    "Score accounting violated at session {}",
                    rec.session_id
                ));
                break;
            }
        }
        if rec
            .starting_score
            .checked_sub(rec.guesses.len() as u32)
            .is_none_or(|left| left != rec.final_score)
        {
            violations.push(format!(
                "Final score does not match guess count at session {}",
                rec.session_id
            ));
        }

        match rec.result.as_deref() {
            Some("won") => {
                let won_on_last = rec
                    .guesses
                    .last()
                    .is_some_and(|g| g.feedback == Feedback::Correct);
                if !won_on_last {
                    violations.push(format!(
                        "Recorded win without a correct final guess at session {}",
                        rec.session_id
                    ));
                }
            }
            Some("lost") => {
                if rec.final_score != 0 {
                    violations.push(format!(
                        "Recorded loss with score remaining at session {}",
                        rec.session_id
                    ));
                }
            }
            _ => {}
        }

        violations
    }

    fn consume_stats_content(
        content: String,
        state: &mut StatsState,
        err: &mut dyn Write,
    ) -> Result<(), CliError> {
        let has_trailing_nl = content.ends_with('\n');
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        for (i, line) in lines.iter().enumerate() {
            let parsed: serde_json::Value = match serde_json::from_str(line) {
                Ok(v) => v,
                Err(_) => {
                    if i == lines.len() - 1 && !has_trailing_nl {
                        state.skipped += 1;
                    } else {
                        state.corrupted += 1;
                    }
                    continue;
                }
            };

            let rec: SessionRecord = match serde_json::from_value(parsed) {
                Ok(v) => v,
                Err(_) => {
                    state.corrupted += 1;
                    continue;
                }
            };

            for violation in record_violations(&rec) {
                state.stats_ok = false;
                ui::write_error(err, &violation)?;
            }

            state.sessions += 1;
            match rec.result.as_deref() {
                Some("won") => {
                    state.won += 1;
                    state.guesses_on_wins += rec.guesses.len() as u64;
                    let achieved = highscore::candidate_best(rec.final_score);
                    if state.best_seen.is_none_or(|b| achieved > b) {
                        state.best_seen = Some(achieved);
                    }
                }
                Some("lost") => state.lost += 1,
                _ => state.abandoned += 1,
            }
        }
        Ok(())
    }

    let path = Path::new(input);
    let mut state = StatsState {
        sessions: 0,
        won: 0,
        lost: 0,
        abandoned: 0,
        skipped: 0,
        corrupted: 0,
        guesses_on_wins: 0,
        best_seen: None,
        stats_ok: true,
    };

    if path.is_dir() {
        let mut stack = vec![path.to_path_buf()];
        while let Some(d) = stack.pop() {
            let rd = match std::fs::read_dir(&d) {
                Ok(v) => v,
                Err(_) => continue,
            };
            for e in rd.filter_map(Result::ok) {
                let p = e.path();
                if p.is_dir() {
                    stack.push(p);
                } else if let Some(fname) = p.file_name().and_then(|f| f.to_str())
                    && fname.ends_with(".jsonl")
                {
                    match read_text_file(&p.to_string_lossy()) {
                        Ok(content) => {
                            consume_stats_content(content, &mut state, err)?;
                        }
                        Err(_) => {
                            state.corrupted += 1;
                        }
                    }
                }
            }
        }
    } else {
        match read_text_file(input) {
            Ok(s) => consume_stats_content(s, &mut state, err)?,
            Err(e) => {
                ui::write_error(err, &format!("Failed to read {}: {}", input, e))?;
                return Err(CliError::Config(format!("Failed to read {}: {}", input, e)));
            }
        }
    }

    if state.corrupted > 0 {
        ui::write_error(
            err,
            &format!("Skipped {} corrupted record(s)", state.corrupted),
        )?;
    }
    if state.skipped > 0 {
        ui::write_error(
            err,
            &format!("Discarded {} incomplete final line(s)", state.skipped),
        )?;
    }
    if !path.is_dir() && state.sessions == 0 && (state.corrupted > 0 || state.skipped > 0) {
        ui::write_error(err, "Invalid record")?;
        return Err(CliError::InvalidInput("Invalid record".to_string()));
    }

    let finished = state.won + state.lost;
    let win_rate = (finished > 0).then(|| state.won as f64 / finished as f64);
    let avg_guesses = (state.won > 0).then(|| state.guesses_on_wins as f64 / state.won as f64);
    let summary = serde_json::json!({
        "sessions": state.sessions,
        "outcomes": {
            "won": state.won,
            "lost": state.lost,
            "abandoned": state.abandoned,
        },
        "win_rate": win_rate,
        "best_score": state.best_seen,
        "avg_guesses_per_win": avg_guesses,
    });
    let json_output = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
    writeln!(out, "{}", json_output)?;
    if state.stats_ok {
        Ok(())
    } else {
        Err(CliError::InvalidInput(
            "Statistics validation failed".to_string(),
        ))
    }
}
