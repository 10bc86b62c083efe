//! # Hilo CLI Library
//!
//! This library provides the command-line interface for the hilo guessing
//! game engine. It exposes subcommands for playing, simulating, analyzing,
//! and replaying guess-my-number sessions.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["hilo", "play", "--seed", "7"];
//! let code = hilo_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play interactive sessions at the terminal
//! - `sim`: Run unattended session batches with a guessing strategy
//! - `stats`: Aggregate statistics from JSONL session history files
//! - `replay`: Replay recorded sessions and verify them against the engine
//! - `best`: Show or reset the persisted best score
//! - `cfg`: Display current configuration settings
//! - `rng`: Sample the secret-number generator

use clap::Parser;
use std::io::Write;
pub mod cli;
pub mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
mod macros;
pub mod store;
pub mod ui;
pub mod validation;

// Import CLI types from cli module
use cli::{Commands, HiloCli};

// Import handler functions from the command modules
use commands::{
    handle_best_command, handle_cfg_command, handle_play_command, handle_replay_command,
    handle_rng_command, handle_sim_command, handle_stats_command,
};

pub use cli::Strategy;
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand
/// handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["hilo", "rng", "--seed", "42", "--samples", "100"];
/// let code = hilo_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
///
/// # Available Commands
///
/// - `play --min A --max B --score N --seed S`: Play interactive sessions
/// - `sim --sessions N --strategy {binary|random} --output FILE`: Simulate
///   N sessions and save the records to FILE
/// - `stats --input PATH`: Display statistics from session history files
/// - `replay --input FILE [--speed X]`: Replay and verify recorded sessions
/// - `best [--reset]`: Show or reset the persisted best score
/// - `cfg`: Display configuration settings with sources
/// - `rng --seed N --samples M`: Sample the secret drawer
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "stats", "replay", "best", "cfg", "rng"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = HiloCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    // Print clap error first
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "");
                    write_or_exit!(err, "Hilo Guess-My-Number CLI");
                    write_or_exit!(err, "Usage: hilo <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: hilo --help");
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Cfg => match handle_cfg_command(out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Play {
                min,
                max,
                score,
                seed,
                store,
                record,
            } => {
                // Use stdin for real input (supports both TTY and piped stdin)
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                match handle_play_command(
                    min,
                    max,
                    score,
                    seed,
                    store,
                    record,
                    out,
                    err,
                    &mut stdin_lock,
                ) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(e) => {
                        write_or_exit!(err, "Error: {}", e);
                        exit_code::ERROR
                    }
                }
            }
            Commands::Replay { input, speed } => {
                match handle_replay_command(input, speed, out, err) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(_) => exit_code::ERROR,
                }
            }
            Commands::Stats { input } => match handle_stats_command(input, out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Best { store, reset } => match handle_best_command(store, reset, out) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Rng {
                seed,
                samples,
                min,
                max,
            } => match handle_rng_command(seed, samples, min, max, out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Sim {
                sessions,
                output,
                seed,
                min,
                max,
                score,
                strategy,
            } => match handle_sim_command(
                sessions, output, seed, min, max, score, strategy, out, err,
            ) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cfg_command_dispatch() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("min_number"));
    }

    #[test]
    fn test_rng_command_dispatch_with_seed() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_rng_command(Some(42), 100, Some(1), Some(20), &mut out, &mut err);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("seed=42"));
    }

    #[test]
    fn test_stats_command_dispatch_integration() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_stats_command("nonexistent.jsonl".to_string(), &mut out, &mut err);

        assert!(result.is_err());
    }

    #[test]
    fn test_score_validation_rejects_zero() {
        let result = HiloCli::try_parse_from(["hilo", "play", "--score", "0"]);
        assert!(result.is_err());

        let result = HiloCli::try_parse_from(["hilo", "sim", "--sessions", "1", "--score", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_score_validation_accepts_positive() {
        let result = HiloCli::try_parse_from(["hilo", "play", "--score", "1"]);
        assert!(result.is_ok());

        let result = HiloCli::try_parse_from(["hilo", "play", "--score", "15"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_strategy_parsing() {
        let cli =
            HiloCli::try_parse_from(["hilo", "sim", "--sessions", "1", "--strategy", "random"])
                .unwrap();
        match cli.cmd {
            Commands::Sim { strategy, .. } => assert_eq!(strategy, Strategy::Random),
            _ => panic!("Expected Commands::Sim variant"),
        }

        let cli = HiloCli::try_parse_from(["hilo", "sim", "--sessions", "1"]).unwrap();
        match cli.cmd {
            Commands::Sim { strategy, .. } => assert_eq!(strategy, Strategy::Binary),
            _ => panic!("Expected Commands::Sim variant"),
        }

        let result =
            HiloCli::try_parse_from(["hilo", "sim", "--sessions", "1", "--strategy", "psychic"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_strategy_as_str() {
        assert_eq!(Strategy::Binary.as_str(), "binary");
        assert_eq!(Strategy::Random.as_str(), "random");
    }

    #[test]
    fn test_cli_types_preserve_all_7_subcommands() {
        let commands = vec![
            vec!["hilo", "play"],
            vec!["hilo", "sim", "--sessions", "1"],
            vec!["hilo", "stats", "--input", "test.jsonl"],
            vec!["hilo", "replay", "--input", "test.jsonl"],
            vec!["hilo", "best"],
            vec!["hilo", "cfg"],
            vec!["hilo", "rng"],
        ];

        for cmd_args in commands {
            let result = HiloCli::try_parse_from(&cmd_args);
            assert!(result.is_ok(), "Failed to parse: {:?}", cmd_args);
        }
    }

    #[test]
    fn test_run_help_exits_zero() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(["hilo", "--help"], &mut out, &mut err);

        assert_eq!(code, exit_code::SUCCESS);
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("play"));
        assert!(output.contains("sim"));
    }

    #[test]
    fn test_run_version_exits_zero() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(["hilo", "--version"], &mut out, &mut err);

        assert_eq!(code, exit_code::SUCCESS);
        assert!(!String::from_utf8(out).unwrap().is_empty());
    }

    #[test]
    fn test_run_unknown_command_lists_commands() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(["hilo", "shuffle"], &mut out, &mut err);

        assert_eq!(code, exit_code::ERROR);
        let error_output = String::from_utf8(err).unwrap();
        assert!(error_output.contains("Usage: hilo <command> [options]"));
        for c in ["play", "sim", "stats", "replay", "best", "cfg", "rng"] {
            assert!(error_output.contains(c), "missing {} in command list", c);
        }
    }

    #[test]
    fn test_run_no_arguments_is_an_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(["hilo"], &mut out, &mut err);

        assert_eq!(code, exit_code::ERROR);
    }

    #[test]
    fn test_run_cfg_emits_valid_json() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(["hilo", "cfg"], &mut out, &mut err);

        assert_eq!(code, exit_code::SUCCESS);
        let output = String::from_utf8(out).unwrap();
        let _json: serde_json::Value =
            serde_json::from_str(&output).expect("cfg output should be valid JSON");
    }

    #[test]
    fn test_run_rng_is_deterministic_per_seed() {
        let args = ["hilo", "rng", "--seed", "5", "--samples", "200"];

        let mut out1 = Vec::new();
        let mut err1 = Vec::new();
        let code1 = run(args, &mut out1, &mut err1);

        let mut out2 = Vec::new();
        let mut err2 = Vec::new();
        let code2 = run(args, &mut out2, &mut err2);

        assert_eq!(code1, exit_code::SUCCESS);
        assert_eq!(code2, exit_code::SUCCESS);
        assert_eq!(out1, out2);
    }

    #[test]
    fn test_run_stats_missing_file_exits_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(
            ["hilo", "stats", "--input", "no/such/file.jsonl"],
            &mut out,
            &mut err,
        );

        assert_eq!(code, exit_code::ERROR);
        assert!(String::from_utf8(err).unwrap().contains("Failed to read"));
    }
}
