//! Best score command handler.
//!
//! This module implements the `best` command, which shows the persisted
//! best score or, with `--reset`, removes it. The store path resolves the
//! same way `play` resolves it: flag, then configuration, then the default
//! location under the user data directory.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_best;
use crate::store::{default_store_path, HighScoreStore};
use std::io::Write;
use std::path::PathBuf;

/// Handle the best command.
///
/// # Arguments
///
/// * `store` - Path of the best-score store file (default: configuration)
/// * `reset` - Remove the stored best score instead of showing it
/// * `out` - Output stream for command output
///
/// # Returns
///
/// * `Ok(())` on success
/// * `Err(CliError)` if configuration loading or the store operation fails
pub fn handle_best_command(
    store: Option<String>,
    reset: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let path = store
        .or(cfg.store)
        .map(PathBuf::from)
        .unwrap_or_else(default_store_path);
    let store = HighScoreStore::at(path);

    if reset {
        store.clear()?;
        writeln!(out, "Best score cleared.")?;
    } else {
        match store.load() {
            Some(best) => writeln!(out, "{}", format_best(best))?,
            None => writeln!(out, "No best score recorded yet.")?,
        }
    }
    writeln!(out, "Store: {}", store.path().display())?;
    Ok(())
}
