//! Configuration inspection command handler.
//!
//! This module implements the `cfg` command, which prints the resolved
//! configuration as pretty JSON. Every key carries the value in effect
//! plus where it came from (`default`, `file`, or `env`), so a surprising
//! range or store path can be traced to its origin.

use crate::config::{self, ValueSource};
use crate::error::CliError;
use crate::ui;
use serde::Serialize;
use std::io::Write;

/// Handle the cfg command.
///
/// Resolves the configuration with source tracking and writes one JSON
/// object to `out`, one `{"value", "source"}` pair per key.
///
/// # Arguments
///
/// * `out` - Output stream for command output
/// * `err` - Error stream for error messages
///
/// # Returns
///
/// * `Ok(())` on success
/// * `Err(CliError)` if resolution fails or the output stream rejects a write
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "min_number": entry(config.min_number, sources.min_number),
        "max_number": entry(config.max_number, sources.max_number),
        "starting_score": entry(config.starting_score, sources.starting_score),
        "seed": entry(config.seed, sources.seed),
        "store": entry(config.store, sources.store),
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

fn entry(value: impl Serialize, source: ValueSource) -> serde_json::Value {
    serde_json::json!({ "value": value, "source": source })
}
