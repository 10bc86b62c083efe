//! Status-line helpers for the error stream.
//!
//! Errors and warnings carry fixed prefixes so tests and scripts can pick
//! them out of stderr reliably.

use std::io::Write;

/// Write `msg` to the error stream under the `Error:` prefix.
pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Write `message` to the error stream under the `WARNING:` prefix.
///
/// For conditions the command survives, like a best score that could not
/// be persisted.
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}
