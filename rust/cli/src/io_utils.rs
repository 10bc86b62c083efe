//! Shared stream and file helpers for the CLI commands.
//!
//! Covers the three I/O chores the commands keep repeating: pulling one
//! line from an input stream, loading a text file for JSONL parsing, and
//! making sure a directory exists before a file lands in it.

use std::io::BufRead;
use std::path::Path;

/// Next line from an input stream, trimmed; `None` on end of input.
///
/// The play loop treats `None` as a quit, so a piped script that runs dry
/// ends the run cleanly instead of spinning on a closed stream. Read
/// errors fold into `None` for the same reason.
///
/// # Example
///
/// ```rust,no_run
/// use std::io;
/// # use hilo_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut lines = stdin.lock();
/// while let Some(line) = read_stdin_line(&mut lines) {
///     println!("got: {}", line);
/// }
/// ```
pub fn read_stdin_line(input: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    let n = input.read_line(&mut line).ok()?;
    if n == 0 {
        return None;
    }
    Some(line.trim().to_string())
}

/// Load a whole text file, dropping a leading UTF-8 byte order mark.
///
/// Record files occasionally arrive from editors that prepend a BOM,
/// which would otherwise break the JSON parse of the first line.
pub fn read_text_file(path: &str) -> Result<String, String> {
    let raw = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    Ok(strip_utf8_bom(&raw).to_string())
}

/// Create the parent directory of `path` if it is missing.
///
/// Intermediate directories are created too, so a deep store path works
/// on first use.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &str) -> &str {
    s.strip_prefix('\u{feff}').unwrap_or(s)
}
