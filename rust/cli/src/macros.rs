//! Macros shared by the dispatcher and the JSONL-consuming commands.

/// Write one line to a stream, bailing out of `run` with the error exit
/// code when the stream itself is broken.
///
/// The dispatcher cannot report a write failure anywhere except the stream
/// that just failed, so the exit code is the only channel left.
///
/// # Examples
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", e);
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($stream:expr, $($arg:tt)*) => {
        if writeln!($stream, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}

/// Parse one JSONL line into a record, or report the bad line and move on
/// to the next iteration of the enclosing loop.
///
/// # Examples
///
/// ```ignore
/// let record: SessionRecord =
///     parse_json_or_continue!(line, err, format!("session {}", session_num));
/// ```
#[macro_export]
macro_rules! parse_json_or_continue {
    ($line:expr, $err:expr, $context:expr) => {
        match serde_json::from_str($line) {
            Ok(record) => record,
            Err(parse_err) => {
                let _ = $crate::ui::write_error(
                    $err,
                    &format!("Failed to parse {}: {}", $context, parse_err),
                );
                continue;
            }
        }
    };
}
