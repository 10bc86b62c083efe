//! Error handling for the hilo CLI.
//!
//! Every command handler returns [`CliError`]; the dispatcher in `lib.rs`
//! turns an error into a message on stderr and a non-zero exit code.

use std::fmt;

/// Errors a command handler can end with.
///
/// Write failures on the output streams surface as `Io` through the `?`
/// operator; every other variant is built at the site that detected the
/// problem, carrying the message the user should read.
#[derive(Debug)]
pub enum CliError {
    /// Stream or file operation failed
    Io(std::io::Error),

    /// Arguments or input data were rejected
    InvalidInput(String),

    /// Configuration could not be loaded or failed validation
    Config(String),

    /// The game engine refused an operation
    Engine(String),

    /// The best-score store could not be read or written
    Store(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
            CliError::Store(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats_carry_their_prefix() {
        assert_eq!(
            CliError::InvalidInput("bad".to_string()).to_string(),
            "Invalid input: bad"
        );
        assert_eq!(
            CliError::Config("missing".to_string()).to_string(),
            "Configuration error: missing"
        );
        assert_eq!(
            CliError::Store("locked".to_string()).to_string(),
            "Store error: locked"
        );
    }

    #[test]
    fn test_io_errors_convert_and_keep_their_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = CliError::from(io);
        assert!(matches!(err, CliError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
