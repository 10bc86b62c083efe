use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid range: min {min} exceeds max {max}")]
    InvalidRange { min: i64, max: i64 },
    #[error("Secret {secret} lies outside [{min}, {max}]")]
    SecretOutOfRange { secret: i64, min: i64, max: i64 },
    #[error("Session already over")]
    SessionOver,
}
