use thiserror::Error;

use crate::search::DecodeError;

/// Errors surfaced by the command line front end.
#[derive(Error, Debug)]
pub enum Error {
    /// The document was read but could not be decoded
    #[error("Failed to decode search response: {0}")]
    Decode(#[from] DecodeError),

    /// The input source could not be read
    #[error("Failed to read input: {0}")]
    InputError(#[from] std::io::Error),

    /// Flags or environment are not usable
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

/// Result alias defaulting to [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;
