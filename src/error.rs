//! Error types for habits.

use thiserror::Error;

/// Errors produced by the store adapter, configuration and CLI layers.
///
/// The streak and statistics engine never fails; only I/O-bearing code
/// returns these.
#[derive(Error, Debug)]
pub enum HabitsError {
    /// `SQLite` failure.
    #[error("database error: {0}")]
    Database(String),

    /// Configuration could not be read, parsed or written.
    #[error("configuration error: {0}")]
    Config(String),

    /// A habit or log id that does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rejected user input (blank habit name, unknown frequency, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Filesystem error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for HabitsError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}
