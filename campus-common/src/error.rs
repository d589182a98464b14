//! Error type shared by the campus crates

use thiserror::Error;

/// Result alias used throughout campus-common
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Query or connection failure reported by sqlx
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem failure while preparing the root folder
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be located or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Submitted calendar date did not match `yyyy-M-dd`
    #[error("Invalid date '{input}': {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// No row with the requested key
    #[error("Not found: {0}")]
    NotFound(String),
}
