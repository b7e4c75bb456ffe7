//! Error types for diffspell.
//!
//! Uses thiserror for derive macros. Every variant carries a message meant
//! for the person reading the CI log.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for diffspell operations.
#[derive(Error, Debug)]
pub enum SpellError {
    /// Invalid arguments or option values.
    #[error("{0}")]
    UserError(String),

    /// The diff text could not be read (I/O fault or oversized line).
    #[error("failed to read diff: {0}")]
    MalformedInput(String),

    /// The process producing the diff failed to start or exited non-zero.
    #[error("git diff error: {0}")]
    DiffSource(String),

    /// A config, allow-list, or dictionary file exists but could not be loaded.
    #[error("config load error: {0}")]
    ConfigLoad(String),

    /// Findings could not be written.
    #[error("output error: {0}")]
    Output(String),
}

impl SpellError {
    /// Returns the process exit code for this error.
    ///
    /// Every error is operational: findings are never reported as errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            SpellError::UserError(_)
            | SpellError::MalformedInput(_)
            | SpellError::DiffSource(_)
            | SpellError::ConfigLoad(_)
            | SpellError::Output(_) => exit_codes::OPERATIONAL_ERROR,
        }
    }
}

/// Result type alias for diffspell operations.
pub type Result<T> = std::result::Result<T, SpellError>;
