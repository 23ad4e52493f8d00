//! Unified application error type.
//! Engine operations (session, records, edit) and the CLI all return AppError
//! so failures surface with a single, consistent shape.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Engine errors
    // ---------------------------
    /// Operation not allowed in the current session state (e.g. punch-out while idle).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A computed duration is negative or otherwise unusable.
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    /// Malformed edit input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The key-value collaborator failed to read or write.
    #[error("Persistence error: {0}")]
    Persistence(String),

    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Wrap any collaborator failure as a persistence error.
    pub fn persistence<E: std::fmt::Display>(op: &str, key: &str, err: E) -> Self {
        AppError::Persistence(format!("{op} '{key}' failed: {err}"))
    }
}

pub type AppResult<T> = Result<T, AppError>;
