//! Kigen - core of a to-do list client
//!
//! This library provides the pieces of the task list ("Home") and task edit
//! ("EditTask") screens that carry actual logic: rendering deadlines in the
//! viewer's local time, computing the remaining time until a deadline, and
//! the screen state that consumes those formatters through a task repository.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod deadline;
pub mod locale;
pub mod screens;
pub mod settings;
pub mod tasks;
pub mod zone;


/// Result type alias for Kigen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Kigen operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Timestamp could not be parsed into an absolute instant
    #[error("Invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// Form or query value outside the accepted set
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Request was made without a usable bearer token
    #[error("Unauthorized: missing bearer token")]
    Unauthorized,

    /// List or task does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Task repository failure
    #[error("Repository error: {0}")]
    Repository(String),

    /// Settings could not be read or written
    #[error("Settings error: {0}")]
    Settings(String),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Initialize the Kigen library with logging
///
/// Honors `RUST_LOG`; falls back to `info` when it is unset or invalid.
/// Calling this more than once is harmless.
pub fn init() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
