//! # Error Handling
//!
//! This module defines the centralized error type for `docupages`. It uses
//! `thiserror` to build a single `Error` enum covering every failure mode of
//! the publish pipeline, and a `Result<T>` alias used across the library.
//!
//! The only failure the pipeline recovers from (the branch-specific clone) is
//! modelled as a command status rather than an error, so every variant here
//! is fatal to the run that produced it.
//!
//! Command lines embedded in errors are rendered through
//! [`Invocation`](crate::runner::Invocation)'s `Display`, which masks secret
//! arguments, so an `Error` is always safe to print.

use thiserror::Error;

/// Main error type for docupages operations
#[derive(Error, Debug)]
pub enum Error {
    /// The external program could not be started at all (missing binary,
    /// permission denied, bad working directory).
    #[error("Failed to launch `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// An external command ran and exited unsuccessfully.
    ///
    /// `command` is the redacted command line; `status` is the exit code, or
    /// `None` when the process was terminated by a signal.
    #[error("Command `{command}` failed with {}", status.map(|c| format!("exit status {}", c)).unwrap_or_else(|| "no exit status (terminated by signal)".to_string()))]
    CommandFailed { command: String, status: Option<i32> },

    /// The destination repository URL cannot carry an embedded credential.
    #[error("Invalid repository URL '{url}': {message}")]
    InvalidRepositoryUrl { url: String, message: String },

    /// Caller-supplied configuration was rejected.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Config {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A host filesystem operation on documentation output failed.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
