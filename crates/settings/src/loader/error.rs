//! Error types for settings loading.
//!
//! Responsibilities:
//! - Define error variants for all settings loading failures.
//!
//! Invariants:
//! - Every variant names enough context to fix the deployment (the offending
//!   variable and the expected type).
//! - Dotenv errors NEVER include raw `.env` line contents: the `.env` file
//!   is where operators put `ADMIN_PASSWORD`.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur while loading the settings record.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// An environment-sourced value did not coerce to its field's type.
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// The `.env` file exists but has invalid syntax.
    ///
    /// Only the byte index of the failure is reported, never the line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// The `.env` file exists but could not be read.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from the dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
