//! Settings loader for the `.env` file and process environment.
//!
//! Responsibilities:
//! - Layer compiled-in defaults, `.env` file values, and process environment
//!   variables into one fully populated `Settings` record.
//! - Coerce environment-sourced strings to each field's declared type.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading
//!   in tests.
//!
//! Does NOT handle:
//! - Persisting settings anywhere; the record is read-only after build.
//! - Serving settings to clients (see `types::PublicSettings`).
//!
//! Invariants / Assumptions:
//! - Process environment variables take precedence over `.env` values,
//!   because `dotenvy` never overwrites a variable that is already set.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - Empty or whitespace-only environment variables are treated as unset.

mod builder;
mod env;
mod error;

pub use builder::SettingsLoader;
pub use env::env_var_or_none;
pub use error::SettingsError;

#[cfg(test)]
mod tests;
