//! Settings loader builder implementation.
//!
//! Responsibilities:
//! - Provide the staged `SettingsLoader`: `.env` injection, then environment
//!   overrides, then finalization of the record.
//! - Surface the placeholder-credential warning at build time.
//!
//! Does NOT handle:
//! - Environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - The loader starts from `Settings::default()`; every stage only narrows
//!   the record toward the effective values, so `build()` cannot observe a
//!   partially initialized state.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is
//!   called.

use super::env::apply_env;
use super::error::SettingsError;
use crate::constants::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
use crate::types::Settings;

/// Builds the settings record from defaults, the `.env` file, and the
/// process environment.
#[derive(Debug)]
pub struct SettingsLoader {
    settings: Settings,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsLoader {
    /// Create a loader holding the compiled-in defaults.
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Variables already set in the process environment are never
    /// overwritten, which is what gives the process environment precedence
    /// over the file. If `DOTENV_DISABLED` is set to "true" or "1", the
    /// `.env` file is not loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`SettingsError::DotenvParse`)
    /// - The `.env` file exists but cannot be read (`SettingsError::DotenvIo`)
    ///
    /// A missing `.env` file is silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw `.env` line contents; the
    /// file is where operators put the admin credentials.
    pub fn load_dotenv(self) -> Result<Self, SettingsError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(SettingsError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(SettingsError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(SettingsError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Apply overrides from the process environment.
    ///
    /// For each declared field, reads the variable with the field's
    /// UPPERCASE name and coerces it to the declared type. Fails on the
    /// first value that does not coerce.
    pub fn from_env(mut self) -> Result<Self, SettingsError> {
        apply_env(&mut self.settings)?;
        Ok(self)
    }

    /// Finalize and return the settings record.
    ///
    /// The record is complete at every stage, so this cannot fail; it only
    /// reports on what was loaded. A warning is logged while either admin
    /// credential still equals its compiled-in placeholder, since the
    /// placeholders are deliberately non-functional.
    pub fn build(self) -> Settings {
        if self.settings.admin_username == DEFAULT_ADMIN_USERNAME
            || self.settings.admin_password == DEFAULT_ADMIN_PASSWORD
        {
            tracing::warn!(
                "admin credentials are still the compiled-in placeholders; \
                 set ADMIN_USERNAME and ADMIN_PASSWORD in .env or the environment"
            );
        }

        tracing::debug!(
            environment_type = %self.settings.environment_type,
            experiment_name = %self.settings.experiment_name,
            "settings record finalized"
        );

        self.settings
    }
}
