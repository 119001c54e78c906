//! Tests for the settings loader.
//!
//! Responsibilities:
//! - Test the default record, environment overrides, type coercion
//!   failures, and `.env` layering.
//!
//! Invariants / Assumptions:
//! - Tests use `serial_test` to prevent environment variable pollution, and
//!   `env_lock()` for additional synchronization where the working
//!   directory is mutated.
//! - Whole-record comparisons only run with every settings variable
//!   explicitly cleared, so a developer's shell environment cannot leak in.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod defaults_tests;

/// Returns the global test lock for process-global state (env vars, cwd).
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every environment variable the loader reads for a settings field.
pub const ALL_SETTING_VARS: [&str; 30] = [
    "APP_NAME",
    "DATABASE_URL",
    "SHUFFLE",
    "ALLOTTED_TIME",
    "REFRESH_TIME",
    "CONDITION",
    "ENVIRONMENT_TYPE",
    "ADMIN_USERNAME",
    "ADMIN_PASSWORD",
    "DEBUG_MODE",
    "ESTIMATED_TASK_DURATION",
    "COMPENSATION",
    "EXPERIMENT_TITLE",
    "EXPERIMENT_NAME",
    "VERSION_DATE",
    "OPEN_TAGS",
    "CLOSE_TAGS",
    "SLIDER_WIDTH",
    "SLIDER_AMOUNT_VISIBLE",
    "STIMULUS_WIDTH",
    "STIMULUS_HEIGHT",
    "NUM_STIMULI",
    "PERCENT_REPEATS",
    "MIN_GAP_BETWEEN_REPEATS",
    "IMAGE_DIR",
    "EXAMPLE_IMAGE_DIR",
    "LOGROCKET_ID",
    "INTERTRIAL_INTERVAL",
    "READING_SPEED",
    "SHOW_SLIDER_DELAY",
];

type EnvVars = Vec<(&'static str, Option<&'static str>)>;

/// Unset every settings variable, then apply the given overrides.
fn setting_vars(overrides: &[(&'static str, &'static str)]) -> EnvVars {
    let mut vars: Vec<(&'static str, Option<&'static str>)> =
        ALL_SETTING_VARS.iter().map(|k| (*k, None)).collect();
    for &(key, value) in overrides {
        match vars.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = Some(value),
            None => vars.push((key, Some(value))),
        }
    }
    vars
}

/// Run `f` with only the given settings overrides present and `.env`
/// loading disabled.
pub fn with_settings_env<F: FnOnce()>(overrides: &[(&'static str, &'static str)], f: F) {
    let mut vars = setting_vars(overrides);
    vars.push(("DOTENV_DISABLED", Some("1")));
    temp_env::with_vars(vars, f);
}

/// Run `f` with only the given settings overrides present and `.env`
/// loading enabled.
///
/// Values `dotenvy` injects for settings variables during `f` are restored
/// (removed) afterwards, so `.env` tests cannot pollute later tests.
pub fn with_dotenv_env<F: FnOnce()>(overrides: &[(&'static str, &'static str)], f: F) {
    let mut vars = setting_vars(overrides);
    vars.push(("DOTENV_DISABLED", None));
    temp_env::with_vars(vars, f);
}
