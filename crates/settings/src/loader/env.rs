//! Environment variable reading and type coercion for the settings record.
//!
//! Responsibilities:
//! - Read the environment variable matching each settings field (UPPERCASE
//!   field name, no prefix) and apply present values to a `Settings` record.
//! - Coerce raw strings to the declared field types, failing with
//!   `SettingsError::InvalidValue` on anything that does not parse.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - `.env` file loading (see `SettingsLoader::load_dotenv`).
//! - Defaults; callers start from `Settings::default()`.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - A present value that does not coerce fails the load; it never falls
//!   back to the default.

use std::str::FromStr;

use super::error::SettingsError;
use crate::types::Settings;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            // Trimming was needed, allocate new String
            Some(trimmed.to_string())
        }
    })
}

/// Coerce a raw environment value to a boolean.
///
/// Accepts `1/0`, `true/false`, `yes/no`, `on/off`, ASCII case-insensitive.
fn parse_bool(var: &str, raw: &str) -> Result<bool, SettingsError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SettingsError::InvalidValue {
            var: var.to_string(),
            message: "must be a boolean (1/0, true/false, yes/no, on/off)".to_string(),
        }),
    }
}

/// Coerce a raw environment value to the declared integer width.
fn parse_int<T: FromStr>(var: &str, raw: &str) -> Result<T, SettingsError> {
    raw.parse().map_err(|_| SettingsError::InvalidValue {
        var: var.to_string(),
        message: "must be a non-negative integer".to_string(),
    })
}

/// Apply environment variable overrides to the settings record.
///
/// Each declared field is overridden by the variable with its UPPERCASE
/// name; absent, empty, and whitespace-only variables leave the field
/// untouched.
pub fn apply_env(settings: &mut Settings) -> Result<(), SettingsError> {
    // Private settings
    if let Some(v) = env_var_or_none("APP_NAME") {
        settings.app_name = v;
    }
    if let Some(v) = env_var_or_none("DATABASE_URL") {
        settings.database_url = v;
    }
    if let Some(v) = env_var_or_none("SHUFFLE") {
        settings.shuffle = parse_bool("SHUFFLE", &v)?;
    }
    if let Some(v) = env_var_or_none("ALLOTTED_TIME") {
        settings.allotted_time = parse_int("ALLOTTED_TIME", &v)?;
    }
    if let Some(v) = env_var_or_none("REFRESH_TIME") {
        settings.refresh_time = parse_int("REFRESH_TIME", &v)?;
    }
    if let Some(v) = env_var_or_none("CONDITION") {
        settings.condition = v;
    }
    if let Some(v) = env_var_or_none("ENVIRONMENT_TYPE") {
        settings.environment_type = v;
    }
    if let Some(v) = env_var_or_none("ADMIN_USERNAME") {
        settings.admin_username = v;
    }
    if let Some(v) = env_var_or_none("ADMIN_PASSWORD") {
        settings.admin_password = v;
    }

    // Public settings
    if let Some(v) = env_var_or_none("DEBUG_MODE") {
        settings.debug_mode = parse_bool("DEBUG_MODE", &v)?;
    }
    if let Some(v) = env_var_or_none("ESTIMATED_TASK_DURATION") {
        settings.estimated_task_duration = v;
    }
    if let Some(v) = env_var_or_none("COMPENSATION") {
        settings.compensation = v;
    }
    if let Some(v) = env_var_or_none("EXPERIMENT_TITLE") {
        settings.experiment_title = v;
    }
    if let Some(v) = env_var_or_none("EXPERIMENT_NAME") {
        settings.experiment_name = v;
    }
    if let Some(v) = env_var_or_none("VERSION_DATE") {
        settings.version_date = v;
    }
    if let Some(v) = env_var_or_none("OPEN_TAGS") {
        settings.open_tags = v;
    }
    if let Some(v) = env_var_or_none("CLOSE_TAGS") {
        settings.close_tags = v;
    }
    if let Some(v) = env_var_or_none("SLIDER_WIDTH") {
        settings.slider_width = parse_int("SLIDER_WIDTH", &v)?;
    }
    if let Some(v) = env_var_or_none("SLIDER_AMOUNT_VISIBLE") {
        settings.slider_amount_visible = parse_bool("SLIDER_AMOUNT_VISIBLE", &v)?;
    }
    if let Some(v) = env_var_or_none("STIMULUS_WIDTH") {
        settings.stimulus_width = parse_int("STIMULUS_WIDTH", &v)?;
    }
    if let Some(v) = env_var_or_none("STIMULUS_HEIGHT") {
        settings.stimulus_height = parse_int("STIMULUS_HEIGHT", &v)?;
    }
    if let Some(v) = env_var_or_none("NUM_STIMULI") {
        settings.num_stimuli = parse_int("NUM_STIMULI", &v)?;
    }
    if let Some(v) = env_var_or_none("PERCENT_REPEATS") {
        settings.percent_repeats = parse_int("PERCENT_REPEATS", &v)?;
    }
    if let Some(v) = env_var_or_none("MIN_GAP_BETWEEN_REPEATS") {
        settings.min_gap_between_repeats = parse_int("MIN_GAP_BETWEEN_REPEATS", &v)?;
    }
    if let Some(v) = env_var_or_none("IMAGE_DIR") {
        settings.image_dir = v;
    }
    if let Some(v) = env_var_or_none("EXAMPLE_IMAGE_DIR") {
        settings.example_image_dir = v;
    }
    if let Some(v) = env_var_or_none("LOGROCKET_ID") {
        settings.logrocket_id = v;
    }
    if let Some(v) = env_var_or_none("INTERTRIAL_INTERVAL") {
        settings.intertrial_interval = parse_int("INTERTRIAL_INTERVAL", &v)?;
    }
    if let Some(v) = env_var_or_none("READING_SPEED") {
        settings.reading_speed = parse_int("READING_SPEED", &v)?;
    }
    if let Some(v) = env_var_or_none("SHOW_SLIDER_DELAY") {
        settings.show_slider_delay = parse_int("SHOW_SLIDER_DELAY", &v)?;
    }

    Ok(())
}
