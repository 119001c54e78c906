//! Centralized default values for the settings record.
//!
//! Every field of [`Settings`](crate::Settings) has exactly one compiled-in
//! default here, so loader code and tests never duplicate magic values.

// =============================================================================
// Application & Environment Defaults
// =============================================================================

/// Default application name used in logs and page titles.
pub const DEFAULT_APP_NAME: &str = "Face Ratings";

/// Default database connection string, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";

/// Default environment mode: "debug" or "production".
pub const DEFAULT_ENVIRONMENT_TYPE: &str = "debug";

// =============================================================================
// Session Timing Defaults
// =============================================================================

/// Default time a participant has to finish the experiment, in seconds.
pub const DEFAULT_ALLOTTED_TIME_SECS: u64 = 3600;

/// Default window after which an abandoned session is released, in seconds.
pub const DEFAULT_REFRESH_TIME_SECS: u64 = 300;

// =============================================================================
// Admin Credential Placeholders
// =============================================================================
//
// These defaults are deliberately non-functional. Operators MUST supply real
// values through the .env file or the process environment; the loader warns
// at startup when the placeholders are still active.

/// Placeholder admin username.
pub const DEFAULT_ADMIN_USERNAME: &str = "username_to_be_set_in_env_file_not_here";

/// Placeholder admin password.
pub const DEFAULT_ADMIN_PASSWORD: &str = "password_to_be_set_in_env_file_not_here";

// =============================================================================
// Experiment Metadata Defaults (client-facing)
// =============================================================================

/// Default rating condition participants are asked about.
pub const DEFAULT_CONDITION: &str = "trustworthy";

/// Default debug-mode flag exposed to the client.
pub const DEFAULT_DEBUG_MODE: bool = false;

/// Default task duration shown in the consent text.
pub const DEFAULT_ESTIMATED_TASK_DURATION: &str = "15 minutes";

/// Default compensation shown in the consent text.
pub const DEFAULT_COMPENSATION: &str = "$2.50";

/// Default human-readable experiment title.
pub const DEFAULT_EXPERIMENT_TITLE: &str = "Example experiment";

/// Default machine-readable experiment name.
pub const DEFAULT_EXPERIMENT_NAME: &str = "example_experiment";

/// Default version date of the experiment definition.
pub const DEFAULT_VERSION_DATE: &str = "2023-10-21";

/// Default opening delimiter for client-side template substitution.
pub const DEFAULT_OPEN_TAGS: &str = "[[";

/// Default closing delimiter for client-side template substitution.
pub const DEFAULT_CLOSE_TAGS: &str = "]]";

/// Default session-replay project identifier.
pub const DEFAULT_LOGROCKET_ID: &str = "my-cool-experiment";

// =============================================================================
// Trial & Stimulus Defaults
// =============================================================================

/// Whether trial order is shuffled per participant by default.
pub const DEFAULT_SHUFFLE: bool = true;

/// Default number of stimuli rated per session.
pub const DEFAULT_NUM_STIMULI: u32 = 300;

/// Default percentage of trials repeated for reliability checks.
pub const DEFAULT_PERCENT_REPEATS: u32 = 10;

/// Default minimum number of trials between a stimulus and its repeat.
pub const DEFAULT_MIN_GAP_BETWEEN_REPEATS: u32 = 5;

/// Default directory of main-task stimulus images.
pub const DEFAULT_IMAGE_DIR: &str = "images/main/";

/// Default directory of example images used in the instructions.
pub const DEFAULT_EXAMPLE_IMAGE_DIR: &str = "images/examples/";

// =============================================================================
// UI Defaults
// =============================================================================

/// Default rating-slider width in pixels.
pub const DEFAULT_SLIDER_WIDTH: u32 = 600;

/// Whether the numeric slider value is visible to participants by default.
pub const DEFAULT_SLIDER_AMOUNT_VISIBLE: bool = false;

/// Default stimulus image width in pixels.
pub const DEFAULT_STIMULUS_WIDTH: u32 = 400;

/// Default stimulus image height in pixels.
pub const DEFAULT_STIMULUS_HEIGHT: u32 = 400;

/// Default blank interval between trials, in milliseconds.
pub const DEFAULT_INTERTRIAL_INTERVAL_MS: u64 = 100;

/// Default reading speed gate for instruction pages; 0 disables the gate.
pub const DEFAULT_READING_SPEED: u32 = 0;

/// Default delay before the slider appears on each trial, in milliseconds.
pub const DEFAULT_SHOW_SLIDER_DELAY_MS: u64 = 500;
