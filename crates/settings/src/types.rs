//! Settings types for the experiment-rating server.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME, DEFAULT_ALLOTTED_TIME_SECS, DEFAULT_APP_NAME,
    DEFAULT_CLOSE_TAGS, DEFAULT_COMPENSATION, DEFAULT_CONDITION, DEFAULT_DATABASE_URL,
    DEFAULT_DEBUG_MODE, DEFAULT_ENVIRONMENT_TYPE, DEFAULT_ESTIMATED_TASK_DURATION,
    DEFAULT_EXAMPLE_IMAGE_DIR, DEFAULT_EXPERIMENT_NAME, DEFAULT_EXPERIMENT_TITLE,
    DEFAULT_IMAGE_DIR, DEFAULT_INTERTRIAL_INTERVAL_MS, DEFAULT_LOGROCKET_ID,
    DEFAULT_MIN_GAP_BETWEEN_REPEATS, DEFAULT_NUM_STIMULI, DEFAULT_OPEN_TAGS,
    DEFAULT_PERCENT_REPEATS, DEFAULT_READING_SPEED, DEFAULT_REFRESH_TIME_SECS,
    DEFAULT_SHOW_SLIDER_DELAY_MS, DEFAULT_SHUFFLE, DEFAULT_SLIDER_AMOUNT_VISIBLE,
    DEFAULT_SLIDER_WIDTH,
    DEFAULT_STIMULUS_HEIGHT, DEFAULT_STIMULUS_WIDTH, DEFAULT_VERSION_DATE,
};
use crate::loader::{SettingsError, SettingsLoader};

/// The settings record for the running process.
///
/// Every field carries a compiled-in default (see [`crate::constants`]) and
/// may be overridden by the environment variable with the field's UPPERCASE
/// name. The record is fully populated on construction; there is no partial
/// state.
///
/// Private fields are server-only. Public fields are safe for client
/// exposure and are served through [`Settings::public`]; do not add a field
/// to [`PublicSettings`] without checking which group it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    // Private settings -- never serialized toward the client.
    /// Application name used in logs and page titles.
    pub app_name: String,
    /// Database connection string handed to the persistence layer.
    pub database_url: String,
    /// Whether trial order is shuffled per participant.
    pub shuffle: bool,
    /// Time a participant has to finish the experiment, in seconds.
    pub allotted_time: u64,
    /// Window after which an abandoned session is released, in seconds.
    pub refresh_time: u64,
    /// Rating condition participants are asked about (e.g. "trustworthy").
    pub condition: String,
    /// Environment mode: "debug" or "production".
    pub environment_type: String,
    /// Admin username; the default is a non-functional placeholder.
    pub admin_username: String,
    /// Admin password; the default is a non-functional placeholder.
    pub admin_password: String,

    // Public settings -- served to the client via `public()`.
    pub debug_mode: bool,
    /// Task duration shown in the consent text.
    pub estimated_task_duration: String,
    /// Compensation shown in the consent text.
    pub compensation: String,
    pub experiment_title: String,
    pub experiment_name: String,
    /// Version date of the experiment definition.
    pub version_date: String,
    /// Opening delimiter for client-side template substitution.
    pub open_tags: String,
    /// Closing delimiter for client-side template substitution.
    pub close_tags: String,
    /// Rating-slider width in pixels.
    pub slider_width: u32,
    /// Whether the numeric slider value is visible to participants.
    pub slider_amount_visible: bool,
    /// Stimulus image width in pixels.
    pub stimulus_width: u32,
    /// Stimulus image height in pixels.
    pub stimulus_height: u32,
    /// Number of stimuli rated per session.
    pub num_stimuli: u32,
    /// Percentage of trials repeated for reliability checks.
    pub percent_repeats: u32,
    /// Minimum number of trials between a stimulus and its repeat.
    pub min_gap_between_repeats: u32,
    /// Directory of main-task stimulus images.
    pub image_dir: String,
    /// Directory of example images used in the instructions.
    pub example_image_dir: String,
    /// Session-replay project identifier.
    pub logrocket_id: String,
    /// Blank interval between trials, in milliseconds.
    pub intertrial_interval: u64,
    /// Reading speed gate for instruction pages; 0 disables the gate.
    pub reading_speed: u32,
    /// Delay before the slider appears on each trial, in milliseconds.
    pub show_slider_delay: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            shuffle: DEFAULT_SHUFFLE,
            allotted_time: DEFAULT_ALLOTTED_TIME_SECS,
            refresh_time: DEFAULT_REFRESH_TIME_SECS,
            condition: DEFAULT_CONDITION.to_string(),
            environment_type: DEFAULT_ENVIRONMENT_TYPE.to_string(),
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            debug_mode: DEFAULT_DEBUG_MODE,
            estimated_task_duration: DEFAULT_ESTIMATED_TASK_DURATION.to_string(),
            compensation: DEFAULT_COMPENSATION.to_string(),
            experiment_title: DEFAULT_EXPERIMENT_TITLE.to_string(),
            experiment_name: DEFAULT_EXPERIMENT_NAME.to_string(),
            version_date: DEFAULT_VERSION_DATE.to_string(),
            open_tags: DEFAULT_OPEN_TAGS.to_string(),
            close_tags: DEFAULT_CLOSE_TAGS.to_string(),
            slider_width: DEFAULT_SLIDER_WIDTH,
            slider_amount_visible: DEFAULT_SLIDER_AMOUNT_VISIBLE,
            stimulus_width: DEFAULT_STIMULUS_WIDTH,
            stimulus_height: DEFAULT_STIMULUS_HEIGHT,
            num_stimuli: DEFAULT_NUM_STIMULI,
            percent_repeats: DEFAULT_PERCENT_REPEATS,
            min_gap_between_repeats: DEFAULT_MIN_GAP_BETWEEN_REPEATS,
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
            example_image_dir: DEFAULT_EXAMPLE_IMAGE_DIR.to_string(),
            logrocket_id: DEFAULT_LOGROCKET_ID.to_string(),
            intertrial_interval: DEFAULT_INTERTRIAL_INTERVAL_MS,
            reading_speed: DEFAULT_READING_SPEED,
            show_slider_delay: DEFAULT_SHOW_SLIDER_DELAY_MS,
        }
    }
}

impl Settings {
    /// Load the effective settings for this process.
    ///
    /// Layers, in increasing precedence: compiled-in defaults, values from an
    /// optional `.env` file in the working directory, and process environment
    /// variables. Fails fast on the first value that does not coerce to its
    /// field's declared type; callers are expected to propagate the error out
    /// of `main`.
    pub fn load() -> Result<Self, SettingsError> {
        Ok(SettingsLoader::new().load_dotenv()?.from_env()?.build())
    }

    /// The client-facing projection of this record.
    ///
    /// Serializing the projection is the only supported way to hand settings
    /// to a client; serializing `Settings` itself would leak the private
    /// group, including the admin credentials.
    pub fn public(&self) -> PublicSettings<'_> {
        PublicSettings {
            debug_mode: self.debug_mode,
            estimated_task_duration: &self.estimated_task_duration,
            compensation: &self.compensation,
            experiment_title: &self.experiment_title,
            experiment_name: &self.experiment_name,
            version_date: &self.version_date,
            open_tags: &self.open_tags,
            close_tags: &self.close_tags,
            slider_width: self.slider_width,
            slider_amount_visible: self.slider_amount_visible,
            stimulus_width: self.stimulus_width,
            stimulus_height: self.stimulus_height,
            num_stimuli: self.num_stimuli,
            percent_repeats: self.percent_repeats,
            min_gap_between_repeats: self.min_gap_between_repeats,
            image_dir: &self.image_dir,
            example_image_dir: &self.example_image_dir,
            logrocket_id: &self.logrocket_id,
            intertrial_interval: self.intertrial_interval,
            reading_speed: self.reading_speed,
            show_slider_delay: self.show_slider_delay,
        }
    }
}

/// Borrowed view of the public settings group.
///
/// The serialized key set is a contract with the client, which destructures
/// the response by field name. Keys must match the `Settings` field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicSettings<'a> {
    pub debug_mode: bool,
    pub estimated_task_duration: &'a str,
    pub compensation: &'a str,
    pub experiment_title: &'a str,
    pub experiment_name: &'a str,
    pub version_date: &'a str,
    pub open_tags: &'a str,
    pub close_tags: &'a str,
    pub slider_width: u32,
    pub slider_amount_visible: bool,
    pub stimulus_width: u32,
    pub stimulus_height: u32,
    pub num_stimuli: u32,
    pub percent_repeats: u32,
    pub min_gap_between_repeats: u32,
    pub image_dir: &'a str,
    pub example_image_dir: &'a str,
    pub logrocket_id: &'a str,
    pub intertrial_interval: u64,
    pub reading_speed: u32,
    pub show_slider_delay: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_projection_mirrors_record() {
        let settings = Settings {
            experiment_title: "Pilot run".to_string(),
            num_stimuli: 12,
            ..Settings::default()
        };

        let public = settings.public();
        assert_eq!(public.experiment_title, "Pilot run");
        assert_eq!(public.num_stimuli, 12);
        assert_eq!(public.slider_width, settings.slider_width);
    }

    #[test]
    fn test_settings_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Settings>();
    }
}
