//! Tests pinning the compiled-in defaults.
//!
//! Responsibilities:
//! - Assert every field of `Settings::default()` against its documented
//!   literal value, so a drifting constant cannot slip through unnoticed.

use crate::types::Settings;

#[test]
fn test_default_private_settings() {
    let settings = Settings::default();

    assert_eq!(settings.app_name, "Face Ratings");
    assert_eq!(settings.database_url, "sqlite://database.db");
    assert!(settings.database_url.ends_with("database.db"));
    assert!(settings.shuffle);
    assert_eq!(settings.allotted_time, 3600);
    assert_eq!(settings.refresh_time, 300);
    assert_eq!(settings.condition, "trustworthy");
    assert_eq!(settings.environment_type, "debug");
    assert_eq!(
        settings.admin_username,
        "username_to_be_set_in_env_file_not_here"
    );
    assert_eq!(
        settings.admin_password,
        "password_to_be_set_in_env_file_not_here"
    );
}

#[test]
fn test_default_public_settings() {
    let settings = Settings::default();

    assert!(!settings.debug_mode);
    assert_eq!(settings.estimated_task_duration, "15 minutes");
    assert_eq!(settings.compensation, "$2.50");
    assert_eq!(settings.experiment_title, "Example experiment");
    assert_eq!(settings.experiment_name, "example_experiment");
    assert_eq!(settings.version_date, "2023-10-21");
    assert_eq!(settings.open_tags, "[[");
    assert_eq!(settings.close_tags, "]]");
    assert_eq!(settings.slider_width, 600);
    assert!(!settings.slider_amount_visible);
    assert_eq!(settings.stimulus_width, 400);
    assert_eq!(settings.stimulus_height, 400);
    assert_eq!(settings.num_stimuli, 300);
    assert_eq!(settings.percent_repeats, 10);
    assert_eq!(settings.min_gap_between_repeats, 5);
    assert_eq!(settings.image_dir, "images/main/");
    assert_eq!(settings.example_image_dir, "images/examples/");
    assert_eq!(settings.logrocket_id, "my-cool-experiment");
    assert_eq!(settings.intertrial_interval, 100);
    assert_eq!(settings.reading_speed, 0);
    assert_eq!(settings.show_slider_delay, 500);
}

#[test]
fn test_default_admin_credentials_are_placeholders() {
    // The defaults must stay obviously non-functional so that a deployment
    // that forgot to set real credentials is recognizable at a glance.
    let settings = Settings::default();
    assert!(settings.admin_username.contains("to_be_set_in_env_file"));
    assert!(settings.admin_password.contains("to_be_set_in_env_file"));
    assert_ne!(settings.admin_username, settings.admin_password);
}
