use magicicada_notify::config::{self, Settings};
use magicicada_notify::error::ConfigError;
use magicicada_notify::{APPLICATION_NAME, AbstractNotification};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

// Helper to point the home directory at a scratch location
fn setup_test_env() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    unsafe {
        std::env::set_var("MAGICICADA_TEST_HOME", temp_dir.path());
    }
    temp_dir
}

fn write_settings(temp_dir: &TempDir, content: &str) {
    let dir = temp_dir.path().join(".magicicada");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("notify.json"), content).unwrap();
}

#[test]
#[serial]
fn test_settings_path_uses_home_override() {
    let temp_dir = setup_test_env();
    assert_eq!(
        config::settings_path().unwrap(),
        temp_dir.path().join(".magicicada/notify.json")
    );
}

#[test]
#[serial]
fn test_missing_file_yields_default_name() {
    let _temp_dir = setup_test_env();

    let settings = Settings::load().unwrap();

    assert_eq!(settings.notifier().application_name(), APPLICATION_NAME);
}

#[test]
#[serial]
fn test_configured_name_is_used() {
    let temp_dir = setup_test_env();
    write_settings(&temp_dir, r#"{"application_name": "Test App"}"#);

    let notifier = Settings::load().unwrap().notifier();

    assert_eq!(notifier.application_name(), "Test App");
    notifier.send_notification("Sync complete", "All files synced", None, false);
}

#[test]
#[serial]
fn test_malformed_file_is_a_parse_error() {
    let temp_dir = setup_test_env();
    write_settings(&temp_dir, "not json");

    let err = Settings::load().unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
#[serial]
fn test_init_writes_defaults_once() {
    let _temp_dir = setup_test_env();
    let path = config::settings_path().unwrap();

    let created = Settings::init(&path).unwrap();
    assert_eq!(created.application_name(), APPLICATION_NAME);
    assert_eq!(Settings::load().unwrap(), created);

    let err = Settings::init(&path).unwrap_err();
    assert!(matches!(err, ConfigError::AlreadyExists(_)));
}
