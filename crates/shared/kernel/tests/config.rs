use enlist_kernel::config::{ConfigError, load_app_config, load_config};
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

#[test]
fn explicit_file_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        r#"
[window]
title = "Join"

[registration]
password_min_length = 10
"#,
    )?;

    let cfg = load_app_config(Some(path.as_path()))?;
    assert_eq!(cfg.window.title, "Join");
    assert_eq!(cfg.registration.password_min_length, 10);
    assert_eq!(cfg.registration.password_max_length, 50);
    assert_eq!(cfg.logging.level, "info");
    Ok(())
}

#[test]
fn missing_explicit_file_is_an_error() {
    let err = load_app_config(Some(Path::new("/nonexistent/enlist-config.toml")))
        .expect_err("explicit file must exist");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}

#[test]
fn malformed_values_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[registration]\nname_max_length = \"lots\"\n")?;

    let err = load_app_config(Some(path.as_path())).expect_err("string is not a length");
    assert!(err.to_string().contains("Failed to deserialize config"));
    Ok(())
}

#[test]
#[serial]
fn default_file_is_optional_and_picked_up_from_cwd() -> Result<(), Box<dyn std::error::Error>> {
    let previous = std::env::current_dir()?;
    let dir = tempdir()?;
    std::env::set_current_dir(dir.path())?;

    let defaults: Result<enlist_kernel::domain::config::AppConfig, _> =
        load_config(None::<&Path>);

    fs::write(dir.path().join("enlist.toml"), "[registration]\nname_max_length = 30\n")?;
    let from_file = load_app_config(None);

    std::env::set_current_dir(previous)?;

    assert_eq!(defaults?.registration.name_max_length, 50);
    assert_eq!(from_file?.registration.name_max_length, 30);
    Ok(())
}

const CHILD_CONFIG_VAR: &str = "REGISTRATION_TEST_CONFIG_FILE";

// Process variables can only be set safely at spawn time, so the test re-runs
// itself with the overrides in place.
#[test]
#[serial]
fn environment_overrides_beat_the_file() -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = std::env::var_os(CHILD_CONFIG_VAR) {
        let cfg = load_app_config(Some(PathBuf::from(path).as_path()))?;
        assert_eq!(cfg.registration.name_max_length, 30);
        assert_eq!(cfg.registration.password_min_length, 12);
        assert_eq!(cfg.logging.level, "debug");
        return Ok(());
    }

    let dir = tempdir()?;
    let path = dir.path().join("enlist.toml");
    fs::write(
        &path,
        "[logging]\nlevel = \"warn\"\n\n[registration]\nname_max_length = 30\npassword_min_length = 9\n",
    )?;

    let output = Command::new(std::env::current_exe()?)
        .args(["--exact", "environment_overrides_beat_the_file", "--test-threads=1"])
        .env(CHILD_CONFIG_VAR, &path)
        .env("ENLIST__REGISTRATION__PASSWORD_MIN_LENGTH", "12")
        .env("ENLIST__LOGGING__LEVEL", "debug")
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "child run failed:\n{stdout}\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("1 passed"), "override test did not run in the child:\n{stdout}");
    Ok(())
}
