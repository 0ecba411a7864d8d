use crate::constants::{
    EMAIL_MAX_LENGTH, NAME_MAX_LENGTH, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH,
};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub registration: RegistrationConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Desktop window settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Logging output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Extra module directives, e.g. `enlist_registration=debug`.
    pub env_filter: Option<String>,
    pub console: bool,
    /// Directory for rolling log files; file logging is off when unset.
    pub path: Option<PathBuf>,
    pub json: bool,
    /// Log file rotation: `minutely`, `hourly`, `daily` or `never`.
    pub rotation: String,
    pub max_files: usize,
}

/// Length limits of the registration form fields, in characters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    pub name_max_length: usize,
    pub email_max_length: usize,
    pub password_min_length: usize,
    pub password_max_length: usize,
}

// --- Default ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Enlist".to_owned(), width: 480.0, height: 640.0 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            env_filter: None,
            console: true,
            path: None,
            json: false,
            rotation: "daily".to_owned(),
            max_files: 10,
        }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            name_max_length: NAME_MAX_LENGTH,
            email_max_length: EMAIL_MAX_LENGTH,
            password_min_length: PASSWORD_MIN_LENGTH,
            password_max_length: PASSWORD_MAX_LENGTH,
        }
    }
}
