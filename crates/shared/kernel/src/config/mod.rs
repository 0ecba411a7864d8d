use crate::domain::config::AppConfig;
use crate::domain::constants::{CONFIG_FILE, CONFIG_PATH_ENV, ENV_PREFIX};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Custom error type for config loading.
#[enlist_derive::enlist_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base File**: an explicit `path` must exist. Without one, the `enlist` file in the
///    working directory (`enlist.toml`, `enlist.json`, ...) is used when present.
/// 2. **Environment Overrides**: variables prefixed with `ENLIST__`. Nested structures use
///    double underscores (e.g., `ENLIST__REGISTRATION__PASSWORD_MIN_LENGTH` maps to
///    `registration.password_min_length`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source is malformed,
/// or the merged values do not match `T`.
///
/// # Example
/// ```rust
/// use enlist_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        );

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads the application configuration.
///
/// # Errors
/// See [`load_config`].
pub fn load_app_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = load_config(path)?;
    debug!(registration = ?config.registration, "Application config loaded");
    Ok(config)
}

/// Returns the config file named by `ENLIST_CONFIG`, if set and non-empty.
#[must_use]
pub fn resolve_config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()).map(PathBuf::from)
}
