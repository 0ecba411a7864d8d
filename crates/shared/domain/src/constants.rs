//! Default limits of the registration form.

/// Maximum length of the user name, in characters.
pub const NAME_MAX_LENGTH: usize = 50;
/// Maximum length of the email address, in characters.
pub const EMAIL_MAX_LENGTH: usize = 50;
/// Minimum length of both password fields, in characters.
pub const PASSWORD_MIN_LENGTH: usize = 8;
/// Maximum length of both password fields, in characters.
pub const PASSWORD_MAX_LENGTH: usize = 50;

/// Default configuration file stem, resolved relative to the working directory.
pub const CONFIG_FILE: &str = "enlist";
/// Environment variable pointing at an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "ENLIST_CONFIG";
/// Prefix of environment overrides (`ENLIST__LOGGING__LEVEL=debug`).
pub const ENV_PREFIX: &str = "ENLIST";
