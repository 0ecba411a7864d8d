//! Kernel utilities shared across slices and apps.
//! Keep this crate lightweight: config loading and log correlation ids.
//!
//! ## Submission ids
//! ```rust
//! let id = enlist_kernel::submission_id();
//! assert_eq!(id.len(), enlist_kernel::SUBMISSION_ID_LEN);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use enlist_kernel::config::{load_app_config, resolve_config_path};
//! let cfg = load_app_config(resolve_config_path().as_deref())?;
//! ```
pub mod config;

pub use enlist_domain as domain;

/// Length of ids generated by [`submission_id`].
pub const SUBMISSION_ID_LEN: usize = 12;

// Alphabet excludes visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Generates an unambiguous id used to correlate the log lines of one submit attempt.
#[must_use]
pub fn submission_id() -> String {
    nanoid::nanoid!(SUBMISSION_ID_LEN, SAFE_ALPHABET)
}
