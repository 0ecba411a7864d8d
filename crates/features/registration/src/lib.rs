//! # Registration
//!
//! The registration form feature slice: the submitted data model, field validation
//! rules, the form state machine with its submit handshake, and (with the `client`
//! feature) the Dioxus component rendering it.

#[cfg(feature = "client")]
mod client;
pub mod domain;
mod error;

#[cfg(feature = "client")]
pub use crate::client::{RegisterForm, RegisterFormProps};
pub use crate::domain::{
    Field, FieldError, FieldErrors, LogEffect, RegistrationForm, RegistrationInput,
    RegistrationRules, SubmitEffect, SubmitPhase,
};
pub use crate::error::{RegistrationError, RegistrationErrorExt};
use enlist_domain::config::RegistrationConfig;

/// Registration slice state, shared through the UI context.
#[enlist_derive::enlist_slice]
pub struct Registration {
    pub rules: RegistrationRules,
}

impl Registration {
    /// Returns an empty form bound to the configured rules.
    #[must_use]
    pub fn form(&self) -> RegistrationForm {
        RegistrationForm::new(self.rules.clone())
    }
}

/// Initializes the registration slice.
///
/// # Errors
/// Returns [`RegistrationError::Config`] when the configured length limits are unusable.
pub fn init(config: &RegistrationConfig) -> Result<Registration, RegistrationError> {
    let rules = RegistrationRules::try_from(config)?;

    tracing::info!(
        name_max = rules.name_max_length,
        email_max = rules.email_max_length,
        password_min = rules.password_min_length,
        password_max = rules.password_max_length,
        "Registration slice initialized"
    );

    Ok(Registration::new(RegistrationInner { rules }))
}
