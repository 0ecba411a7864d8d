use super::{Field, FieldError, FieldErrors, RegistrationInput, RegistrationRules, SubmitEffect};
use crate::error::RegistrationError;
use tracing::{debug, warn};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// State of one mounted registration form.
///
/// Errors stay hidden until the first submit attempt. From then on every edit
/// re-validates the edited field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    rules: RegistrationRules,
    values: RegistrationInput,
    errors: FieldErrors,
    phase: SubmitPhase,
    submit_count: u32,
    submit_successful: bool,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(RegistrationRules::default())
    }
}

impl RegistrationForm {
    #[must_use]
    pub fn new(rules: RegistrationRules) -> Self {
        Self {
            rules,
            values: RegistrationInput::default(),
            errors: FieldErrors::default(),
            phase: SubmitPhase::Idle,
            submit_count: 0,
            submit_successful: false,
        }
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value.into());
        if self.submit_count == 0 {
            return;
        }

        self.revalidate(field);
        if field == Field::Password && !self.values.password_confirm.is_empty() {
            self.revalidate(Field::PasswordConfirm);
        }
    }

    fn revalidate(&mut self, field: Field) {
        let outcome = self.rules.check(field, &self.values);
        self.errors.record(field, outcome);
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    #[must_use]
    pub const fn values(&self) -> &RegistrationInput {
        &self.values
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub const fn rules(&self) -> &RegistrationRules {
        &self.rules
    }

    #[must_use]
    pub const fn phase(&self) -> SubmitPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting)
    }

    /// Number of submit attempts, successful or not.
    #[must_use]
    pub const fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Whether the most recent attempt reached the effect.
    #[must_use]
    pub const fn is_submit_successful(&self) -> bool {
        self.submit_successful
    }

    /// Runs every rule and replaces the error set. Returns whether the form is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = self.rules.validate_input(&self.values);
        self.errors.is_empty()
    }

    /// Enters [`SubmitPhase::Submitting`].
    ///
    /// The UI calls this from the event handler to disable the submit control before
    /// the rest of the handshake runs.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Busy`] if a submission is already running.
    pub fn begin_submit(&mut self) -> Result<(), RegistrationError> {
        if self.is_submitting() {
            warn!("Submit requested while a submission is in progress");
            return Err(RegistrationError::Busy { context: None });
        }

        self.phase = SubmitPhase::Submitting;
        self.submit_count = self.submit_count.saturating_add(1);
        Ok(())
    }

    /// Validates, hands a snapshot to `effect` if valid, and returns to [`SubmitPhase::Idle`].
    ///
    /// # Errors
    /// Returns [`RegistrationError::Validation`] listing the failing fields, or
    /// [`RegistrationError::Internal`] if [`Self::begin_submit`] was not called first.
    pub fn complete_submit<E>(&mut self, effect: &mut E) -> Result<RegistrationInput, RegistrationError>
    where
        E: SubmitEffect + ?Sized,
    {
        if !self.is_submitting() {
            return Err("complete_submit called outside of a submission".into());
        }

        let valid = self.validate();
        self.submit_successful = valid;

        let result = if valid {
            let snapshot = self.values.clone();
            effect.submit(&snapshot);
            Ok(snapshot)
        } else {
            Err(RegistrationError::Validation { fields: self.errors.fields(), context: None })
        };

        self.phase = SubmitPhase::Idle;
        debug!(attempt = self.submit_count, valid, "Submit handshake finished");
        result
    }

    /// Runs the whole submit handshake.
    ///
    /// # Errors
    /// See [`Self::begin_submit`] and [`Self::complete_submit`].
    pub fn handle_submit<E>(&mut self, effect: &mut E) -> Result<RegistrationInput, RegistrationError>
    where
        E: SubmitEffect + ?Sized,
    {
        self.begin_submit()?;
        self.complete_submit(effect)
    }
}
