use super::RegistrationInput;
use tracing::info;

/// Receives every submission that passed validation.
pub trait SubmitEffect {
    fn submit(&mut self, input: &RegistrationInput);
}

impl<F> SubmitEffect for F
where
    F: FnMut(&RegistrationInput),
{
    fn submit(&mut self, input: &RegistrationInput) {
        self(input);
    }
}

/// Writes the submitted values to the log, passwords masked.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEffect;

impl SubmitEffect for LogEffect {
    fn submit(&mut self, input: &RegistrationInput) {
        info!(submission = %enlist_kernel::submission_id(), payload = ?input, "Registration submitted");
    }
}
