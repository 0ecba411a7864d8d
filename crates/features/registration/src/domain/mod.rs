mod effect;
mod field;
mod form;
mod input;
mod rules;

pub use effect::{LogEffect, SubmitEffect};
pub use field::Field;
pub use form::{RegistrationForm, SubmitPhase};
pub use input::RegistrationInput;
pub use rules::{FieldError, FieldErrors, RegistrationRules};
