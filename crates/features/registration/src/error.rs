use crate::domain::Field;
use std::borrow::Cow;

/// A specialized [`RegistrationError`] enum of this crate.
#[enlist_derive::enlist_error]
pub enum RegistrationError {
    /// Invalid length limits in the `[registration]` config section.
    #[error("Registration config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Submission blocked because at least one field failed validation.
    #[error("Submission blocked{}: invalid {}", format_context(.context), format_fields(.fields))]
    Validation { fields: Vec<Field>, context: Option<Cow<'static, str>> },

    /// A submit request arrived while another one was still running.
    #[error("Submission already in progress{}", format_context(.context))]
    Busy { context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal registration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn format_fields(fields: &[Field]) -> String {
    fields.iter().map(Field::as_str).collect::<Vec<_>>().join(", ")
}
