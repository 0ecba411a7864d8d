use super::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

const MASK: &str = "<redacted>";

/// Values of one registration attempt.
///
/// `Debug` masks both passwords so the payload can be logged as is.
#[derive(Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

impl RegistrationInput {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PasswordConfirm => &self.password_confirm,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::PasswordConfirm => &mut self.password_confirm,
        };
        *slot = value;
    }
}

impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &MASK)
            .field("password_confirm", &MASK)
            .finish()
    }
}
