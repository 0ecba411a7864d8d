//! Field validation rules.
//!
//! Every field is required. The remaining rules run in a fixed order and only the
//! first failure is reported: minimum length, maximum length, pattern, and finally the
//! cross-field check that the confirmation equals the password.

use super::{Field, RegistrationInput};
use crate::error::RegistrationError;
use enlist_domain::config::RegistrationConfig;
use enlist_domain::constants::{
    EMAIL_MAX_LENGTH, NAME_MAX_LENGTH, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH,
};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use strum::IntoEnumIterator;
use typed_builder::TypedBuilder;

// ASCII letters, digits, `-`, `_` and `.` on both sides of a single `@`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.-]+@[a-zA-Z0-9_.-]+$").expect("EMAIL_PATTERN: invalid regex pattern")
});

static ALPHANUMERIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-zA-Z]*$").expect("ALPHANUMERIC_PATTERN: invalid regex pattern")
});

/// Why a field was rejected. `Display` yields the inline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Enter at least {0} characters")]
    MinLength(usize),
    #[error("Enter no more than {0} characters")]
    MaxLength(usize),
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Use ASCII letters and digits only")]
    NotAlphanumeric,
    #[error("Passwords do not match")]
    Mismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pattern {
    Email,
    Alphanumeric,
}

impl Pattern {
    fn check(self, value: &str) -> Result<(), FieldError> {
        match self {
            Self::Email if !EMAIL_PATTERN.is_match(value) => Err(FieldError::InvalidEmail),
            Self::Alphanumeric if !ALPHANUMERIC_PATTERN.is_match(value) => {
                Err(FieldError::NotAlphanumeric)
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Constraints {
    min_length: Option<usize>,
    max_length: usize,
    pattern: Option<Pattern>,
}

/// Length limits, in characters, applied by [`RegistrationRules::check`].
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct RegistrationRules {
    #[builder(default = NAME_MAX_LENGTH)]
    pub name_max_length: usize,
    #[builder(default = EMAIL_MAX_LENGTH)]
    pub email_max_length: usize,
    #[builder(default = PASSWORD_MIN_LENGTH)]
    pub password_min_length: usize,
    #[builder(default = PASSWORD_MAX_LENGTH)]
    pub password_max_length: usize,
}

impl Default for RegistrationRules {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl TryFrom<&RegistrationConfig> for RegistrationRules {
    type Error = RegistrationError;

    fn try_from(config: &RegistrationConfig) -> Result<Self, Self::Error> {
        let rules = Self::builder()
            .name_max_length(config.name_max_length)
            .email_max_length(config.email_max_length)
            .password_min_length(config.password_min_length)
            .password_max_length(config.password_max_length)
            .build();
        rules.validate()?;
        Ok(rules)
    }
}

impl RegistrationRules {
    /// Rejects limits no value could ever satisfy.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Config`] when a maximum is zero or the password
    /// minimum exceeds its maximum.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        let maxima = [
            ("name_max_length", self.name_max_length),
            ("email_max_length", self.email_max_length),
            ("password_max_length", self.password_max_length),
        ];
        if let Some((key, _)) = maxima.iter().find(|(_, max)| *max == 0) {
            return Err(RegistrationError::Config {
                message: "maximum length must be greater than zero".into(),
                context: Some(format!("registration.{key}").into()),
            });
        }

        if self.password_min_length > self.password_max_length {
            return Err(RegistrationError::Config {
                message: format!(
                    "password_min_length ({}) exceeds password_max_length ({})",
                    self.password_min_length, self.password_max_length
                )
                .into(),
                context: None,
            });
        }

        Ok(())
    }

    const fn constraints(&self, field: Field) -> Constraints {
        match field {
            Field::Name => {
                Constraints { min_length: None, max_length: self.name_max_length, pattern: None }
            }
            Field::Email => Constraints {
                min_length: None,
                max_length: self.email_max_length,
                pattern: Some(Pattern::Email),
            },
            Field::Password | Field::PasswordConfirm => Constraints {
                min_length: Some(self.password_min_length),
                max_length: self.password_max_length,
                pattern: Some(Pattern::Alphanumeric),
            },
        }
    }

    /// Runs the rules of one field against the current values.
    ///
    /// # Errors
    /// Returns the first rule the field fails.
    pub fn check(&self, field: Field, input: &RegistrationInput) -> Result<(), FieldError> {
        let value = input.get(field);
        if value.is_empty() {
            return Err(FieldError::Required);
        }

        let constraints = self.constraints(field);
        let length = value.chars().count();
        if let Some(min) = constraints.min_length
            && length < min
        {
            return Err(FieldError::MinLength(min));
        }
        if length > constraints.max_length {
            return Err(FieldError::MaxLength(constraints.max_length));
        }
        if let Some(pattern) = constraints.pattern {
            pattern.check(value)?;
        }

        if field == Field::PasswordConfirm && value != input.password {
            return Err(FieldError::Mismatch);
        }

        Ok(())
    }

    /// Runs the rules of every field.
    #[must_use]
    pub fn validate_input(&self, input: &RegistrationInput) -> FieldErrors {
        Field::iter()
            .filter_map(|field| self.check(field, input).err().map(|err| (field, err)))
            .collect()
    }
}

/// At most one error per field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Stores the outcome of a single-field check, clearing any previous error.
    pub fn record(&mut self, field: Field, outcome: Result<(), FieldError>) {
        match outcome {
            Ok(()) => self.0.remove(&field),
            Err(err) => self.0.insert(field, err),
        };
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing fields in form order.
    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, err)| (*field, *err))
    }
}

impl FromIterator<(Field, FieldError)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (Field, FieldError)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RegistrationInput {
        RegistrationInput {
            name: "Alice".to_owned(),
            email: "a@b.com".to_owned(),
            password: "abc12345".to_owned(),
            password_confirm: "abc12345".to_owned(),
        }
    }

    #[test]
    fn valid_input_has_no_errors() {
        let errors = RegistrationRules::default().validate_input(&valid_input());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn empty_input_reports_required_everywhere() {
        let errors = RegistrationRules::default().validate_input(&RegistrationInput::default());
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().all(|(_, err)| err == FieldError::Required));
    }

    #[test]
    fn whitespace_counts_as_a_value() {
        let rules = RegistrationRules::default();
        let input = RegistrationInput { name: "   ".to_owned(), ..valid_input() };
        assert_eq!(rules.check(Field::Name, &input), Ok(()));
    }

    #[test]
    fn name_length_is_counted_in_characters() {
        let rules = RegistrationRules::default();
        let input = RegistrationInput { name: "é".repeat(50), ..valid_input() };
        assert_eq!(rules.check(Field::Name, &input), Ok(()));

        let input = RegistrationInput { name: "é".repeat(51), ..valid_input() };
        assert_eq!(rules.check(Field::Name, &input), Err(FieldError::MaxLength(50)));
    }

    #[test]
    fn email_shape() {
        let rules = RegistrationRules::default();
        for ok in ["a@b", "first.last@example.co.jp", "x_y-z@host-name.io", "a.@.b"] {
            let input = RegistrationInput { email: ok.to_owned(), ..valid_input() };
            assert_eq!(rules.check(Field::Email, &input), Ok(()), "{ok}");
        }
        for bad in ["ab.com", "@b.com", "a@", "a@b@c", "a b@c.d", "a+tag@b.com", "ä@b.com"] {
            let input = RegistrationInput { email: bad.to_owned(), ..valid_input() };
            assert_eq!(rules.check(Field::Email, &input), Err(FieldError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn email_length_is_checked_before_shape() {
        let rules = RegistrationRules::default();
        let input = RegistrationInput { email: "x".repeat(51), ..valid_input() };
        assert_eq!(rules.check(Field::Email, &input), Err(FieldError::MaxLength(50)));
    }

    #[test]
    fn password_rules_in_order() {
        let rules = RegistrationRules::default();
        let check = |password: &str| {
            let input = RegistrationInput { password: password.to_owned(), ..valid_input() };
            rules.check(Field::Password, &input)
        };

        assert_eq!(check(""), Err(FieldError::Required));
        assert_eq!(check("ab!"), Err(FieldError::MinLength(8)));
        assert_eq!(check(&"a".repeat(51)), Err(FieldError::MaxLength(50)));
        assert_eq!(check("abcd-1234"), Err(FieldError::NotAlphanumeric));
        assert_eq!(check("abcd1234"), Ok(()));
    }

    #[test]
    fn confirmation_must_match_after_its_own_rules() {
        let rules = RegistrationRules::default();

        let input = RegistrationInput { password_confirm: "abc12346".to_owned(), ..valid_input() };
        assert_eq!(rules.check(Field::PasswordConfirm, &input), Err(FieldError::Mismatch));
        assert_eq!(rules.check(Field::Password, &input), Ok(()));

        let input = RegistrationInput { password_confirm: "short".to_owned(), ..valid_input() };
        assert_eq!(rules.check(Field::PasswordConfirm, &input), Err(FieldError::MinLength(8)));
    }

    #[test]
    fn messages() {
        assert_eq!(FieldError::Required.to_string(), "This field is required");
        assert_eq!(FieldError::MinLength(8).to_string(), "Enter at least 8 characters");
        assert_eq!(FieldError::MaxLength(50).to_string(), "Enter no more than 50 characters");
        assert_eq!(FieldError::Mismatch.to_string(), "Passwords do not match");
    }

    #[test]
    fn config_limits_are_validated() {
        let config = RegistrationConfig { password_min_length: 60, ..RegistrationConfig::default() };
        let err = RegistrationRules::try_from(&config).unwrap_err();
        assert!(matches!(err, RegistrationError::Config { .. }));

        let config = RegistrationConfig { email_max_length: 0, ..RegistrationConfig::default() };
        let err = RegistrationRules::try_from(&config).unwrap_err();
        assert!(err.to_string().contains("registration.email_max_length"));

        let rules = RegistrationRules::try_from(&RegistrationConfig::default()).unwrap();
        assert_eq!(rules, RegistrationRules::default());
    }

    #[test]
    fn record_replaces_and_clears() {
        let mut errors = FieldErrors::default();
        errors.record(Field::Email, Err(FieldError::Required));
        errors.record(Field::Email, Err(FieldError::InvalidEmail));
        assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));

        errors.record(Field::Email, Ok(()));
        assert!(errors.is_empty());
    }
}
