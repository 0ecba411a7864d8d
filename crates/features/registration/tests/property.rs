use enlist_registration::{Field, FieldError, RegistrationForm, RegistrationInput, RegistrationRules};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn valid_input() -> impl Strategy<Value = RegistrationInput> {
    ("\\PC{1,50}", "[a-z0-9_.-]{1,20}@[a-z0-9.]{1,20}", "[a-zA-Z0-9]{8,50}").prop_map(
        |(name, email, password)| RegistrationInput {
            name,
            email,
            password_confirm: password.clone(),
            password,
        },
    )
}

fn submit(input: &RegistrationInput) -> RegistrationForm {
    let mut form = RegistrationForm::new(RegistrationRules::default());
    for field in Field::iter() {
        form.set_value(field, input.get(field));
    }
    let _ = form.handle_submit(&mut |_: &RegistrationInput| {});
    form
}

proptest! {
    #[test]
    fn valid_input_is_accepted(input in valid_input()) {
        let mut calls = 0;
        let mut form = RegistrationForm::new(RegistrationRules::default());
        for field in Field::iter() {
            form.set_value(field, input.get(field));
        }

        let submitted = form.handle_submit(&mut |_: &RegistrationInput| calls += 1);
        prop_assert_eq!(submitted.ok(), Some(input));
        prop_assert_eq!(calls, 1);
        prop_assert!(form.errors().is_empty());
    }

    #[test]
    fn empty_field_is_required(input in valid_input(), index in 0usize..4) {
        let field = Field::iter().nth(index).unwrap();
        let mut input = input;
        input.set(field, String::new());

        let form = submit(&input);
        prop_assert_eq!(form.error(field), Some(FieldError::Required));
        prop_assert!(!form.is_submit_successful());
    }

    #[test]
    fn email_without_at_sign_is_rejected(input in valid_input(), email in "[a-zA-Z0-9_.-]{1,50}") {
        let input = RegistrationInput { email, ..input };

        let form = submit(&input);
        prop_assert_eq!(form.error(Field::Email), Some(FieldError::InvalidEmail));
    }

    #[test]
    fn short_password_is_rejected(input in valid_input(), password in "[a-zA-Z0-9]{1,7}") {
        let input = RegistrationInput { password_confirm: password.clone(), password, ..input };

        let form = submit(&input);
        prop_assert_eq!(form.error(Field::Password), Some(FieldError::MinLength(8)));
        prop_assert_eq!(form.error(Field::PasswordConfirm), Some(FieldError::MinLength(8)));
    }

    #[test]
    fn long_password_is_rejected(input in valid_input(), password in "[a-zA-Z0-9]{51,80}") {
        let input = RegistrationInput { password_confirm: password.clone(), password, ..input };

        let form = submit(&input);
        prop_assert_eq!(form.error(Field::Password), Some(FieldError::MaxLength(50)));
    }

    #[test]
    fn confirmation_must_equal_password(input in valid_input(), other in "[a-zA-Z0-9]{8,50}") {
        prop_assume!(other != input.password);
        let input = RegistrationInput { password_confirm: other, ..input };

        let form = submit(&input);
        prop_assert_eq!(form.error(Field::PasswordConfirm), Some(FieldError::Mismatch));
        prop_assert_eq!(form.error(Field::Password), None);
        prop_assert!(!form.is_submit_successful());
    }
}
