use crate::{Field, FieldError, LogEffect, Registration, RegistrationInput};
use dioxus::prelude::*;
use strum::IntoEnumIterator;
use tracing::{debug, warn};

/// The registration form.
///
/// Reads the [`Registration`] slice from context. Valid submissions are logged and,
/// when `on_submit` is set, forwarded to it.
#[component]
pub fn RegisterForm(on_submit: Option<EventHandler<RegistrationInput>>) -> Element {
    let registration = use_context::<Registration>();
    let mut form = use_signal(move || registration.form());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Err(err) = form.write().begin_submit() {
            warn!(%err, "Submit ignored");
            return;
        }

        spawn(async move {
            let result = form.write().complete_submit(&mut LogEffect);
            match result {
                Ok(input) => {
                    if let Some(handler) = on_submit {
                        handler.call(input);
                    }
                }
                Err(err) => debug!(%err, "Submission rejected"),
            }
        });
    };

    let state = form.read();
    let submitting = state.is_submitting();

    rsx! {
        form {
            class: "register-form",
            novalidate: true,
            onsubmit: handle_submit,

            for field in Field::iter() {
                FieldControl {
                    key: "{field}",
                    field,
                    value: state.value(field).to_owned(),
                    error: state.error(field),
                    oninput: move |value: String| form.write().set_value(field, value),
                }
            }

            SubmitButton { submitting }
        }
    }
}

#[component]
fn SubmitButton(submitting: bool) -> Element {
    rsx! {
        button {
            r#type: "submit",
            disabled: submitting,
            aria_busy: if submitting { "true" } else { "false" },
            if submitting { "Submitting..." } else { "Submit" }
        }
    }
}

#[component]
fn FieldControl(
    field: Field,
    value: String,
    error: Option<FieldError>,
    oninput: EventHandler<String>,
) -> Element {
    let id = field.as_str();
    let label = field.label();
    let input_type = field.input_type();
    let invalid = error.is_some();

    rsx! {
        div {
            class: if invalid { "field field-invalid" } else { "field" },

            label { r#for: id, "{label}" }
            input {
                id,
                name: id,
                r#type: input_type,
                value,
                aria_invalid: if invalid { "true" } else { "false" },
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if let Some(error) = error {
                p { id: "{id}-error", class: "field-error", role: "alert", "{error}" }
            }
        }
    }
}
