//! Registration form with live validation feedback.
//!
//! The inputs also carry the native constraints (`required`, `minlength`,
//! `pattern`, and a custom validity on the confirmation) so the browser's
//! `:valid`/`:invalid` state, which Bootstrap styles under `.was-validated`,
//! agrees with the [`SignupValidator`] verdict.

use dioxus::prelude::*;
use forms::{Field, SignupValidator, SubmitOutcome, PASSWORD_PATTERN};

use crate::page;

const FORM_SELECTOR: &str = "form.needs-validation";

fn form_class(form: &SignupValidator) -> &'static str {
    if form.was_validated() {
        "needs-validation was-validated"
    } else {
        "needs-validation"
    }
}

fn input_id(field: Field) -> String {
    format!("id_{}", field.name())
}

/// The signup form: `email`, `password1` and `password2`, each with an
/// `.invalid-feedback` element driven by a [`SignupValidator`].
///
/// Submission is cancelled while any field is invalid. When every field is
/// valid the form is posted natively to `action`.
#[component]
pub fn SignupForm(
    action: String,
    /// Name of the hidden CSRF input.
    csrf_field: String,
    #[props(!optional)]
    csrf_token: Option<String>,
    /// Minimum password length, in characters.
    #[props(default = forms::MIN_PASSWORD_LENGTH)]
    min_password_length: usize,
) -> Element {
    let mut form =
        use_signal(move || SignupValidator::with_min_password_length(min_password_length));

    // Keep the browser's view of the confirmation in step with ours.
    use_effect(move || {
        let message = form.read().custom_validity(Field::ConfirmPassword);
        page::set_custom_validity(&input_id(Field::ConfirmPassword), &message);
    });

    let handle_submit = move |evt: FormEvent| {
        // Native submission is always taken over; a valid form is posted below.
        evt.prevent_default();
        let outcome = form.write().submit();
        match outcome {
            SubmitOutcome::Blocked => {
                evt.stop_propagation();
                tracing::debug!("signup blocked by invalid fields");
            }
            SubmitOutcome::Submit => page::submit_form(FORM_SELECTOR),
        }
    };

    rsx! {
        form {
            class: form_class(&form.read()),
            action: "{action}",
            method: "post",
            novalidate: true,
            onsubmit: handle_submit,

            if let Some(token) = csrf_token {
                input { r#type: "hidden", name: "{csrf_field}", value: "{token}" }
            }

            ValidatedInput {
                form,
                field: Field::Email,
                label: "Email address",
                input_type: "email",
                autocomplete: "email",
            }
            ValidatedInput {
                form,
                field: Field::Password,
                label: "Password",
                input_type: "password",
                autocomplete: "new-password",
            }
            ValidatedInput {
                form,
                field: Field::ConfirmPassword,
                label: "Confirm password",
                input_type: "password",
                autocomplete: "new-password",
            }

            button { class: "btn btn-primary w-100", r#type: "submit", "Sign up" }
        }
    }
}

#[component]
fn ValidatedInput(
    form: Signal<SignupValidator>,
    field: Field,
    label: String,
    input_type: String,
    autocomplete: String,
) -> Element {
    let mut form = form;
    let feedback = form.read().feedback(field);
    let value = form.read().value(field).to_string();
    let id = input_id(field);

    let (minlength, pattern) = match field {
        Field::Password => (
            Some(form.read().min_password_length().to_string()),
            Some(PASSWORD_PATTERN),
        ),
        Field::Email | Field::ConfirmPassword => (None, None),
    };

    rsx! {
        div {
            class: "mb-3",
            label { class: "form-label", r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                class: if feedback.invalid { "form-control is-invalid" } else { "form-control" },
                r#type: "{input_type}",
                name: field.name(),
                autocomplete: "{autocomplete}",
                required: true,
                minlength,
                pattern,
                value: "{value}",
                oninput: move |evt: FormEvent| form.write().input(field, evt.value()),
                onfocusout: move |_| form.write().focus_out(field),
            }
            div { class: "invalid-feedback", "{feedback.message}" }
        }
    }
}
