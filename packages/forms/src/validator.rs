//! # Signup form controller
//!
//! [`SignupValidator`] owns everything the form needs between events: the
//! three field values, whether each field has been touched, and whether a
//! submit has been attempted.
//!
//! A field becomes touched the first time it loses focus and stays touched.
//! Feedback is only shown for touched fields, or for every field once a
//! submit was attempted, so nothing turns red before the user has had a
//! chance to type.

use std::borrow::Cow;

use crate::field::{message, Field, FieldResult, ReasonCode};
use crate::rules::{confirm_validity, email_validity, password_validity, MIN_PASSWORD_LENGTH};

/// Focus history of one field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldSession {
    #[default]
    Untouched,
    Touched,
}

/// What the UI should render for one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldFeedback {
    /// Whether the input carries the invalid marker.
    pub invalid: bool,
    /// Feedback text, empty when nothing should be shown.
    pub message: Cow<'static, str>,
}

impl FieldFeedback {
    const CLEAR: FieldFeedback = FieldFeedback {
        invalid: false,
        message: Cow::Borrowed(""),
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field is valid; let the form post.
    Submit,
    /// At least one field is invalid; cancel the submission.
    Blocked,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SignupValidator {
    values: [String; 3],
    sessions: [FieldSession; 3],
    was_validated: bool,
    min_password_length: usize,
}

impl Default for SignupValidator {
    fn default() -> Self {
        Self::with_min_password_length(MIN_PASSWORD_LENGTH)
    }
}

impl SignupValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_password_length(min_password_length: usize) -> Self {
        Self {
            values: Default::default(),
            sessions: Default::default(),
            was_validated: false,
            min_password_length,
        }
    }

    pub fn min_password_length(&self) -> usize {
        self.min_password_length
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Record the field's new value (the `input` event).
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// The field lost focus (the `focusout` event).
    pub fn focus_out(&mut self, field: Field) {
        self.sessions[field.index()] = FieldSession::Touched;
    }

    pub fn session(&self, field: Field) -> FieldSession {
        self.sessions[field.index()]
    }

    /// Whether the form is in its feedback-visible state.
    pub fn was_validated(&self) -> bool {
        self.was_validated
    }

    /// Evaluate a field against the current values of the form.
    pub fn evaluate(&self, field: Field) -> FieldResult {
        let state = match field {
            Field::Email => email_validity(self.value(Field::Email)),
            Field::Password => {
                password_validity(self.value(Field::Password), self.min_password_length)
            }
            Field::ConfirmPassword => confirm_validity(
                self.value(Field::ConfirmPassword),
                self.value(Field::Password),
            ),
        };
        FieldResult::from_validity(state)
    }

    pub fn feedback(&self, field: Field) -> FieldFeedback {
        let visible = self.was_validated || self.session(field) == FieldSession::Touched;
        if !visible {
            return FieldFeedback::CLEAR;
        }
        let result = self.evaluate(field);
        if result.valid {
            return FieldFeedback::CLEAR;
        }
        FieldFeedback {
            invalid: true,
            message: message(field, result.reason, self.min_password_length),
        }
    }

    /// The custom validity message the browser should hold for `field`: the
    /// mismatch text while the confirmation differs, otherwise empty. Only the
    /// confirmation has a rule the browser cannot express as an attribute.
    pub fn custom_validity(&self, field: Field) -> Cow<'static, str> {
        match self.evaluate(field).reason {
            ReasonCode::Mismatch => {
                message(field, ReasonCode::Mismatch, self.min_password_length)
            }
            _ => Cow::Borrowed(""),
        }
    }

    /// Whether every field is valid.
    pub fn check_validity(&self) -> bool {
        Field::ALL.iter().all(|f| self.evaluate(*f).valid)
    }

    /// Handle a submit attempt. The form becomes feedback-visible either way.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.was_validated = true;
        if self.check_validity() {
            SubmitOutcome::Submit
        } else {
            SubmitOutcome::Blocked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(email: &str, password: &str, confirm: &str) -> SignupValidator {
        let mut form = SignupValidator::new();
        form.input(Field::Email, email);
        form.input(Field::Password, password);
        form.input(Field::ConfirmPassword, confirm);
        form
    }

    #[test]
    fn test_untouched_field_shows_nothing() {
        let mut form = SignupValidator::new();
        form.input(Field::Email, "not-an-email");
        assert!(!form.evaluate(Field::Email).valid);
        assert_eq!(form.feedback(Field::Email), FieldFeedback::CLEAR);
    }

    #[test]
    fn test_empty_email_after_focus_out() {
        let mut form = SignupValidator::new();
        form.focus_out(Field::Email);
        form.input(Field::Email, "");

        let feedback = form.feedback(Field::Email);
        assert!(feedback.invalid);
        assert_eq!(feedback.message, "Please enter your email address.");

        form.input(Field::Email, "not-an-email");
        assert_eq!(
            form.feedback(Field::Email).message,
            "That doesn't look like an email address."
        );

        form.input(Field::Email, "coral@example.com");
        assert_eq!(form.feedback(Field::Email), FieldFeedback::CLEAR);
    }

    #[test]
    fn test_touched_is_terminal() {
        let mut form = SignupValidator::new();
        form.focus_out(Field::Password);
        form.input(Field::Password, "Valid123");
        form.focus_out(Field::Password);
        form.input(Field::Password, "");
        assert_eq!(form.session(Field::Password), FieldSession::Touched);
        assert_eq!(form.feedback(Field::Password).message, "Please enter a password.");
    }

    #[test]
    fn test_password_messages() {
        let mut form = SignupValidator::new();
        form.focus_out(Field::Password);

        form.input(Field::Password, "Ab1cd");
        assert_eq!(
            form.feedback(Field::Password).message,
            "Passwords must be at least 8 character long."
        );

        form.input(Field::Password, "alllowercase1");
        assert_eq!(
            form.feedback(Field::Password).message,
            "Passwords must contain at least one digit, one lower case letter and one upper case letter."
        );

        form.input(Field::Password, "Valid123");
        assert!(!form.feedback(Field::Password).invalid);
    }

    #[test]
    fn test_configured_min_length() {
        let mut form = SignupValidator::with_min_password_length(10);
        assert_eq!(form.min_password_length(), 10);
        form.focus_out(Field::Password);

        form.input(Field::Password, "Valid123");
        assert_eq!(
            form.feedback(Field::Password).message,
            "Passwords must be at least 10 character long."
        );

        form.input(Field::Password, "Valid12345");
        assert_eq!(form.feedback(Field::Password), FieldFeedback::CLEAR);
    }

    #[test]
    fn test_confirm_password() {
        let mut form = filled("coral@example.com", "Valid123", "Valid12");
        form.focus_out(Field::ConfirmPassword);
        assert_eq!(
            form.feedback(Field::ConfirmPassword).message,
            "Passwords don't match."
        );

        form.input(Field::ConfirmPassword, "");
        assert_eq!(
            form.feedback(Field::ConfirmPassword).message,
            "Please confirm your password."
        );

        form.input(Field::ConfirmPassword, "Valid123");
        assert_eq!(form.feedback(Field::ConfirmPassword), FieldFeedback::CLEAR);
    }

    #[test]
    fn test_editing_password_rechecks_confirmation() {
        let mut form = filled("coral@example.com", "Valid123", "Valid1234");
        form.focus_out(Field::ConfirmPassword);
        assert!(form.feedback(Field::ConfirmPassword).invalid);

        form.input(Field::Password, "Valid1234");
        assert!(!form.feedback(Field::ConfirmPassword).invalid);
    }

    #[test]
    fn test_custom_validity_tracks_confirmation() {
        let mut form = filled("coral@example.com", "Valid123", "Valid12");
        assert_eq!(
            form.custom_validity(Field::ConfirmPassword),
            "Passwords don't match."
        );
        // Set regardless of focus history; the browser hides it until styled.
        assert_eq!(form.session(Field::ConfirmPassword), FieldSession::Untouched);

        form.input(Field::Password, "Valid12");
        assert_eq!(form.custom_validity(Field::ConfirmPassword), "");

        form.input(Field::ConfirmPassword, "");
        assert_eq!(form.custom_validity(Field::ConfirmPassword), "");
        assert_eq!(form.custom_validity(Field::Email), "");
    }

    #[test]
    fn test_blocked_submit_reveals_all_feedback() {
        let mut form = filled("", "short", "");
        assert!(!form.was_validated());

        assert_eq!(form.submit(), SubmitOutcome::Blocked);
        assert!(form.was_validated());
        assert_eq!(
            form.feedback(Field::Email).message,
            "Please enter your email address."
        );
        assert_eq!(
            form.feedback(Field::Password).message,
            "Passwords must be at least 8 character long."
        );
        assert_eq!(
            form.feedback(Field::ConfirmPassword).message,
            "Please confirm your password."
        );
    }

    #[test]
    fn test_valid_submit() {
        let mut form = filled("coral@example.com", "Valid123", "Valid123");
        assert!(form.check_validity());
        assert_eq!(form.submit(), SubmitOutcome::Submit);
        assert!(form.was_validated());
        for field in Field::ALL {
            assert_eq!(form.feedback(field), FieldFeedback::CLEAR);
        }
    }
}
