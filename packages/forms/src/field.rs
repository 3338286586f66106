//! # Signup fields and their messages
//!
//! [`FieldResult`] is the per-field verdict the UI renders. It is derived from a
//! [`ValidityState`] by precedence (missing, then type, then length, then
//! pattern, then the custom check), and the user-facing text comes from
//! [`message`], keyed on the field and the [`ReasonCode`] (plus the configured
//! minimum length, which the too-short text names).

use std::borrow::Cow;

use crate::validity::ValidityState;

/// The three tracked inputs of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Email, Field::Password, Field::ConfirmPassword];

    /// The input's `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password1",
            Field::ConfirmPassword => "password2",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Field::Email => 0,
            Field::Password => 1,
            Field::ConfirmPassword => 2,
        }
    }
}

/// The single reason a field is reported invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReasonCode {
    Valid,
    ValueMissing,
    TypeMismatch,
    TooShort,
    PatternMismatch,
    /// The confirmation differs from the password.
    Mismatch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldResult {
    pub valid: bool,
    pub reason: ReasonCode,
}

impl FieldResult {
    pub const VALID: FieldResult = FieldResult {
        valid: true,
        reason: ReasonCode::Valid,
    };

    pub fn from_validity(state: ValidityState) -> Self {
        let reason = if state.value_missing {
            ReasonCode::ValueMissing
        } else if state.type_mismatch {
            ReasonCode::TypeMismatch
        } else if state.too_short {
            ReasonCode::TooShort
        } else if state.pattern_mismatch {
            ReasonCode::PatternMismatch
        } else if state.custom_error {
            ReasonCode::Mismatch
        } else {
            return Self::VALID;
        };
        FieldResult {
            valid: false,
            reason,
        }
    }
}

/// Feedback text for `field` failing with `reason`. Empty for valid fields and
/// for reasons a field cannot produce.
pub fn message(
    field: Field,
    reason: ReasonCode,
    min_password_length: usize,
) -> Cow<'static, str> {
    let text = match (field, reason) {
        (Field::Password, ReasonCode::TooShort) => {
            return Cow::Owned(format!(
                "Passwords must be at least {min_password_length} character long."
            ));
        }
        (_, ReasonCode::Valid) => "",
        (Field::Email, ReasonCode::ValueMissing) => "Please enter your email address.",
        (Field::Email, ReasonCode::TypeMismatch) => "That doesn't look like an email address.",
        (Field::Password, ReasonCode::ValueMissing) => "Please enter a password.",
        (Field::Password, ReasonCode::PatternMismatch) => {
            "Passwords must contain at least one digit, one lower case letter \
             and one upper case letter."
        }
        (Field::ConfirmPassword, ReasonCode::ValueMissing) => "Please confirm your password.",
        (Field::ConfirmPassword, _) => "Passwords don't match.",
        _ => "",
    };
    Cow::Borrowed(text)
}
