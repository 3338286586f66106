//! # Field constraints
//!
//! Each function computes the [`ValidityState`] a browser would report for the
//! corresponding `<input>`:
//!
//! | Input | Markup equivalent |
//! |-------|-------------------|
//! | `email` | `type="email" required` |
//! | `password1` | `type="password" required minlength="8"` plus a digit / lower / upper pattern |
//! | `password2` | `type="password" required` plus a custom "must match" check |
//!
//! As in browsers, `too_short` and `pattern_mismatch` are only reported for
//! non-empty values; an empty required input is just `value_missing`.

use std::sync::LazyLock;

use regex::Regex;

use crate::validity::ValidityState;

/// Default minimum password length, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// The character-class rule as an HTML `pattern` attribute, so the browser's
/// own constraint state agrees with [`has_required_character_classes`].
pub const PASSWORD_PATTERN: &str = "(?=.*[0-9])(?=.*[a-z])(?=.*[A-Z]).*";

// The "valid e-mail address" production from the HTML standard.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// Whether `value` is syntactically an e-mail address.
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Whether `value` contains an ASCII digit, an ASCII lowercase letter and an
/// ASCII uppercase letter. Other letters count towards the length only.
pub fn has_required_character_classes(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
}

pub fn email_validity(value: &str) -> ValidityState {
    // Browsers strip surrounding whitespace from email inputs.
    let value = value.trim();
    ValidityState {
        value_missing: value.is_empty(),
        type_mismatch: !value.is_empty() && !is_email(value),
        ..Default::default()
    }
}

pub fn password_validity(value: &str, min_length: usize) -> ValidityState {
    let empty = value.is_empty();
    ValidityState {
        value_missing: empty,
        too_short: !empty && value.chars().count() < min_length,
        pattern_mismatch: !empty && !has_required_character_classes(value),
        ..Default::default()
    }
}

pub fn confirm_validity(value: &str, password: &str) -> ValidityState {
    ValidityState {
        value_missing: value.is_empty(),
        custom_error: value != password,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_syntax() {
        assert!(is_email("coral.badger@example.com"));
        assert!(is_email("a+b@localhost"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("two@@example.com"));
        assert!(!is_email("trailing@dot."));
        assert!(!is_email("@example.com"));
    }

    #[test]
    fn test_email_validity() {
        assert!(email_validity("").value_missing);
        assert!(email_validity("   ").value_missing);

        let state = email_validity("not-an-email");
        assert!(state.type_mismatch);
        assert!(!state.value_missing);

        assert!(email_validity(" me@example.com ").valid());
    }

    #[test]
    fn test_password_too_short() {
        let state = password_validity("Ab1de", MIN_PASSWORD_LENGTH);
        assert!(state.too_short);
        assert!(!state.pattern_mismatch);
    }

    #[test]
    fn test_password_character_classes() {
        let state = password_validity("alllowercase1", MIN_PASSWORD_LENGTH);
        assert!(!state.too_short);
        assert!(state.pattern_mismatch);

        assert!(password_validity("NOLOWER123", MIN_PASSWORD_LENGTH).pattern_mismatch);
        assert!(password_validity("NoDigitsHere", MIN_PASSWORD_LENGTH).pattern_mismatch);
        assert!(password_validity("Valid123", MIN_PASSWORD_LENGTH).valid());
    }

    #[test]
    fn test_password_length_counts_characters() {
        // Eight characters, more than eight bytes.
        assert!(password_validity("Abcdéfg1", MIN_PASSWORD_LENGTH).valid());
        assert!(password_validity("Abcdéf1", MIN_PASSWORD_LENGTH).too_short);
    }

    #[test]
    fn test_non_ascii_letters_do_not_satisfy_classes() {
        let state = password_validity("ÄÖÜäöüß1", MIN_PASSWORD_LENGTH);
        assert!(!state.too_short);
        assert!(state.pattern_mismatch);

        // Lowercase ASCII present, uppercase only outside ASCII.
        assert!(password_validity("Ünïcödé1", MIN_PASSWORD_LENGTH).pattern_mismatch);
    }

    #[test]
    fn test_configured_min_length() {
        assert!(password_validity("Valid123", 10).too_short);
        assert!(password_validity("Valid12345", 10).valid());
        assert!(password_validity("Ab1", 3).valid());
    }

    #[test]
    fn test_empty_password_only_reports_missing() {
        let state = password_validity("", MIN_PASSWORD_LENGTH);
        assert_eq!(
            state,
            ValidityState {
                value_missing: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_confirm_validity() {
        assert!(confirm_validity("Valid123", "Valid123").valid());
        assert!(confirm_validity("Valid124", "Valid123").custom_error);

        let state = confirm_validity("", "Valid123");
        assert!(state.value_missing);

        // Both empty: still a required field.
        assert!(!confirm_validity("", "").valid());
    }
}
