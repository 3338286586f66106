//! Client-side validation for the signup form.
//!
//! Pure logic, no DOM: the UI feeds field values and focus events into a
//! [`SignupValidator`] and renders whatever [`FieldFeedback`] it hands back.

pub mod field;
pub mod rules;
pub mod validator;
pub mod validity;

pub use field::{message, Field, FieldResult, ReasonCode};
pub use rules::{MIN_PASSWORD_LENGTH, PASSWORD_PATTERN};
pub use validator::{FieldFeedback, FieldSession, SignupValidator, SubmitOutcome};
pub use validity::ValidityState;
