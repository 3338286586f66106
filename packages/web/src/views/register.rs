//! Registration page view.

use dioxus::prelude::*;
use ui::SignupForm;

use crate::PageContext;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let page = use_context::<PageContext>();
    let signup = page.config.signup.clone();

    rsx! {
        div {
            class: "container py-5",
            style: "max-width: 420px;",

            h1 { class: "h3 mb-4", "Create Account" }

            SignupForm {
                action: signup.action,
                csrf_field: signup.csrf_field,
                csrf_token: page.csrf_token.clone(),
                min_password_length: signup.min_password_length,
            }

            p {
                class: "mt-4 text-muted",
                "Already have an account? "
                a { href: "/login/", "Sign in" }
            }
        }
    }
}
