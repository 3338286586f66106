use dioxus::prelude::*;
use ui::FriendsPanel;

use crate::Route;

/// Landing page of a signed-in user.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            class: "container py-4",
            div {
                class: "d-flex justify-content-between align-items-center mb-4",
                h1 { class: "h3 m-0", "Dashboard" }
                FriendsPanel {}
            }
            p {
                class: "text-muted",
                "New here? "
                Link { to: Route::Register {}, "Create an account" }
            }
        }
    }
}
