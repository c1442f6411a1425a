//! Registration page placeholder linked from the login form.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Register() -> Element {
    rsx! {
        div {
            class: "auth-page auth-page--centered",
            div {
                class: "auth-card",
                h1 { class: "auth-card__title", "Create an account" }
                p {
                    class: "auth-card__subtitle",
                    "Account registration is handled by your administrator."
                }
                Link {
                    class: "auth-card__link",
                    to: Route::login(),
                    "Back to sign in"
                }
            }
        }
    }
}
