use dioxus::prelude::*;
use ui::LogoutButton;

use crate::Route;

/// Landing page after login.
#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "dashboard",
            header {
                class: "dashboard__header",
                h1 { class: "dashboard__title", "Workdesk" }
                LogoutButton {
                    class: "button button--secondary",
                    on_logout: move |_| {
                        nav.replace(Route::login());
                    },
                }
            }
            p { class: "dashboard__welcome", "You are signed in." }
        }
    }
}
