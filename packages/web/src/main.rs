use api::ApiClient;
use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Dashboard, Login, Register, SessionGuard};

mod client;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login?:reason")]
    Login { reason: String },
    #[route("/register")]
    Register {},
    #[layout(SessionGuard)]
        #[route("/dashboard")]
        Dashboard {},
}

impl Route {
    /// The login page with no banner reason.
    fn login() -> Self {
        Route::Login {
            reason: String::new(),
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let client = use_hook(|| client::build_client().map_err(|e| e.to_string()));

    let body = match client {
        Ok(client) => rsx! { ClientRoot { client } },
        Err(message) => {
            tracing::error!("Failed to create API client: {}", message);
            rsx! {
                div {
                    class: "startup-error",
                    h1 { "Unable to start" }
                    p { "{message}" }
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        {body}
    }
}

/// Everything below here can reach the HTTP client and the auth context.
#[component]
fn ClientRoot(client: ApiClient) -> Element {
    use_context_provider(|| client);

    rsx! {
        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` by auth state
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if auth.logged_in() {
            nav.replace(Route::Dashboard {});
        } else {
            nav.replace(Route::login());
        }
    });

    rsx! {}
}
