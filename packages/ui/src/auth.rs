//! Authentication context and hooks for the UI.

use std::rc::Rc;

use api::ApiClient;
use dioxus::prelude::*;
use store::{SessionStore, SessionToken};

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<SessionToken>,
}

impl AuthState {
    pub fn logged_in(&self) -> bool {
        self.token.is_some()
    }
}

/// Handle to the authentication context.
///
/// Reading through the handle inside a component subscribes it to login and
/// logout changes.
#[derive(Clone)]
pub struct AuthHandle {
    state: Signal<AuthState>,
    session: Rc<dyn SessionStore>,
}

impl AuthHandle {
    /// Whether a session token is currently held.
    pub fn logged_in(&self) -> bool {
        self.state.read().logged_in()
    }

    /// Record a new session: persist the token and mark the user as logged in.
    pub fn login(&mut self, token: SessionToken) {
        self.session.set(&token);
        self.state.set(AuthState { token: Some(token) });
    }

    /// Forget the session locally.
    pub fn logout(&mut self) {
        self.session.clear();
        self.state.set(AuthState::default());
    }
}

/// Get the authentication context.
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>()
}

/// Get the shared HTTP client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that manages authentication state.
/// Requires an [`ApiClient`] in context; wrap your router with it.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_api();

    // A token persisted by an earlier visit counts as logged in until the
    // server says otherwise.
    let auth_state = use_signal(|| AuthState {
        token: client.session().get(),
    });

    let listener = use_hook({
        let events = client.events().clone();
        move || {
            events.subscribe(move || {
                tracing::info!("Session expired, logging out");
                let mut state = auth_state;
                state.set(AuthState::default());
            })
        }
    });
    use_drop({
        let events = client.events().clone();
        move || {
            events.unsubscribe(listener);
        }
    });

    use_context_provider(|| AuthHandle {
        state: auth_state,
        session: Rc::clone(client.session()),
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] on_logout: EventHandler<()>,
) -> Element {
    let mut auth = use_auth();

    let onclick = move |_| {
        auth.logout();
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
