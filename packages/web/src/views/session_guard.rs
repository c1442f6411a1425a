//! Layout for authenticated routes.
//!
//! Listens for session-expired notifications from the HTTP client and sends the
//! user back to `/login?reason=session_expired`. Also keeps logged-out users
//! away from the routes it wraps.

use dioxus::prelude::*;
use ui::login_form::SESSION_EXPIRED_REASON;
use ui::{use_api, use_auth};

use crate::Route;

#[component]
pub fn SessionGuard() -> Element {
    let auth = use_auth();
    let client = use_api();
    let nav = use_navigator();
    let expired = use_signal(|| false);

    let listener = use_hook({
        let events = client.events().clone();
        move || {
            events.subscribe(move || {
                let mut expired = expired;
                expired.set(true);
                nav.replace(Route::Login {
                    reason: SESSION_EXPIRED_REASON.to_string(),
                });
            })
        }
    });
    use_drop({
        let events = client.events().clone();
        move || {
            events.unsubscribe(listener);
        }
    });

    let logged_in = auth.logged_in();
    use_effect(move || {
        if !auth.logged_in() {
            let reason = if *expired.peek() {
                SESSION_EXPIRED_REASON.to_string()
            } else {
                String::new()
            };
            nav.replace(Route::Login { reason });
        }
    });

    if !logged_in {
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}
