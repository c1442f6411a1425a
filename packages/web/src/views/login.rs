//! Login page view with email/password form.

use dioxus::prelude::*;
use store::SessionToken;
use ui::icons::FaArrowLeft;
use ui::login_form::{REQUIRED_FIELD, SESSION_EXPIRED};
use ui::{
    submit_login, use_api, use_auth, AuthHandle, Banner, BannerSeverity, HomeRedirect, Icon,
    LoginEffects, LoginForm, LoginGate, PasswordField, TextField,
};

use crate::Route;

/// Hands a fresh session to the auth context and leaves the page.
struct PageEffects {
    auth: AuthHandle,
    on_authenticated: EventHandler<()>,
}

impl LoginEffects for PageEffects {
    fn authenticate(&mut self, token: SessionToken) {
        self.auth.login(token);
    }

    fn navigate_home(&mut self) {
        self.on_authenticated.call(());
    }
}

/// Login page component.
#[component]
pub fn Login(reason: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut form = use_signal(|| LoginForm::mounted(&reason));
    let mut redirect = use_signal(HomeRedirect::default);

    // The query can change while the page stays mounted
    use_effect(use_reactive((&reason,), move |(reason,)| {
        form.write().note_reason(&reason);
    }));

    // If already logged in (now or later), leave without keeping /login in history
    use_effect(move || {
        if LoginGate::for_status(auth.logged_in()) == LoginGate::RedirectHome
            && redirect.write().claim()
        {
            nav.replace(Route::Dashboard {});
        }
    });

    rsx! {
        LoginPanel {
            form,
            on_back: move |_| nav.go_back(),
            on_authenticated: move |_| {
                if redirect.write().claim() {
                    nav.push(Route::Dashboard {});
                }
            },
            p {
                class: "auth-card__footer",
                "Don't have an account yet? "
                Link {
                    class: "auth-card__link",
                    to: Route::Register {},
                    "Sign up"
                }
            }
        }
    }
}

/// The login card and form. Renders nothing for a logged-in user.
///
/// `children` go below the form.
#[component]
pub fn LoginPanel(
    form: Signal<LoginForm>,
    on_back: EventHandler<()>,
    on_authenticated: EventHandler<()>,
    children: Element,
) -> Element {
    let mut form = form;
    let auth = use_auth();
    let client = use_api();

    if LoginGate::for_status(auth.logged_in()) == LoginGate::RedirectHome {
        return rsx! {};
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let mut effects = PageEffects {
            auth: auth.clone(),
            on_authenticated,
        };
        spawn(async move {
            submit_login(&mut form, &client, &mut effects).await;
        });
    };

    let state = form();

    rsx! {
        div {
            class: "auth-page",

            button {
                class: "auth-page__back",
                r#type: "button",
                "aria-label": "go back",
                onclick: move |_| on_back.call(()),
                Icon { icon: FaArrowLeft, width: 20, height: 20 }
            }

            div {
                class: "auth-page__hero",
                span { class: "auth-page__hero-title", "Workdesk" }
            }

            div {
                class: "auth-page__panel",
                div {
                    class: "auth-card",

                    h1 { class: "auth-card__title", "Workdesk" }

                    if state.session_expired {
                        Banner {
                            severity: BannerSeverity::Warning,
                            message: SESSION_EXPIRED.to_string(),
                        }
                    }

                    if let Some(err) = state.error.clone() {
                        Banner {
                            severity: BannerSeverity::Error,
                            message: err,
                        }
                    }

                    form {
                        class: "auth-card__form",
                        novalidate: true,
                        onsubmit: handle_login,

                        TextField {
                            name: "email",
                            label: "Your email",
                            input_type: "email",
                            value: state.email.clone(),
                            error: state.errors.email,
                            helper_text: REQUIRED_FIELD.to_string(),
                            oninput: move |value: String| form.write().set_email(value),
                        }

                        PasswordField {
                            name: "senha",
                            label: "Your password",
                            value: state.password.clone(),
                            input_type: state.password_input_type().to_string(),
                            visible: state.show_password,
                            error: state.errors.password,
                            helper_text: REQUIRED_FIELD.to_string(),
                            oninput: move |value: String| form.write().set_password(value),
                            on_toggle_visibility: move |_| form.write().toggle_password_visibility(),
                        }

                        button {
                            class: "button button--primary",
                            r#type: "submit",
                            disabled: state.is_submitting(),
                            {state.submit_label()}
                        }
                    }

                    {children}
                }
            }
        }
    }
}
