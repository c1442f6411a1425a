//! This crate contains all shared UI for the workspace.

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{use_api, use_auth, AuthHandle, AuthProvider, AuthState, LogoutButton};

mod banner;
pub use banner::{Banner, BannerSeverity};

mod fields;
pub use fields::{PasswordField, TextField};

pub mod login_form;
pub use login_form::{
    banner_for, submit_login, FieldErrors, FormState, HomeRedirect, LoginEffects, LoginFailure,
    LoginForm, LoginGate, LoginGateway, SubmitPhase,
};
