//! # Login form state machine
//!
//! [`LoginForm`] holds everything the login page renders and walks through
//!
//! ```text
//! Idle ──submit──▶ Validating ──ok──▶ Submitting ──▶ Success | Failed ──▶ Idle
//!                      │
//!                      └── missing field / bad email ──▶ Idle (no request)
//! ```
//!
//! The model is plain data so it can live in a `Signal` on the page and be
//! driven directly in tests. [`submit_login`] runs one whole attempt against a
//! [`LoginGateway`] and reports success through [`LoginEffects`].
//!
//! Every failure ends up as banner text through [`LoginFailure::message`]; no
//! error escapes the page.

use std::future::Future;
use std::sync::LazyLock;

use api::{ApiClient, Credentials};
use dioxus::prelude::*;
use regex::Regex;
use store::SessionToken;

/// Query value of `reason` that marks a redirect caused by an expired session.
pub const SESSION_EXPIRED_REASON: &str = "session_expired";

pub const REQUIRED_FIELD: &str = "Required field";
pub const INVALID_EMAIL: &str = "Please enter a valid email.";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Check your email and password.";
pub const SERVER_ERROR: &str = "Server error. Please try again later.";
pub const LOGIN_FAILED: &str = "Something went wrong while logging in.";
pub const SERVER_UNREACHABLE: &str = "Could not connect to the server.";
pub const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// `local@domain.tld` with no whitespace and exactly one `@` per part.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Which fields were empty on the last submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: bool,
    pub password: bool,
}

impl FieldErrors {
    pub fn any(&self) -> bool {
        self.email || self.password
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Why a login attempt did not produce a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFailure {
    MissingField,
    InvalidEmailFormat,
    Unauthorized,
    ServerError,
    OtherHttpError,
    NetworkUnreachable,
}

impl LoginFailure {
    /// Sort a client error into the failure the user is told about.
    pub fn classify(error: &api::Error) -> Self {
        match error {
            api::Error::Network(_) => LoginFailure::NetworkUnreachable,
            api::Error::Status { status: 401, .. } => LoginFailure::Unauthorized,
            api::Error::Status { status: 500, .. } => LoginFailure::ServerError,
            api::Error::Status { .. }
            | api::Error::Decode(_)
            | api::Error::MissingToken
            | api::Error::Build(_) => LoginFailure::OtherHttpError,
        }
    }

    /// Banner text for this failure. Missing fields are flagged inline instead.
    pub fn message(self) -> Option<&'static str> {
        match self {
            LoginFailure::MissingField => None,
            LoginFailure::InvalidEmailFormat => Some(INVALID_EMAIL),
            LoginFailure::Unauthorized => Some(INVALID_CREDENTIALS),
            LoginFailure::ServerError => Some(SERVER_ERROR),
            LoginFailure::OtherHttpError => Some(LOGIN_FAILED),
            LoginFailure::NetworkUnreachable => Some(SERVER_UNREACHABLE),
        }
    }
}

/// Banner text for a failed login request.
pub fn banner_for(error: &api::Error) -> &'static str {
    LoginFailure::classify(error).message().unwrap_or(LOGIN_FAILED)
}

/// What the login page does given the current auth status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginGate {
    /// Already authenticated: replace history with the home route, render nothing.
    RedirectHome,
    ShowForm,
}

impl LoginGate {
    pub fn for_status(logged_in: bool) -> Self {
        if logged_in {
            LoginGate::RedirectHome
        } else {
            LoginGate::ShowForm
        }
    }
}

/// The single trip from the login page to the home route.
///
/// Both a successful submit and the logged-in gate want to leave the page;
/// whichever claims it first navigates, the other does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomeRedirect {
    claimed: bool,
}

impl HomeRedirect {
    /// True the first time only.
    pub fn claim(&mut self) -> bool {
        !std::mem::replace(&mut self.claimed, true)
    }
}

/// State of the login page. Recreated on every mount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub errors: FieldErrors,
    pub phase: SubmitPhase,
    /// Error banner, cleared when a new request starts.
    pub error: Option<String>,
    /// Warning banner shown when the page was reached after a session expired.
    pub session_expired: bool,
    pub show_password: bool,
}

impl LoginForm {
    /// Fresh form for a page mounted with the given `reason` query value.
    pub fn mounted(reason: &str) -> Self {
        let mut form = Self::default();
        form.note_reason(reason);
        form
    }

    /// Raise the session-expired warning if `reason` asks for it. Never lowers it.
    pub fn note_reason(&mut self, reason: &str) {
        if reason == SESSION_EXPIRED_REASON {
            self.session_expired = true;
        }
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.errors.email = false;
    }

    pub fn set_password(&mut self, password: String) {
        self.password = password;
        self.errors.password = false;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// `type` attribute for the password input.
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password {
            "text"
        } else {
            "password"
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Signing in..."
        } else {
            "Sign in to my account"
        }
    }

    /// Check the fields locally. Flags empty fields or sets the invalid-email banner.
    pub fn validate(&mut self) -> Result<Credentials, LoginFailure> {
        if self.email.is_empty() || self.password.is_empty() {
            self.errors = FieldErrors {
                email: self.email.is_empty(),
                password: self.password.is_empty(),
            };
            return Err(LoginFailure::MissingField);
        }

        if !is_valid_email(&self.email) {
            self.error = LoginFailure::InvalidEmailFormat.message().map(str::to_string);
            return Err(LoginFailure::InvalidEmailFormat);
        }

        Ok(Credentials::new(self.email.clone(), self.password.clone()))
    }

    /// Validate and enter `Submitting`. Returns the credentials to send, or
    /// `None` when validation failed or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.is_submitting() {
            tracing::debug!("Ignoring submit while a login request is in flight");
            return None;
        }

        let credentials = self.validate().ok()?;
        self.error = None;
        self.errors = FieldErrors::default();
        self.phase = SubmitPhase::Submitting;
        Some(credentials)
    }

    /// Leave `Submitting` whatever the outcome. Returns the token on success,
    /// otherwise sets the error banner.
    pub fn finish(&mut self, result: Result<SessionToken, api::Error>) -> Option<SessionToken> {
        self.phase = SubmitPhase::Idle;
        match result {
            Ok(token) => Some(token),
            Err(e) => {
                let failure = LoginFailure::classify(&e);
                tracing::warn!("Login failed ({:?}): {}", failure, e);
                self.error = Some(banner_for(&e).to_string());
                None
            }
        }
    }
}

/// Something that can exchange credentials for a token.
pub trait LoginGateway {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<SessionToken, api::Error>>;
}

impl LoginGateway for ApiClient {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<SessionToken, api::Error>> {
        ApiClient::login(self, credentials)
    }
}

/// What happens after a successful login.
pub trait LoginEffects {
    /// Hand the token to the authentication context.
    fn authenticate(&mut self, token: SessionToken);
    /// Go to the post-login destination.
    fn navigate_home(&mut self);
}

/// Mutable access to a [`LoginForm`] wherever it lives.
pub trait FormState {
    fn update<R>(&mut self, f: impl FnOnce(&mut LoginForm) -> R) -> R;
}

impl FormState for LoginForm {
    fn update<R>(&mut self, f: impl FnOnce(&mut LoginForm) -> R) -> R {
        f(self)
    }
}

impl FormState for Signal<LoginForm> {
    fn update<R>(&mut self, f: impl FnOnce(&mut LoginForm) -> R) -> R {
        f(&mut self.write())
    }
}

/// Run one login attempt. Returns true if the user is now logged in.
///
/// The form is only borrowed between awaits, never across the request.
pub async fn submit_login<S, G, E>(form: &mut S, gateway: &G, effects: &mut E) -> bool
where
    S: FormState,
    G: LoginGateway,
    E: LoginEffects,
{
    let Some(credentials) = form.update(LoginForm::begin_submit) else {
        return false;
    };

    let result = gateway.login(&credentials).await;

    match form.update(|form| form.finish(result)) {
        Some(token) => {
            tracing::info!("Login succeeded");
            effects.authenticate(token);
            effects.navigate_home();
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use api::SessionEvents;
    use store::{ApiConfig, MemoryStore};

    use super::*;

    /// Gateway that records every call and answers with a canned result.
    struct FakeGateway {
        calls: RefCell<Vec<Credentials>>,
        answer: fn() -> Result<SessionToken, api::Error>,
    }

    impl FakeGateway {
        fn new(answer: fn() -> Result<SessionToken, api::Error>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                answer,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl LoginGateway for FakeGateway {
        async fn login(&self, credentials: &Credentials) -> Result<SessionToken, api::Error> {
            self.calls.borrow_mut().push(credentials.clone());
            (self.answer)()
        }
    }

    #[derive(Default)]
    struct Recorder {
        tokens: Vec<SessionToken>,
        navigations: u32,
    }

    impl LoginEffects for Recorder {
        fn authenticate(&mut self, token: SessionToken) {
            self.tokens.push(token);
        }

        fn navigate_home(&mut self) {
            self.navigations += 1;
        }
    }

    fn ok_abc() -> Result<SessionToken, api::Error> {
        Ok(SessionToken::new("abc"))
    }

    fn status(code: u16) -> api::Error {
        api::Error::Status {
            status: code,
            body: String::new(),
        }
    }

    fn filled(email: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::mounted("");
        form.set_email(email.to_string());
        form.set_password(password.to_string());
        form
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.co"));
        for bad in ["a.com", "a@", "@b.com", "a@b", "a b@c.com", "a@b .com", ""] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
    }

    #[tokio::test]
    async fn empty_fields_are_flagged_without_network() {
        let cases = [
            ("", "", FieldErrors { email: true, password: true }),
            ("", "pw", FieldErrors { email: true, password: false }),
            ("user@example.com", "", FieldErrors { email: false, password: true }),
        ];

        for (email, password, expected) in cases {
            let gateway = FakeGateway::new(ok_abc);
            let mut effects = Recorder::default();
            let mut form = filled(email, password);

            assert!(!submit_login(&mut form, &gateway, &mut effects).await);
            assert_eq!(form.errors, expected);
            assert!(form.error.is_none(), "missing fields show no banner");
            assert_eq!(form.phase, SubmitPhase::Idle);
            assert_eq!(gateway.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn invalid_email_sets_banner_without_network() {
        for bad in ["a.com", "a@", "@b.com"] {
            let gateway = FakeGateway::new(ok_abc);
            let mut effects = Recorder::default();
            let mut form = filled(bad, "pw");

            assert!(!submit_login(&mut form, &gateway, &mut effects).await);
            assert_eq!(form.error.as_deref(), Some(INVALID_EMAIL));
            assert!(!form.errors.any());
            assert_eq!(gateway.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn valid_input_calls_network_once_with_credentials() {
        let gateway = FakeGateway::new(ok_abc);
        let mut effects = Recorder::default();
        let mut form = filled("user@example.com", "hunter2");

        assert!(submit_login(&mut form, &gateway, &mut effects).await);

        let calls = gateway.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], Credentials::new("user@example.com", "hunter2"));
    }

    #[tokio::test]
    async fn success_authenticates_and_navigates_once() {
        let gateway = FakeGateway::new(ok_abc);
        let mut effects = Recorder::default();
        let mut form = filled("user@example.com", "hunter2");

        submit_login(&mut form, &gateway, &mut effects).await;

        assert_eq!(effects.tokens, vec![SessionToken::new("abc")]);
        assert_eq!(effects.navigations, 1);
        assert_eq!(form.phase, SubmitPhase::Idle);
        assert!(form.error.is_none());
    }

    #[tokio::test]
    async fn unauthorized_shows_invalid_credentials() {
        let gateway = FakeGateway::new(|| Err(status(401)));
        let mut effects = Recorder::default();
        let mut form = filled("user@example.com", "wrong");

        assert!(!submit_login(&mut form, &gateway, &mut effects).await);
        assert_eq!(form.error.as_deref(), Some(INVALID_CREDENTIALS));
        assert!(!form.is_submitting());
        assert!(effects.tokens.is_empty());
        assert_eq!(effects.navigations, 0);
    }

    #[tokio::test]
    async fn server_error_shows_retry_message() {
        let gateway = FakeGateway::new(|| Err(status(500)));
        let mut effects = Recorder::default();
        let mut form = filled("user@example.com", "pw");

        submit_login(&mut form, &gateway, &mut effects).await;
        assert_eq!(form.error.as_deref(), Some(SERVER_ERROR));
        assert!(!form.is_submitting());
    }

    #[test]
    fn other_statuses_show_generic_message() {
        for code in [400, 403, 404, 502] {
            let mut form = filled("user@example.com", "pw");
            form.begin_submit().unwrap();
            assert!(form.finish(Err(status(code))).is_none());
            assert_eq!(form.error.as_deref(), Some(LOGIN_FAILED), "status {code}");
        }
    }

    #[tokio::test]
    async fn unreachable_server_shows_connection_message() {
        // A real client pointed at a closed port produces a transport error.
        let config = ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 5,
        };
        let client =
            ApiClient::new(&config, Rc::new(MemoryStore::new()), SessionEvents::new()).unwrap();
        let mut effects = Recorder::default();
        let mut form = filled("user@example.com", "pw");

        assert!(!submit_login(&mut form, &client, &mut effects).await);
        assert_eq!(form.error.as_deref(), Some(SERVER_UNREACHABLE));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn submit_while_submitting_is_inert() {
        let gateway = FakeGateway::new(ok_abc);
        let mut effects = Recorder::default();
        let mut form = filled("user@example.com", "pw");

        // First attempt in flight
        assert!(form.begin_submit().is_some());
        assert_eq!(form.submit_label(), "Signing in...");

        assert!(!submit_login(&mut form, &gateway, &mut effects).await);
        assert_eq!(gateway.call_count(), 0);
        assert!(form.is_submitting());
    }

    #[test]
    fn new_attempt_clears_previous_banner() {
        let mut form = filled("user@example.com", "pw");
        form.begin_submit().unwrap();
        form.finish(Err(status(401)));
        assert!(form.error.is_some());

        form.begin_submit().unwrap();
        assert!(form.error.is_none());
    }

    #[test]
    fn editing_a_field_clears_only_its_flag() {
        let mut form = LoginForm::mounted("");
        assert!(form.begin_submit().is_none());
        assert_eq!(form.errors, FieldErrors { email: true, password: true });

        form.set_email("x".to_string());
        assert_eq!(form.errors, FieldErrors { email: false, password: true });

        form.set_password("y".to_string());
        assert!(!form.errors.any());
    }

    #[test]
    fn editing_a_field_keeps_the_banner() {
        let mut form = filled("user@example.com", "pw");
        form.begin_submit().unwrap();
        form.finish(Err(status(500)));

        form.set_password("other".to_string());
        assert_eq!(form.error.as_deref(), Some(SERVER_ERROR));
    }

    #[test]
    fn password_visibility_toggle_round_trips() {
        let mut form = filled("user@example.com", "s3cret");
        assert_eq!(form.password_input_type(), "password");

        form.toggle_password_visibility();
        assert_eq!(form.password_input_type(), "text");

        form.toggle_password_visibility();
        assert_eq!(form.password_input_type(), "password");
        assert_eq!(form.password, "s3cret");
    }

    #[test]
    fn session_expired_banner_depends_on_reason() {
        assert!(LoginForm::mounted("session_expired").session_expired);
        assert!(!LoginForm::mounted("").session_expired);
        assert!(!LoginForm::mounted("logout").session_expired);
    }

    #[test]
    fn session_expired_banner_survives_failed_login() {
        let mut form = LoginForm::mounted(SESSION_EXPIRED_REASON);
        form.set_email("user@example.com".to_string());
        form.set_password("pw".to_string());
        form.begin_submit().unwrap();
        form.finish(Err(status(401)));

        assert!(form.session_expired);
        assert_eq!(form.error.as_deref(), Some(INVALID_CREDENTIALS));
    }

    #[test]
    fn reason_arriving_later_raises_the_warning() {
        let mut form = LoginForm::mounted("");
        form.set_email("user@example.com".to_string());
        assert!(!form.session_expired);

        form.note_reason(SESSION_EXPIRED_REASON);
        assert!(form.session_expired);
        assert_eq!(form.email, "user@example.com");

        form.note_reason("");
        assert!(form.session_expired);
    }

    #[test]
    fn logged_in_user_is_redirected() {
        assert_eq!(LoginGate::for_status(true), LoginGate::RedirectHome);
        assert_eq!(LoginGate::for_status(false), LoginGate::ShowForm);
    }

    #[tokio::test]
    async fn success_then_gate_navigates_once() {
        struct Leaving {
            redirect: HomeRedirect,
            navigations: u32,
        }

        impl LoginEffects for Leaving {
            fn authenticate(&mut self, _token: SessionToken) {}

            fn navigate_home(&mut self) {
                if self.redirect.claim() {
                    self.navigations += 1;
                }
            }
        }

        let gateway = FakeGateway::new(|| Ok(SessionToken::new("fresh")));
        let mut form = filled("user@example.com", "pw");
        let mut effects = Leaving {
            redirect: HomeRedirect::default(),
            navigations: 0,
        };

        assert!(submit_login(&mut form, &gateway, &mut effects).await);

        // The auth change re-runs the gate, which finds the trip already taken
        assert_eq!(LoginGate::for_status(true), LoginGate::RedirectHome);
        assert!(!effects.redirect.claim());
        assert_eq!(effects.navigations, 1);
    }

    #[test]
    fn home_redirect_is_claimed_once() {
        let mut redirect = HomeRedirect::default();
        assert!(redirect.claim());
        assert!(!redirect.claim());
        assert!(!redirect.claim());
    }

    #[test]
    fn classify_covers_every_status_class() {
        assert_eq!(LoginFailure::classify(&status(401)), LoginFailure::Unauthorized);
        assert_eq!(LoginFailure::classify(&status(500)), LoginFailure::ServerError);
        assert_eq!(LoginFailure::classify(&status(403)), LoginFailure::OtherHttpError);
        assert_eq!(
            LoginFailure::classify(&api::Error::MissingToken),
            LoginFailure::OtherHttpError
        );
        assert_eq!(LoginFailure::MissingField.message(), None);
    }
}
