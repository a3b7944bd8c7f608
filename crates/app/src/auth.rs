//! Authentication flow state machine.
//!
//! States: login, signup, verify, authenticated. The flow owns all auth
//! UI state; the rendering shell reads [`AuthState`] and calls the
//! transition methods. Form validation runs before any network call and
//! a failed validation leaves the state untouched.
//!
//! Two submissions can in principle race if the caller ignores the
//! `loading` flag; the last response wins. There is no request
//! cancellation and no timeout here - a hung request leaves `loading`
//! set until the gateway call returns.

use secrecy::SecretString;
use tracing::{info, instrument, warn};

use greenmind_client::SessionStore;
use greenmind_client::types::{AuthResponse, Credentials, SignupData};
use greenmind_core::Role;
use greenmind_core::validation::form::{
    FormValidation, LoginForm, SignupForm, validate_login_form, validate_signup_form,
    validate_verification_form,
};

use crate::gateway::AuthGateway;

/// Error shown when verification is attempted without a prior signup.
const NO_REGISTRATION_ERROR: &str = "No registration found";

/// Which auth page is active while unauthenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPage {
    #[default]
    Login,
    Signup,
    Verify,
}

/// Auth UI state, owned exclusively by [`AuthFlow`].
///
/// Invariants: `pending_email` is non-`None` only while `page` is
/// [`AuthPage::Verify`]; `role` is meaningful only while `authenticated`
/// is true.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub authenticated: bool,
    pub page: AuthPage,
    pub loading: bool,
    pub error: Option<String>,
    pub pending_email: Option<String>,
    pub role: Role,
}

/// The login / signup / verify state machine.
///
/// Generic over the [`AuthGateway`] so tests can drive it against an
/// in-memory stub.
pub struct AuthFlow<G> {
    gateway: G,
    session: SessionStore,
    state: AuthState,
}

impl<G: AuthGateway> AuthFlow<G> {
    /// Create a flow starting on the login page.
    #[must_use]
    pub fn new(gateway: G, session: SessionStore) -> Self {
        Self {
            gateway,
            session,
            state: AuthState::default(),
        }
    }

    /// Current auth UI state.
    #[must_use]
    pub const fn state(&self) -> &AuthState {
        &self.state
    }

    /// The session store backing this flow.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Switch to the signup page. No network call; clears any error and
    /// pending verification.
    pub fn switch_to_signup(&mut self) {
        self.state.page = AuthPage::Signup;
        self.state.error = None;
        self.state.pending_email = None;
    }

    /// Switch back to the login page. No network call; clears any error
    /// and pending verification.
    pub fn switch_to_login(&mut self) {
        self.state.page = AuthPage::Login;
        self.state.error = None;
        self.state.pending_email = None;
    }

    /// Submit the login form.
    ///
    /// On gateway success the flow becomes authenticated, the returned
    /// token (if any) is persisted, and the role comes from the server's
    /// claim, defaulting to `user`. On gateway failure the error message
    /// lands in [`AuthState::error`] and the flow stays on the login
    /// page.
    ///
    /// # Errors
    ///
    /// Returns the field-error map when the form fails local validation;
    /// no state changes and no network call in that case.
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub async fn submit_login(&mut self, form: &LoginForm) -> Result<(), FormValidation> {
        let validation = validate_login_form(form);
        if !validation.is_valid() {
            return Err(validation);
        }

        let credentials = Credentials::new(form.email.clone(), form.password.clone());

        self.state.loading = true;
        self.state.error = None;
        let result = self.gateway.login(&credentials).await;
        self.state.loading = false;

        match result {
            Ok(response) => {
                info!(email = %form.email, "Login succeeded");
                self.enter_authenticated(&response);
            }
            Err(e) => {
                self.state.error = Some(e.to_string());
            }
        }

        Ok(())
    }

    /// Submit the signup form.
    ///
    /// On gateway success the flow moves to the verify page, remembering
    /// the submitted email as the pending verification target.
    ///
    /// # Errors
    ///
    /// Returns the field-error map when the form fails local validation;
    /// no state changes and no network call in that case.
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub async fn submit_signup(&mut self, form: &SignupForm) -> Result<(), FormValidation> {
        let validation = validate_signup_form(form);
        if !validation.is_valid() {
            return Err(validation);
        }

        let data = SignupData::from_form(form);

        self.state.loading = true;
        self.state.error = None;
        let result = self.gateway.register(&data).await;
        self.state.loading = false;

        match result {
            Ok(_) => {
                info!(email = %form.email, "Registration submitted, awaiting verification");
                self.state.page = AuthPage::Verify;
                self.state.pending_email = Some(form.email.clone());
            }
            Err(e) => {
                self.state.error = Some(e.to_string());
            }
        }

        Ok(())
    }

    /// Submit the email verification code.
    ///
    /// Requires a pending email from a prior signup; without one the flow
    /// sets the error immediately and never touches the gateway.
    ///
    /// # Errors
    ///
    /// Returns the field-error map when the code fails local validation.
    #[instrument(skip(self, code))]
    pub async fn submit_verification(&mut self, code: &str) -> Result<(), FormValidation> {
        let validation = validate_verification_form(code);
        if !validation.is_valid() {
            return Err(validation);
        }

        let Some(email) = self.state.pending_email.clone() else {
            self.state.error = Some(NO_REGISTRATION_ERROR.to_string());
            return Ok(());
        };

        self.state.loading = true;
        self.state.error = None;
        let result = self.gateway.verify_email(&email, code.trim()).await;
        self.state.loading = false;

        match result {
            Ok(response) => {
                info!(email = %email, "Email verified");
                self.enter_authenticated(&response);
            }
            Err(e) => {
                self.state.error = Some(e.to_string());
            }
        }

        Ok(())
    }

    /// Resume a verification started earlier: jump to the verify page
    /// with `email` as the pending verification target.
    ///
    /// Used by shells that cannot keep the flow alive between signup and
    /// verification (a new process per command).
    pub fn resume_verification(&mut self, email: &str) {
        self.state.page = AuthPage::Verify;
        self.state.pending_email = Some(email.to_owned());
        self.state.error = None;
    }

    /// Log out: clear the session token and return to the login page.
    pub fn logout(&mut self) {
        if let Err(e) = self.session.set_token(None) {
            warn!("Failed to clear session token: {e}");
        }
        self.state = AuthState::default();
    }

    /// Apply a successful login or verification response.
    fn enter_authenticated(&mut self, response: &AuthResponse) {
        if let Some(token) = &response.token {
            if let Err(e) = self.session.set_token(Some(SecretString::from(token.clone()))) {
                // Memory-backed session only; the login itself stands.
                warn!("Failed to persist session token: {e}");
            }
        }

        self.state.authenticated = true;
        self.state.role = response.role.unwrap_or_default();
        self.state.page = AuthPage::Login;
        self.state.pending_email = None;
        self.state.error = None;
    }
}
