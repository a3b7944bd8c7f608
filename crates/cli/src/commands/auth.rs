//! Authentication commands: login, signup, verify, logout, whoami.

use tracing::{info, warn};

use greenmind_app::AuthFlow;
use greenmind_core::validation::form::{LoginForm, SignupForm};

use super::{CliError, context};

/// Log in and persist the session token.
pub async fn login(email: &str, password: &str) -> Result<(), CliError> {
    let (client, session) = context()?;
    let mut flow = AuthFlow::new(client, session);

    let form = LoginForm {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    flow.submit_login(&form).await?;

    let state = flow.state();
    if state.authenticated {
        info!("Logged in as {email} ({})", state.role);
        Ok(())
    } else {
        Err(CliError::Auth(flow_error(state.error.as_deref())))
    }
}

/// Register a new account; the backend emails a verification code.
pub async fn signup(
    name: &str,
    surname: Option<&str>,
    address: Option<&str>,
    email: &str,
    password: &str,
) -> Result<(), CliError> {
    let (client, session) = context()?;
    let mut flow = AuthFlow::new(client, session);
    flow.switch_to_signup();

    let form = SignupForm {
        name: name.to_owned(),
        surname: surname.unwrap_or_default().to_owned(),
        address: address.unwrap_or_default().to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        // There is no retyping step on the command line.
        confirm_password: password.to_owned(),
    };
    flow.submit_signup(&form).await?;

    let state = flow.state();
    match &state.pending_email {
        Some(pending) => {
            info!("Account created. A verification code was sent to {pending}.");
            info!("Confirm with: gm-cli verify -e {pending} -c <code>");
            Ok(())
        }
        None => Err(CliError::Auth(flow_error(state.error.as_deref()))),
    }
}

/// Confirm an email address with the verification code.
pub async fn verify(email: &str, code: &str) -> Result<(), CliError> {
    let (client, session) = context()?;
    let mut flow = AuthFlow::new(client, session);
    flow.resume_verification(email);

    flow.submit_verification(code).await?;

    let state = flow.state();
    if state.authenticated {
        info!("Email verified. Logged in as {email} ({})", state.role);
        Ok(())
    } else {
        Err(CliError::Auth(flow_error(state.error.as_deref())))
    }
}

/// Clear the stored session.
pub fn logout() -> Result<(), CliError> {
    let (client, session) = context()?;
    let mut flow = AuthFlow::new(client, session);
    flow.logout();
    info!("Logged out");
    Ok(())
}

/// Show the current session and, when authenticated, the profile.
pub async fn whoami() -> Result<(), CliError> {
    let (client, session) = context()?;

    if !session.is_authenticated() {
        warn!("No active session. Log in with: gm-cli login -e <email> -p <password>");
        return Ok(());
    }

    let profile = client.profile().await?;
    info!(
        "{} <{}> - {} pts, level {}, {} kg CO2 reduced",
        profile.name, profile.email, profile.points, profile.level, profile.co2_reduced
    );
    Ok(())
}

fn flow_error(error: Option<&str>) -> String {
    error.unwrap_or("Authentication failed").to_owned()
}
