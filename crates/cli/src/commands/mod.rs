//! CLI command implementations.

pub mod auth;
pub mod content;
pub mod users;

use thiserror::Error;

use greenmind_app::AdminError;
use greenmind_client::{ApiClient, ApiError, ClientConfig, ConfigError, SessionStore};
use greenmind_core::ContentKind;
use greenmind_core::validation::form::FormValidation;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Admin(#[from] AdminError),

    /// The auth flow rejected the submission (bad credentials, failed
    /// verification, missing registration).
    #[error("{0}")]
    Auth(String),

    /// Local form validation failed; lists the failing fields.
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("no {kind} item with id {id}")]
    NotFound { kind: ContentKind, id: i64 },

    #[error("no user with id {0}")]
    UserNotFound(i64),

    #[error("field values are for {given}, but {expected} was requested")]
    KindMismatch {
        given: ContentKind,
        expected: ContentKind,
    },

    #[error("missing required field: --{0}")]
    MissingField(&'static str),
}

impl From<FormValidation> for CliError {
    fn from(validation: FormValidation) -> Self {
        let fields = validation
            .errors()
            .iter()
            .map(|(form_field, error)| format!("{form_field}: {error}"))
            .collect::<Vec<_>>()
            .join("; ");
        Self::Validation(fields)
    }
}

/// Build the client and session store from the environment.
pub fn context() -> Result<(ApiClient, SessionStore), CliError> {
    let config = ClientConfig::from_env()?;
    let session = SessionStore::new(&config.session_file);
    let client = ApiClient::new(&config, session.clone())?;
    Ok((client, session))
}
