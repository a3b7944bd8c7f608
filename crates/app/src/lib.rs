//! GreenMind App - Controllers above the API client.
//!
//! Three controllers own all mutable UI state:
//!
//! - [`auth::AuthFlow`] - the login / signup / verify state machine that
//!   hands off to the authenticated shell
//! - [`content::ContentAdmin`] - admin create/edit/delete cycle over the
//!   three content kinds (missions, quizzes, tips)
//! - [`users::UserAdmin`] - the same cycle specialised to user records
//!
//! Controllers talk to the backend through the narrow traits in
//! [`gateway`], implemented by [`greenmind_client::ApiClient`] and by
//! in-memory stubs in tests. State is owned by the controller and read by
//! the rendering shell; there are no ambient singletons beyond the
//! session store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod content;
pub mod gateway;
pub mod users;

pub use auth::{AuthFlow, AuthPage, AuthState};
pub use content::{ContentAdmin, ContentForm, ContentItem, ContentList};
pub use gateway::{AuthGateway, ContentGateway, UserGateway};
pub use users::UserAdmin;

use thiserror::Error;

/// Errors surfaced by the admin controllers.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The backend rejected the operation or the request failed.
    #[error(transparent)]
    Api(#[from] greenmind_client::ApiError),

    /// `confirm_delete` was called with no deletion awaiting confirmation.
    #[error("no deletion pending confirmation")]
    NoPendingDelete,
}
