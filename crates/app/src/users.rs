//! Admin user management: the content CRUD cycle specialised to user
//! records.
//!
//! The admin form only touches `{name, email}`; points, level, and CO2
//! figures stay server-owned. Same discipline as the content controller:
//! re-fetch after every mutation, confirm before delete.

use tracing::{error, info, instrument};

use greenmind_client::types::{User, UserDraft};

use crate::AdminError;
use crate::gateway::UserGateway;

/// Admin user CRUD controller.
pub struct UserAdmin<G> {
    gateway: G,
    editing_id: Option<i64>,
    form: UserDraft,
    reload_counter: u64,
    pending_delete: Option<i64>,
}

impl<G: UserGateway> UserAdmin<G> {
    /// Create a controller with an empty create form.
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            editing_id: None,
            form: UserDraft::default(),
            reload_counter: 0,
            pending_delete: None,
        }
    }

    /// Id of the user being edited, or `None` when creating.
    #[must_use]
    pub const fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    /// The current form values.
    #[must_use]
    pub const fn form(&self) -> &UserDraft {
        &self.form
    }

    /// Mutable access to the form for the shell to fill in.
    pub const fn form_mut(&mut self) -> &mut UserDraft {
        &mut self.form
    }

    /// Monotonic re-fetch signal: bumped after every successful mutation.
    #[must_use]
    pub const fn reload_counter(&self) -> u64 {
        self.reload_counter
    }

    /// The deletion awaiting confirmation, if any.
    #[must_use]
    pub const fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    /// Begin editing an existing user record.
    pub fn start_edit(&mut self, user: &User) {
        self.editing_id = Some(user.id);
        self.form = UserDraft::from(user);
    }

    /// Discard the in-progress edit, returning to an empty create form.
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.form = UserDraft::default();
    }

    /// Submit the form: update when an edit is in progress, create
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns the gateway error after logging it; form state is kept so
    /// the operator can retry.
    #[instrument(skip(self), fields(editing = ?self.editing_id))]
    pub async fn submit(&mut self) -> Result<(), AdminError> {
        let result = match self.editing_id {
            Some(id) => self.gateway.update_user(id, &self.form).await,
            None => self.gateway.create_user(&self.form).await,
        };

        match result {
            Ok(user) => {
                info!(email = %user.email, "User saved");
                self.cancel_edit();
                self.reload_counter += 1;
                Ok(())
            }
            Err(e) => {
                error!("Failed to save user: {e}");
                Err(e.into())
            }
        }
    }

    /// Record a deletion for confirmation. No network call happens until
    /// [`Self::confirm_delete`].
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    /// Drop the pending deletion without touching the gateway.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Execute the confirmed deletion and bump the reload counter.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NoPendingDelete`] when nothing awaits
    /// confirmation, or the gateway error after logging it.
    #[instrument(skip(self), fields(pending = ?self.pending_delete))]
    pub async fn confirm_delete(&mut self) -> Result<(), AdminError> {
        let id = self.pending_delete.take().ok_or(AdminError::NoPendingDelete)?;

        match self.gateway.delete_user(id).await {
            Ok(()) => {
                info!(id, "User deleted");
                self.reload_counter += 1;
                Ok(())
            }
            Err(e) => {
                error!(id, "Failed to delete user: {e}");
                Err(e.into())
            }
        }
    }

    /// Fetch the current user list.
    ///
    /// # Errors
    ///
    /// Returns the gateway error; the shell keeps showing the previous
    /// list in that case.
    #[instrument(skip(self))]
    pub async fn reload(&self) -> Result<Vec<User>, AdminError> {
        Ok(self.gateway.list_users().await?)
    }
}
