//! Admin user management commands.

use clap::Args;
use tracing::{info, warn};

use greenmind_app::UserAdmin;

use super::{CliError, context};

/// User record fields, shared by create and update.
#[derive(Args)]
pub struct UserFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

/// List all users.
pub async fn list() -> Result<(), CliError> {
    let (client, _session) = context()?;
    let admin = UserAdmin::new(client);

    let users = admin.reload().await?;
    info!("{} user(s)", users.len());
    for user in &users {
        info!(
            "  #{} {} <{}> - {} pts, {} kg CO2",
            user.id, user.name, user.email, user.points, user.co2_reduced
        );
    }
    Ok(())
}

/// Create a user record; name and email are both required.
pub async fn create(fields: UserFields) -> Result<(), CliError> {
    let name = fields.name.ok_or(CliError::MissingField("name"))?;
    let email = fields.email.ok_or(CliError::MissingField("email"))?;

    let (client, _session) = context()?;
    let mut admin = UserAdmin::new(client);
    admin.form_mut().name = name;
    admin.form_mut().email = email;
    admin.submit().await?;

    info!("User created");
    Ok(())
}

/// Update a user record; missing fields keep their current value.
pub async fn update(id: i64, fields: UserFields) -> Result<(), CliError> {
    let (client, _session) = context()?;
    let mut admin = UserAdmin::new(client);

    let users = admin.reload().await?;
    let existing = users
        .iter()
        .find(|u| u.id == id)
        .ok_or(CliError::UserNotFound(id))?;
    admin.start_edit(existing);

    if let Some(name) = fields.name {
        admin.form_mut().name = name;
    }
    if let Some(email) = fields.email {
        admin.form_mut().email = email;
    }
    admin.submit().await?;

    info!("Updated user {id}");
    Ok(())
}

/// Delete a user record. Refuses to touch the backend without `--yes`.
pub async fn delete(id: i64, yes: bool) -> Result<(), CliError> {
    let (client, _session) = context()?;
    let mut admin = UserAdmin::new(client);
    admin.request_delete(id);

    if !yes {
        admin.cancel_delete();
        warn!("Not deleting user {id}; pass --yes to confirm");
        return Ok(());
    }

    admin.confirm_delete().await?;
    info!("Deleted user {id}");
    Ok(())
}
