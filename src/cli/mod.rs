use anyhow::{Context, bail};
use awesome_auth::client_digest;
use awesome_core::Clock;
use awesome_db::UserRepository;
use awesome_models::{User, ids::next_id_at};
use tracing::info;

use crate::modules::users::service::NewUser;
use crate::validator::is_valid_email;

/// Creates an admin account directly in the store.
///
/// The password is digested the way the browser client does before the
/// usual registration hash is applied, so the account can sign in through
/// `/api/authenticate`.
pub async fn create_admin(
    users: &dyn UserRepository,
    clock: &dyn Clock,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<User> {
    if name.trim().is_empty() {
        bail!("Name cannot be empty");
    }
    if !is_valid_email(email) {
        bail!("Invalid email: {}", email);
    }
    if password.is_empty() {
        bail!("Password cannot be empty");
    }

    let existing = users
        .find_by_email(email)
        .await
        .context("Failed to look up existing users")?;
    if !existing.is_empty() {
        bail!("User with this email already exists");
    }

    let digest = client_digest(email, password);
    let user = NewUser {
        id: next_id_at(clock.now_millis()),
        name,
        email,
        client_digest: &digest,
        admin: true,
        created_at: clock.timestamp(),
    }
    .into_user();

    users.save(&user).await.context("Failed to save admin user")?;
    info!(user_id = %user.id, "Admin user created");

    Ok(user.redacted())
}
