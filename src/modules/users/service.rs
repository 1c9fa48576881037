use awesome_auth::{credential_hash, is_sha1_hex};
use awesome_core::{ApiError, Clock};
use awesome_db::DuplicateEmail;
use awesome_models::{RegisterUserRequest, User, ids::next_id_at};
use tracing::{info, instrument};

use crate::metrics::track_user_registered;
use crate::modules::auth::service::{AuthService, IssuedSession};
use crate::state::AppState;
use crate::utils::gravatar::gravatar_url;
use crate::validator::{is_valid_email, require_non_blank};

pub const REGISTER_FAILED: &str = "register:failed";

/// Fields needed to create a user record.
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    pub id: String,
    pub name: &'a str,
    pub email: &'a str,
    /// `SHA1(email ":" password)`
    pub client_digest: &'a str,
    pub admin: bool,
    pub created_at: f64,
}

impl NewUser<'_> {
    /// Builds the stored record, salting the digest with the new id.
    pub fn into_user(self) -> User {
        User {
            passwd: credential_hash(&self.id, self.client_digest),
            image: gravatar_url(self.email),
            id: self.id,
            email: self.email.to_string(),
            admin: self.admin,
            name: self.name.trim().to_string(),
            created_at: self.created_at,
        }
    }
}

fn email_in_use() -> ApiError {
    ApiError::new(REGISTER_FAILED, "email", "Email is already in use.")
}

pub struct UserService;

impl UserService {
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn register(
        state: &AppState,
        dto: RegisterUserRequest,
    ) -> Result<IssuedSession, ApiError> {
        let name = require_non_blank("name", &dto.name, "")?;
        if !is_valid_email(&dto.email) {
            return Err(ApiError::invalid_value("email", ""));
        }
        if !is_sha1_hex(&dto.passwd) {
            return Err(ApiError::invalid_value("passwd", ""));
        }

        if !state.users.find_by_email(&dto.email).await?.is_empty() {
            return Err(email_in_use());
        }

        let user = NewUser {
            id: next_id_at(state.clock.now_millis()),
            name,
            email: &dto.email,
            client_digest: &dto.passwd,
            admin: false,
            created_at: state.clock.timestamp(),
        }
        .into_user();

        // A concurrent registration can pass the lookup above.
        state.users.save(&user).await.map_err(|err| {
            if err.is::<DuplicateEmail>() {
                email_in_use()
            } else {
                ApiError::from(err)
            }
        })?;

        track_user_registered();
        info!(user_id = %user.id, "User registered");

        Ok(AuthService::issue_session(state, user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awesome_auth::sha1_hex;

    #[test]
    fn test_new_user_salts_digest_with_id() {
        let digest = sha1_hex("ann@example.com:secret");
        let user = NewUser {
            id: "id1".to_string(),
            name: "  Ann ",
            email: "ann@example.com",
            client_digest: &digest,
            admin: false,
            created_at: 12.5,
        }
        .into_user();

        assert_eq!(user.passwd, sha1_hex(&format!("id1:{digest}")));
        assert_eq!(user.name, "Ann");
        assert!(user.image.starts_with("http://www.gravatar.com/avatar/"));
        assert!(!user.admin);
        assert_eq!(user.created_at, 12.5);
    }
}
