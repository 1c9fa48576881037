use awesome_auth::verify_credential;
use awesome_core::{ApiError, Clock};
use awesome_models::{AuthenticateRequest, User};
use tracing::{info, instrument, warn};

use crate::metrics::{track_login_failure, track_login_success, track_session_issued};
use crate::state::AppState;

/// A freshly minted session: the redacted user and the cookie value.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub user: User,
    pub token: String,
}

pub struct AuthService;

impl AuthService {
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn authenticate(
        state: &AppState,
        dto: AuthenticateRequest,
    ) -> Result<IssuedSession, ApiError> {
        if dto.email.is_empty() {
            return Err(ApiError::invalid_value("email", "Invalid email."));
        }
        if dto.passwd.is_empty() {
            return Err(ApiError::invalid_value("passwd", "Invalid password."));
        }

        let Some(user) = state.users.find_by_email(&dto.email).await?.into_iter().next() else {
            warn!("Login attempt for unknown email");
            track_login_failure("unknown_email");
            return Err(ApiError::invalid_value("email", "Email not exist."));
        };

        if !verify_credential(&user.id, &dto.passwd, &user.passwd) {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            track_login_failure("invalid_password");
            return Err(ApiError::invalid_value("passwd", "Invalid password."));
        }

        track_login_success();
        info!(user_id = %user.id, "User signed in");

        Ok(Self::issue_session(state, user))
    }

    /// Signs a session token for `user` and redacts its credential hash.
    pub fn issue_session(state: &AppState, user: User) -> IssuedSession {
        let token = state.codec.issue(&user.id, &user.passwd, state.clock.now());
        track_session_issued();

        IssuedSession {
            user: user.redacted(),
            token,
        }
    }
}
