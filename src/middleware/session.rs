//! Cookie session authentication.
//!
//! [`session_middleware`] runs on every request. It resolves the session
//! cookie to a [`Principal`] and stores it in the request extensions, where
//! handlers pick it up with the [`CurrentUser`] extractor.
//!
//! Authentication never fails a request: a missing, malformed, expired or
//! forged cookie simply yields [`Principal::Anonymous`]. Whether anonymity is
//! acceptable is decided later by [`require_admin`](super::role::require_admin)
//! or the handler itself.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use awesome_auth::{TokenCodec, decode};
use awesome_core::Clock;
use awesome_db::UserRepository;
use awesome_models::User;
use tracing::{debug, error, info};

use crate::metrics::track_session_resolution;
use crate::state::AppState;

/// The identity a request acts as.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Principal {
    /// A verified user. `passwd` is always redacted.
    Authenticated(User),
    #[default]
    Anonymous,
}

impl Principal {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|user| user.admin)
    }
}

/// Resolves session cookie values against the user store.
#[derive(Clone)]
pub struct SessionAuthenticator {
    codec: TokenCodec,
    users: Arc<dyn UserRepository>,
}

impl SessionAuthenticator {
    pub fn new(codec: TokenCodec, users: Arc<dyn UserRepository>) -> Self {
        Self { codec, users }
    }

    /// Resolves a raw cookie value at time `now` (epoch seconds).
    ///
    /// Checks run in order and stop at the first failure: empty value,
    /// token shape, expiry, user lookup, then signature against the user's
    /// current credential hash.
    pub async fn resolve(&self, cookie: &str, now: i64) -> Principal {
        if cookie.is_empty() {
            track_session_resolution("anonymous");
            return Principal::Anonymous;
        }

        let token = match decode(cookie) {
            Ok(token) => token,
            Err(err) => {
                debug!(error = %err, "Malformed session cookie");
                track_session_resolution("malformed");
                return Principal::Anonymous;
            }
        };

        if token.is_expired(now) {
            debug!(user_id = %token.user_id, expires_at = token.expires_at, "Session expired");
            track_session_resolution("expired");
            return Principal::Anonymous;
        }

        let user = match self.users.find_by_id(&token.user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                debug!(user_id = %token.user_id, "Session names an unknown user");
                track_session_resolution("unknown_user");
                return Principal::Anonymous;
            }
            Err(err) => {
                error!(error = ?err, user_id = %token.user_id, "Session user lookup failed");
                track_session_resolution("lookup_error");
                return Principal::Anonymous;
            }
        };

        if !self.codec.verify(&token, &user.passwd) {
            info!(user_id = %token.user_id, "Invalid session signature");
            track_session_resolution("bad_signature");
            return Principal::Anonymous;
        }

        track_session_resolution("authenticated");
        Principal::Authenticated(user.redacted())
    }
}

/// Attaches the resolved [`Principal`] to every request.
pub async fn session_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let cookie = jar
        .get(&state.session_config.cookie_name)
        .map(|c| c.value().to_owned())
        .unwrap_or_default();

    let principal = state
        .authenticator
        .resolve(&cookie, state.clock.now())
        .await;

    if let Some(user) = principal.user() {
        debug!(user_id = %user.id, email = %user.email, "Set current user");
    }

    req.extensions_mut().insert(principal);
    next.run(req).await
}

/// Extractor for the request's [`Principal`].
///
/// Falls back to [`Principal::Anonymous`] on routes outside the session
/// middleware.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Principal);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(
            parts
                .extensions
                .get::<Principal>()
                .cloned()
                .unwrap_or_default(),
        ))
    }
}
