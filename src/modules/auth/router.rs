use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{authenticate, signout};

/// Mounted under `/api`.
pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/authenticate", post(authenticate))
}

/// Mounted at the root; browsers follow it from page links.
pub fn init_signout_router() -> Router<AppState> {
    Router::new().route("/signout", get(signout))
}
