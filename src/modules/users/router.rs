use crate::modules::users::controller::register_user;
use crate::state::AppState;
use axum::{Router, routing::post};

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/", post(register_user))
}
