use awesome_core::{ApiError, ErrorBody};
use awesome_models::{RegisterUserRequest, User};
use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use tracing::instrument;

use super::service::UserService;
use crate::state::AppState;
use crate::utils::cookie::session_cookie;
use crate::validator::Payload;

/// Register a new user and sign them in
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterUserRequest,
    responses(
        (status = 200, description = "User registered; session cookie set", body = User),
        (status = 400, description = "Invalid field or email already in use", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn register_user(
    State(state): State<AppState>,
    jar: CookieJar,
    Payload(dto): Payload<RegisterUserRequest>,
) -> Result<(CookieJar, Json<User>), ApiError> {
    let session = UserService::register(&state, dto).await?;
    let jar = jar.add(session_cookie(&state.session_config, session.token));

    Ok((jar, Json(session.user)))
}
