use awesome_core::{ApiError, ErrorBody};
use awesome_models::{AuthenticateRequest, User};
use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum_extra::extract::cookie::CookieJar;
use tracing::{info, instrument};

use super::service::AuthService;
use crate::state::AppState;
use crate::utils::cookie::{cleared_session_cookie, session_cookie};
use crate::validator::Payload;

/// Sign in with email and client-side password digest
#[utoipa::path(
    post,
    path = "/api/authenticate",
    request_body = AuthenticateRequest,
    responses(
        (status = 200, description = "Signed in; session cookie set", body = User),
        (status = 400, description = "Missing field, unknown email or wrong password", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn authenticate(
    State(state): State<AppState>,
    jar: CookieJar,
    Payload(dto): Payload<AuthenticateRequest>,
) -> Result<(CookieJar, Json<User>), ApiError> {
    let session = AuthService::authenticate(&state, dto).await?;
    let jar = jar.add(session_cookie(&state.session_config, session.token));

    Ok((jar, Json(session.user)))
}

/// Clear the session cookie and go back to the referring page
#[utoipa::path(
    get,
    path = "/signout",
    responses(
        (status = 302, description = "Session cookie cleared")
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn signout(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> impl IntoResponse {
    let location = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .unwrap_or("/")
        .to_string();

    info!("User signed out");

    (
        StatusCode::FOUND,
        jar.add(cleared_session_cookie(&state.session_config)),
        [(header::LOCATION, location)],
    )
}
