use awesome_config::SessionConfig;
use axum_extra::extract::cookie::Cookie;
use cookie::time::Duration;

/// Value written over the session cookie on sign-out.
pub const DELETED_COOKIE_VALUE: &str = "-deleted-";

/// Session cookie carrying `token`, valid for the configured TTL.
pub fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .max_age(Duration::seconds(config.ttl_seconds))
        .build()
}

/// Overwrites the session cookie with a sentinel that expires immediately.
pub fn cleared_session_cookie(config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), DELETED_COOKIE_VALUE))
        .path("/")
        .http_only(true)
        .max_age(Duration::ZERO)
        .build()
}
