use std::sync::Arc;

use awesome_auth::TokenCodec;
use awesome_config::{CorsConfig, SessionConfig};
use awesome_core::{Clock, SystemClock};
use awesome_db::{BlogRepository, PgPool, PgStore, UserRepository};

use crate::middleware::session::SessionAuthenticator;

/// Shared, read-only application state.
///
/// Configuration is fixed at startup; repositories and the clock are trait
/// objects so tests can swap in the in-memory store and a fixed clock.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub blogs: Arc<dyn BlogRepository>,
    pub clock: Arc<dyn Clock>,
    pub session_config: SessionConfig,
    pub cors_config: CorsConfig,
    pub codec: TokenCodec,
    pub authenticator: SessionAuthenticator,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        blogs: Arc<dyn BlogRepository>,
        clock: Arc<dyn Clock>,
        session_config: SessionConfig,
        cors_config: CorsConfig,
    ) -> Self {
        let codec = TokenCodec::from_config(&session_config);
        let authenticator = SessionAuthenticator::new(codec.clone(), users.clone());

        Self {
            users,
            blogs,
            clock,
            session_config,
            cors_config,
            codec,
            authenticator,
        }
    }
}

pub fn init_app_state(pool: PgPool) -> AppState {
    let store = Arc::new(PgStore::new(pool));

    AppState::new(
        store.clone(),
        store,
        Arc::new(SystemClock),
        SessionConfig::from_env(),
        CorsConfig::from_env(),
    )
}
