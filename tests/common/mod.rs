#![allow(dead_code)]

use std::sync::Arc;

use awesome::modules::users::service::NewUser;
use awesome::router::init_router;
use awesome::state::AppState;
use awesome_auth::client_digest;
use awesome_config::{CorsConfig, SessionConfig};
use awesome_core::{Clock, FixedClock};
use awesome_db::{InMemoryStore, UserRepository};
use awesome_models::{User, ids::next_id_at};
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// 2023-11-14T22:13:20Z
pub const NOW: i64 = 1_700_000_000;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<FixedClock>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// Value of the session cookie set by this response, if any.
    pub fn session_cookie(&self) -> Option<cookie::Cookie<'static>> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(|value| cookie::Cookie::parse(value.to_owned()).ok())
            .find(|c| c.name() == "awesession")
    }

    pub fn assert_error(&self, status: StatusCode, error: &str, data: &str) {
        assert_eq!(self.status, status, "body: {}", self.body);
        assert_eq!(self.body["error"], error, "body: {}", self.body);
        assert_eq!(self.body["data"], data, "body: {}", self.body);
    }
}

pub fn setup() -> TestApp {
    setup_with_users(|store| store as Arc<dyn UserRepository>)
}

/// Like [`setup`], but the app reads users through `wrap(store)`.
pub fn setup_with_users(
    wrap: impl FnOnce(Arc<InMemoryStore>) -> Arc<dyn UserRepository>,
) -> TestApp {
    let store = Arc::new(InMemoryStore::new());
    let clock = Arc::new(FixedClock::at(NOW));

    let state = AppState::new(
        wrap(store.clone()),
        store.clone(),
        clock.clone(),
        SessionConfig::default(),
        CorsConfig::from_lookup(|_| None),
    );

    TestApp {
        router: init_router(state.clone(), None),
        state,
        store,
        clock,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn post_json(&self, uri: &str, body: Value, cookie: Option<&str>) -> TestResponse {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, format!("awesession={cookie}"));
        }

        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    /// Stores a user whose browser-side digest is `SHA1(email:password)`.
    pub async fn seed_user(&self, name: &str, email: &str, password: &str, admin: bool) -> User {
        let digest = client_digest(email, password);
        let user = NewUser {
            id: next_id_at(self.clock.now_millis()),
            name,
            email,
            client_digest: &digest,
            admin,
            created_at: NOW as f64,
        }
        .into_user();

        self.store.save(&user).await.unwrap();
        user
    }

    /// A valid cookie value for `user` issued at the current clock time.
    pub fn cookie_for(&self, user: &User) -> String {
        self.state
            .codec
            .issue(&user.id, &user.passwd, self.clock.now())
    }
}
