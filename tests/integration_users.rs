mod common;

use std::sync::Arc;

use async_trait::async_trait;
use awesome_auth::{client_digest, sha1_hex};
use awesome_db::{InMemoryStore, UserRepository};
use awesome_models::User;
use axum::http::StatusCode;
use common::{NOW, setup, setup_with_users};
use serde_json::json;

/// Hides existing emails from lookups, as a concurrent registration would.
struct RacingUsers(Arc<InMemoryStore>);

#[async_trait]
impl UserRepository for RacingUsers {
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<User>> {
        self.0.find_by_id(id).await
    }

    async fn find_by_email(&self, _email: &str) -> anyhow::Result<Vec<User>> {
        Ok(Vec::new())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        self.0.save(user).await
    }
}

#[tokio::test]
async fn test_register_success() {
    let app = setup();
    let digest = client_digest("ann@example.com", "secret");

    let res = app
        .post_json(
            "/api/users",
            json!({ "name": "  Ann  ", "email": "ann@example.com", "passwd": digest }),
            None,
        )
        .await;

    assert_eq!(res.status, StatusCode::OK, "body: {}", res.body);
    assert_eq!(res.body["passwd"], "********");
    assert_eq!(res.body["name"], "Ann");
    assert_eq!(res.body["admin"], false);

    let users = app.store.users().await;
    assert_eq!(users.len(), 1);
    let stored = &users[0];
    assert_eq!(res.body["id"], stored.id.as_str());
    assert_eq!(stored.passwd, sha1_hex(&format!("{}:{}", stored.id, digest)));
    assert!(stored.image.starts_with("http://www.gravatar.com/avatar/"));
    assert_eq!(stored.created_at, NOW as f64);

    let cookie = res.session_cookie().expect("session cookie");
    let principal = app.state.authenticator.resolve(cookie.value(), NOW).await;
    assert_eq!(principal.user().map(|u| u.id.as_str()), Some(stored.id.as_str()));
}

#[tokio::test]
async fn test_registered_user_can_sign_in() {
    let app = setup();
    let digest = client_digest("ann@example.com", "secret");

    app.post_json(
        "/api/users",
        json!({ "name": "Ann", "email": "ann@example.com", "passwd": digest }),
        None,
    )
    .await;

    let res = app
        .post_json(
            "/api/authenticate",
            json!({ "email": "ann@example.com", "passwd": digest }),
            None,
        )
        .await;
    assert_eq!(res.status, StatusCode::OK, "body: {}", res.body);
}

#[tokio::test]
async fn test_register_invalid_email_persists_nothing() {
    let app = setup();

    for email in ["", "not-an-email", "Ann@Example.com", "ann@localhost"] {
        let res = app
            .post_json(
                "/api/users",
                json!({ "name": "Ann", "email": email, "passwd": sha1_hex("x") }),
                None,
            )
            .await;
        res.assert_error(StatusCode::BAD_REQUEST, "value:invalid", "email");
        assert!(res.session_cookie().is_none());
    }

    assert!(app.store.users().await.is_empty());
}

#[tokio::test]
async fn test_register_rejects_undigested_password() {
    let app = setup();

    let digest = sha1_hex("x");
    let candidates = [
        String::new(),
        "secret".to_string(),
        digest.to_uppercase(),
        digest[..39].to_string(),
    ];

    for passwd in candidates {
        let res = app
            .post_json(
                "/api/users",
                json!({ "name": "Ann", "email": "ann@example.com", "passwd": passwd }),
                None,
            )
            .await;
        res.assert_error(StatusCode::BAD_REQUEST, "value:invalid", "passwd");
    }

    assert!(app.store.users().await.is_empty());
}

#[tokio::test]
async fn test_register_blank_name_checked_first() {
    let app = setup();

    let res = app
        .post_json(
            "/api/users",
            json!({ "name": "   ", "email": "bad", "passwd": "bad" }),
            None,
        )
        .await;

    res.assert_error(StatusCode::BAD_REQUEST, "value:invalid", "name");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = setup();
    app.seed_user("Ann", "ann@example.com", "secret", false).await;

    let res = app
        .post_json(
            "/api/users",
            json!({ "name": "Other", "email": "ann@example.com", "passwd": sha1_hex("y") }),
            None,
        )
        .await;

    res.assert_error(StatusCode::BAD_REQUEST, "register:failed", "email");
    assert_eq!(res.body["message"], "Email is already in use.");
    assert_eq!(app.store.users().await.len(), 1);
}

#[tokio::test]
async fn test_register_duplicate_email_lost_race() {
    let app = setup_with_users(|store| Arc::new(RacingUsers(store)) as Arc<dyn UserRepository>);
    app.seed_user("Ann", "ann@example.com", "secret", false).await;

    let res = app
        .post_json(
            "/api/users",
            json!({ "name": "Other", "email": "ann@example.com", "passwd": sha1_hex("y") }),
            None,
        )
        .await;

    res.assert_error(StatusCode::BAD_REQUEST, "register:failed", "email");
    assert_eq!(res.body["message"], "Email is already in use.");
    assert!(res.session_cookie().is_none());
    assert_eq!(app.store.users().await.len(), 1);
}
