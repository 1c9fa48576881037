mod common;

use awesome_auth::client_digest;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{NOW, setup};
use serde_json::json;

#[tokio::test]
async fn test_authenticate_success_sets_cookie() {
    let app = setup();
    let user = app.seed_user("Ann", "ann@example.com", "secret", true).await;

    let res = app
        .post_json(
            "/api/authenticate",
            json!({ "email": "ann@example.com", "passwd": client_digest("ann@example.com", "secret") }),
            None,
        )
        .await;

    assert_eq!(res.status, StatusCode::OK, "body: {}", res.body);
    assert_eq!(res.body["id"], user.id.as_str());
    assert_eq!(res.body["passwd"], "********");
    assert_eq!(res.body["admin"], true);

    let cookie = res.session_cookie().expect("session cookie");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.max_age(), Some(cookie::time::Duration::seconds(86400)));

    let expected_prefix = format!("{}-{}-", user.id, NOW + 86400);
    assert!(cookie.value().starts_with(&expected_prefix));

    let principal = app.state.authenticator.resolve(cookie.value(), NOW).await;
    assert_eq!(principal.user().map(|u| u.id.as_str()), Some(user.id.as_str()));
}

#[tokio::test]
async fn test_authenticate_wrong_password() {
    let app = setup();
    app.seed_user("Ann", "ann@example.com", "secret", false).await;

    let res = app
        .post_json(
            "/api/authenticate",
            json!({ "email": "ann@example.com", "passwd": client_digest("ann@example.com", "wrong") }),
            None,
        )
        .await;

    res.assert_error(StatusCode::BAD_REQUEST, "value:invalid", "passwd");
    assert_eq!(res.body["message"], "Invalid password.");
    assert!(res.session_cookie().is_none());
}

#[tokio::test]
async fn test_authenticate_unknown_email() {
    let app = setup();

    let res = app
        .post_json(
            "/api/authenticate",
            json!({ "email": "ghost@example.com", "passwd": client_digest("ghost@example.com", "x") }),
            None,
        )
        .await;

    res.assert_error(StatusCode::BAD_REQUEST, "value:invalid", "email");
    assert_eq!(res.body["message"], "Email not exist.");
}

#[tokio::test]
async fn test_authenticate_empty_fields() {
    let app = setup();

    let res = app
        .post_json("/api/authenticate", json!({ "email": "", "passwd": "abc" }), None)
        .await;
    res.assert_error(StatusCode::BAD_REQUEST, "value:invalid", "email");

    let res = app
        .post_json("/api/authenticate", json!({ "email": "ann@example.com" }), None)
        .await;
    res.assert_error(StatusCode::BAD_REQUEST, "value:invalid", "passwd");
}

#[tokio::test]
async fn test_authenticate_accepts_form_body() {
    let app = setup();
    app.seed_user("Ann", "ann@example.com", "secret", false).await;
    let digest = client_digest("ann@example.com", "secret");

    let request = Request::builder()
        .method("POST")
        .uri("/api/authenticate")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("email=ann%40example.com&passwd={digest}")))
        .unwrap();
    let res = app.send(request).await;

    assert_eq!(res.status, StatusCode::OK, "body: {}", res.body);
    assert!(res.session_cookie().is_some());
}

#[tokio::test]
async fn test_authenticate_rejects_unsupported_body() {
    let app = setup();

    let request = Request::builder()
        .method("POST")
        .uri("/api/authenticate")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("email=a"))
        .unwrap();
    let res = app.send(request).await;
    res.assert_error(StatusCode::BAD_REQUEST, "request:invalid", "body");

    let request = Request::builder()
        .method("POST")
        .uri("/api/authenticate")
        .body(Body::from("{}"))
        .unwrap();
    let res = app.send(request).await;
    res.assert_error(StatusCode::BAD_REQUEST, "request:invalid", "body");
}

#[tokio::test]
async fn test_signout_redirects_to_referer_and_clears_cookie() {
    let app = setup();

    let request = Request::builder()
        .uri("/signout")
        .header(header::REFERER, "http://localhost:9000/blog/1")
        .body(Body::empty())
        .unwrap();
    let res = app.send(request).await;

    assert_eq!(res.status, StatusCode::FOUND);
    assert_eq!(res.headers[header::LOCATION], "http://localhost:9000/blog/1");

    let cookie = res.session_cookie().expect("cleared cookie");
    assert_eq!(cookie.value(), "-deleted-");
    assert_eq!(cookie.max_age(), Some(cookie::time::Duration::ZERO));
    assert_eq!(cookie.http_only(), Some(true));
}

#[tokio::test]
async fn test_signout_without_referer_goes_home() {
    let app = setup();

    let res = app.get("/signout").await;

    assert_eq!(res.status, StatusCode::FOUND);
    assert_eq!(res.headers[header::LOCATION], "/");
}
