//! Integration tests for registration, login, and session verification.

mod helpers;

use helpers::TestApp;
use http::StatusCode;

#[tokio::test]
async fn test_register_sets_session_cookie() {
    let app = TestApp::new().await;
    let username = TestApp::unique_username("coach");

    let response = app
        .request(
            "POST",
            "/users/register",
            Some(serde_json::json!({
                "username": username,
                "password": "pw123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(
        response.body.get("message").unwrap().as_str().unwrap(),
        "Registered and logged in"
    );

    let set_cookie = response
        .headers
        .get(http::header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::new().await;
    let username = TestApp::unique_username("coach");

    app.register(&username, "pw123").await;

    let response = app
        .request(
            "POST",
            "/users/register",
            Some(serde_json::json!({
                "username": username,
                "password": "other",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_succeeds_with_registered_credentials() {
    let app = TestApp::new().await;
    let username = TestApp::unique_username("coach");

    app.register(&username, "pw123").await;
    let cookie = app.login(&username, "pw123").await;
    assert!(!cookie.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_username_look_alike() {
    let app = TestApp::new().await;
    let username = TestApp::unique_username("coach");
    app.register(&username, "pw123").await;

    let wrong_password = app
        .request(
            "POST",
            "/users/login",
            Some(serde_json::json!({
                "username": username,
                "password": "wrong",
            })),
            None,
        )
        .await;

    let unknown_user = app
        .request(
            "POST",
            "/users/login",
            Some(serde_json::json!({
                "username": TestApp::unique_username("nobody"),
                "password": "pw123",
            })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_user.status, StatusCode::BAD_REQUEST);
    // No distinguishing signal between the two failure modes.
    assert_eq!(wrong_password.body, unknown_user.body);
}

#[tokio::test]
async fn test_check_auth_returns_bound_identity() {
    let app = TestApp::new().await;
    let username = TestApp::unique_username("coach");
    let cookie = app.register(&username, "pw123").await;

    let response = app
        .request("GET", "/users/check-auth", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("username").unwrap().as_str().unwrap(),
        username
    );
}

#[tokio::test]
async fn test_check_auth_without_cookie() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/users/check-auth", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_tampered_cookie_is_rejected() {
    let app = TestApp::new().await;
    let username = TestApp::unique_username("coach");
    let cookie = app.register(&username, "pw123").await;

    // Flip one byte of the token.
    let mut tampered = cookie.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let response = app
        .request("GET", "/users/check-auth", None, Some(&tampered))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new().await;
    let username = TestApp::unique_username("coach");
    let cookie = app.register(&username, "pw123").await;

    let response = app
        .request("POST", "/users/logout", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);

    let set_cookie = response
        .headers
        .get(http::header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    // Removal cookie: empty value, immediate expiry.
    assert!(set_cookie.starts_with("token="));
}

#[tokio::test]
async fn test_register_empty_fields_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/users/register",
            Some(serde_json::json!({
                "username": "",
                "password": "",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
