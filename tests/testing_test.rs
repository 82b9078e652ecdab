//! Integration tests for the test-kickoff lookup.

mod helpers;

use helpers::TestApp;
use http::StatusCode;

#[tokio::test]
async fn test_start_test_returns_display_projection() {
    let app = TestApp::new().await;
    let cookie = app
        .register(&TestApp::unique_username("coach"), "pw123")
        .await;

    let org = app.create_organization(&cookie, "Wildcats").await;
    let org_id = org.get("id").unwrap().as_str().unwrap();
    let player = app.create_player(&cookie, "Jordan Ellis", org_id).await;
    let player_id = player.get("id").unwrap().as_str().unwrap();

    let response = app
        .request(
            "POST",
            "/testing/start",
            Some(serde_json::json!({ "playerId": player_id })),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);

    let projection = response.body.get("player").unwrap();
    assert_eq!(projection.get("id").unwrap().as_str().unwrap(), player_id);
    assert_eq!(
        projection.get("name").unwrap().as_str().unwrap(),
        "Jordan Ellis"
    );
    assert_eq!(
        projection.get("dob").unwrap().as_str().unwrap(),
        "2004-09-14"
    );
    assert_eq!(
        projection
            .get("organizationName")
            .unwrap()
            .as_str()
            .unwrap(),
        "Wildcats"
    );
}

#[tokio::test]
async fn test_start_test_for_foreign_player_is_not_found() {
    let app = TestApp::new().await;
    let coach1 = app
        .register(&TestApp::unique_username("coach1"), "pw123")
        .await;
    let coach2 = app
        .register(&TestApp::unique_username("coach2"), "pw123")
        .await;

    let org = app.create_organization(&coach1, "Wildcats").await;
    let org_id = org.get("id").unwrap().as_str().unwrap();
    let player = app.create_player(&coach1, "Jordan Ellis", org_id).await;
    let player_id = player.get("id").unwrap().as_str().unwrap();

    let response = app
        .request(
            "POST",
            "/testing/start",
            Some(serde_json::json!({ "playerId": player_id })),
            Some(&coach2),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_start_test_requires_session() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/testing/start",
            Some(serde_json::json!({ "playerId": uuid::Uuid::new_v4().to_string() })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
