//! Integration tests for organization create/list with ownership scoping.

mod helpers;

use helpers::TestApp;
use http::StatusCode;

#[tokio::test]
async fn test_created_organization_visible_only_to_owner() {
    let app = TestApp::new().await;
    let coach1 = app
        .register(&TestApp::unique_username("coach1"), "pw123")
        .await;
    let coach2 = app
        .register(&TestApp::unique_username("coach2"), "pw123")
        .await;

    let org = app.create_organization(&coach1, "Wildcats").await;
    let org_id = org.get("id").unwrap().as_str().unwrap();

    let coach1_list = app
        .request("GET", "/organizations", None, Some(&coach1))
        .await;
    assert_eq!(coach1_list.status, StatusCode::OK);
    let coach1_orgs = coach1_list.body.as_array().unwrap();
    assert!(
        coach1_orgs
            .iter()
            .any(|o| o.get("id").unwrap().as_str().unwrap() == org_id)
    );

    let coach2_list = app
        .request("GET", "/organizations", None, Some(&coach2))
        .await;
    assert_eq!(coach2_list.status, StatusCode::OK);
    let coach2_orgs = coach2_list.body.as_array().unwrap();
    assert!(
        !coach2_orgs
            .iter()
            .any(|o| o.get("id").unwrap().as_str().unwrap() == org_id)
    );
}

#[tokio::test]
async fn test_create_organization_empty_name() {
    let app = TestApp::new().await;
    let cookie = app
        .register(&TestApp::unique_username("coach"), "pw123")
        .await;

    let response = app
        .request(
            "POST",
            "/organizations",
            Some(serde_json::json!({ "name": "" })),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_organizations_require_session() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/organizations", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "POST",
            "/organizations",
            Some(serde_json::json!({ "name": "Wildcats" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
