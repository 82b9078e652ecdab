//! Shared test helpers for integration tests.
//!
//! Every test registers its own uniquely named trainers; ownership scoping
//! keeps test data isolated without cleaning the database between runs.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use sideline_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db_pool = sideline_database::connection::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database")
            .into_pool();

        sideline_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let trainer_repo = Arc::new(
            sideline_database::repositories::trainer::TrainerRepository::new(db_pool.clone()),
        );
        let organization_repo = Arc::new(
            sideline_database::repositories::organization::OrganizationRepository::new(
                db_pool.clone(),
            ),
        );
        let player_repo = Arc::new(
            sideline_database::repositories::player::PlayerRepository::new(db_pool.clone()),
        );

        let password_hasher = Arc::new(sideline_auth::password::PasswordHasher::new());
        let token_encoder = Arc::new(sideline_auth::token::TokenEncoder::new(&config.auth));
        let token_decoder = Arc::new(sideline_auth::token::TokenDecoder::new(&config.auth));

        let account_service = Arc::new(sideline_service::account::AccountService::new(
            Arc::clone(&trainer_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_encoder),
        ));
        let organization_service = Arc::new(
            sideline_service::organization::OrganizationService::new(Arc::clone(
                &organization_repo,
            )),
        );
        let player_service = Arc::new(sideline_service::player::PlayerService::new(
            Arc::clone(&player_repo),
            Arc::clone(&organization_repo),
        ));
        let testing_service = Arc::new(sideline_service::testing::TestingService::new(
            Arc::clone(&player_repo),
            Arc::clone(&organization_repo),
        ));

        let app_state = sideline_api::state::AppState {
            config: Arc::new(config.clone()),
            db_pool: db_pool.clone(),
            token_encoder,
            token_decoder,
            password_hasher,
            trainer_repo,
            organization_repo,
            player_repo,
            account_service,
            organization_service,
            player_service,
            testing_service,
        };

        let router = sideline_api::router::build_router(app_state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Generate a unique username so tests never collide.
    pub fn unique_username(prefix: &str) -> String {
        format!("{}-{}", prefix, Uuid::new_v4())
    }

    /// Register a trainer and return the session cookie value.
    pub async fn register(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/users/register",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Register failed: {:?}",
            response.body
        );

        response.session_cookie().expect("No session cookie set")
    }

    /// Login and return the session cookie value.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/users/login",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.session_cookie().expect("No session cookie set")
    }

    /// Create an organization and return its JSON record.
    pub async fn create_organization(&self, cookie: &str, name: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/organizations",
                Some(serde_json::json!({ "name": name })),
                Some(cookie),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create organization failed: {:?}",
            response.body
        );

        response.body
    }

    /// Create a player and return its JSON record.
    pub async fn create_player(&self, cookie: &str, name: &str, organization_id: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/players",
                Some(serde_json::json!({
                    "name": name,
                    "dob": "2004-09-14",
                    "organizationId": organization_id,
                })),
                Some(cookie),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create player failed: {:?}",
            response.body
        );

        response.body
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        session_cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(cookie) = session_cookie {
            req = req.header(header::COOKIE, format!("token={}", cookie));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Extract the `token` session cookie value from Set-Cookie, if present.
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with("token="))
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim_start_matches("token=").to_string())
    }
}
