//! Route definitions for the Sideline HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state);

    Router::new()
        .merge(user_routes())
        .merge(organization_routes())
        .merge(player_routes())
        .merge(testing_routes())
        .merge(health_routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Account endpoints: register, login, check-auth, logout
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/register", post(handlers::account::register))
        .route("/users/login", post(handlers::account::login))
        .route("/users/check-auth", get(handlers::account::check_auth))
        .route("/users/logout", post(handlers::account::logout))
}

/// Organization create and list
fn organization_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/organizations",
            post(handlers::organization::create_organization),
        )
        .route(
            "/organizations",
            get(handlers::organization::list_organizations),
        )
}

/// Player create, list, update
fn player_routes() -> Router<AppState> {
    Router::new()
        .route("/players", post(handlers::player::create_player))
        .route("/players", get(handlers::player::list_players))
        .route("/players/{id}", put(handlers::player::update_player))
}

/// Test kickoff
fn testing_routes() -> Router<AppState> {
    Router::new().route("/testing/start", post(handlers::testing::start_test))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build CORS layer from configuration.
///
/// Cookies require explicit origins; a wildcard cannot be combined with
/// credentials.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method, header};

    let cors_config = &state.config.server.cors;

    let origins: Vec<HeaderValue> = cors_config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(cors_config.allow_credentials)
        .max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
