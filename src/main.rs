//! Sideline Server — trainer-owned concussion record service
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use sideline_core::config::AppConfig;
use sideline_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("SIDELINE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Sideline v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = sideline_database::connection::DatabasePool::connect(&config.database)
        .await?
        .into_pool();

    sideline_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let trainer_repo = Arc::new(
        sideline_database::repositories::trainer::TrainerRepository::new(db_pool.clone()),
    );
    let organization_repo = Arc::new(
        sideline_database::repositories::organization::OrganizationRepository::new(db_pool.clone()),
    );
    let player_repo = Arc::new(
        sideline_database::repositories::player::PlayerRepository::new(db_pool.clone()),
    );

    // ── Step 3: Auth primitives ──────────────────────────────────
    let password_hasher = Arc::new(sideline_auth::password::PasswordHasher::new());
    let token_encoder = Arc::new(sideline_auth::token::TokenEncoder::new(&config.auth));
    let token_decoder = Arc::new(sideline_auth::token::TokenDecoder::new(&config.auth));

    // ── Step 4: Services ─────────────────────────────────────────
    let account_service = Arc::new(sideline_service::account::AccountService::new(
        Arc::clone(&trainer_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&token_encoder),
    ));
    let organization_service = Arc::new(sideline_service::organization::OrganizationService::new(
        Arc::clone(&organization_repo),
    ));
    let player_service = Arc::new(sideline_service::player::PlayerService::new(
        Arc::clone(&player_repo),
        Arc::clone(&organization_repo),
    ));
    let testing_service = Arc::new(sideline_service::testing::TestingService::new(
        Arc::clone(&player_repo),
        Arc::clone(&organization_repo),
    ));

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = sideline_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        token_encoder: Arc::clone(&token_encoder),
        token_decoder: Arc::clone(&token_decoder),
        password_hasher: Arc::clone(&password_hasher),
        trainer_repo: Arc::clone(&trainer_repo),
        organization_repo: Arc::clone(&organization_repo),
        player_repo: Arc::clone(&player_repo),
        account_service: Arc::clone(&account_service),
        organization_service: Arc::clone(&organization_service),
        player_service: Arc::clone(&player_service),
        testing_service: Arc::clone(&testing_service),
    };

    let app = sideline_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Sideline server listening on {}", addr);

    // ── Step 6: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Sideline server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
