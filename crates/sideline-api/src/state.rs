//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use sideline_auth::password::PasswordHasher;
use sideline_auth::token::{TokenDecoder, TokenEncoder};
use sideline_core::config::AppConfig;

use sideline_database::repositories::organization::OrganizationRepository;
use sideline_database::repositories::player::PlayerRepository;
use sideline_database::repositories::trainer::TrainerRepository;

use sideline_service::account::AccountService;
use sideline_service::organization::OrganizationService;
use sideline_service::player::PlayerService;
use sideline_service::testing::TestingService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// Session token encoder
    pub token_encoder: Arc<TokenEncoder>,
    /// Session token decoder and validator
    pub token_decoder: Arc<TokenDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,

    // ── Repositories ─────────────────────────────────────────
    /// Trainer repository
    pub trainer_repo: Arc<TrainerRepository>,
    /// Organization repository
    pub organization_repo: Arc<OrganizationRepository>,
    /// Player repository
    pub player_repo: Arc<PlayerRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Account service
    pub account_service: Arc<AccountService>,
    /// Organization service
    pub organization_service: Arc<OrganizationService>,
    /// Player service
    pub player_service: Arc<PlayerService>,
    /// Testing service
    pub testing_service: Arc<TestingService>,
}
