//! Trainer repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use sideline_core::error::{AppError, ErrorKind};
use sideline_core::result::AppResult;
use sideline_entity::trainer::{CreateTrainer, Trainer};

/// Repository for trainer account lookups and creation.
#[derive(Debug, Clone)]
pub struct TrainerRepository {
    pool: PgPool,
}

impl TrainerRepository {
    /// Create a new trainer repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a trainer by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Trainer>> {
        sqlx::query_as::<_, Trainer>("SELECT * FROM trainers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find trainer by id", e)
            })
    }

    /// Find a trainer by username (case-insensitive).
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<Trainer>> {
        sqlx::query_as::<_, Trainer>("SELECT * FROM trainers WHERE LOWER(username) = LOWER($1)")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find trainer by username", e)
            })
    }

    /// Create a new trainer account.
    pub async fn create(&self, data: &CreateTrainer) -> AppResult<Trainer> {
        sqlx::query_as::<_, Trainer>(
            "INSERT INTO trainers (username, password_hash) \
             VALUES ($1, $2) \
             RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("trainers_username_key") =>
            {
                AppError::conflict("Username already taken")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create trainer", e),
        })
    }
}
