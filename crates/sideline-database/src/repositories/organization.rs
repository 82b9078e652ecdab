//! Organization repository implementation.
//!
//! Every read takes the owning trainer id; rows belonging to other trainers
//! are invisible at the SQL level.

use sqlx::PgPool;
use uuid::Uuid;

use sideline_core::error::{AppError, ErrorKind};
use sideline_core::result::AppResult;
use sideline_entity::organization::{CreateOrganization, Organization};

/// Repository for organization CRUD scoped to the owning trainer.
#[derive(Debug, Clone)]
pub struct OrganizationRepository {
    pool: PgPool,
}

impl OrganizationRepository {
    /// Create a new organization repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new organization.
    pub async fn create(&self, data: &CreateOrganization) -> AppResult<Organization> {
        sqlx::query_as::<_, Organization>(
            "INSERT INTO organizations (name, trainer_id) \
             VALUES ($1, $2) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(data.trainer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create organization", e))
    }

    /// List all organizations owned by the given trainer.
    pub async fn find_by_trainer(&self, trainer_id: Uuid) -> AppResult<Vec<Organization>> {
        sqlx::query_as::<_, Organization>(
            "SELECT * FROM organizations WHERE trainer_id = $1 ORDER BY created_at DESC",
        )
        .bind(trainer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list organizations", e))
    }

    /// Find an organization by id, only if owned by the given trainer.
    pub async fn find_owned(&self, id: Uuid, trainer_id: Uuid) -> AppResult<Option<Organization>> {
        sqlx::query_as::<_, Organization>(
            "SELECT * FROM organizations WHERE id = $1 AND trainer_id = $2",
        )
        .bind(id)
        .bind(trainer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find organization", e))
    }
}
