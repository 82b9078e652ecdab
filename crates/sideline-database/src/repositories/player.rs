//! Player repository implementation.
//!
//! Reads and updates are scoped `trainer_id = caller` in SQL, so a non-owned
//! row behaves exactly like a missing one.

use sqlx::PgPool;
use uuid::Uuid;

use sideline_core::error::{AppError, ErrorKind};
use sideline_core::result::AppResult;
use sideline_entity::player::{CreatePlayer, Player, UpdatePlayer};

/// Repository for player CRUD scoped to the owning trainer.
#[derive(Debug, Clone)]
pub struct PlayerRepository {
    pool: PgPool,
}

impl PlayerRepository {
    /// Create a new player repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new player.
    pub async fn create(&self, data: &CreatePlayer) -> AppResult<Player> {
        sqlx::query_as::<_, Player>(
            "INSERT INTO players (name, dob, profile_pic_url, address_street, address_city, \
                                  address_zip, age, height, weight, email, phone, \
                                  emergency_contact_name, emergency_contact_phone, medical_notes, \
                                  trainer_id, organization_id, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(data.dob)
        .bind(&data.profile_pic_url)
        .bind(&data.address_street)
        .bind(&data.address_city)
        .bind(&data.address_zip)
        .bind(data.age)
        .bind(&data.height)
        .bind(&data.weight)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.emergency_contact_name)
        .bind(&data.emergency_contact_phone)
        .bind(&data.medical_notes)
        .bind(data.trainer_id)
        .bind(data.organization_id)
        .bind(data.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create player", e))
    }

    /// List all players owned by the given trainer.
    pub async fn find_by_trainer(&self, trainer_id: Uuid) -> AppResult<Vec<Player>> {
        sqlx::query_as::<_, Player>(
            "SELECT * FROM players WHERE trainer_id = $1 ORDER BY created_at DESC",
        )
        .bind(trainer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list players", e))
    }

    /// Find a player by id, only if owned by the given trainer.
    pub async fn find_owned(&self, id: Uuid, trainer_id: Uuid) -> AppResult<Option<Player>> {
        sqlx::query_as::<_, Player>("SELECT * FROM players WHERE id = $1 AND trainer_id = $2")
            .bind(id)
            .bind(trainer_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find player", e))
    }

    /// Apply a partial update to a player owned by the given trainer.
    ///
    /// Absent fields keep their stored value. Returns `None` when no owned
    /// row matches, leaving any non-owned row untouched.
    pub async fn update_owned(
        &self,
        id: Uuid,
        trainer_id: Uuid,
        data: &UpdatePlayer,
    ) -> AppResult<Option<Player>> {
        sqlx::query_as::<_, Player>(
            "UPDATE players SET name = COALESCE($3, name), \
                                dob = COALESCE($4, dob), \
                                profile_pic_url = COALESCE($5, profile_pic_url), \
                                address_street = COALESCE($6, address_street), \
                                address_city = COALESCE($7, address_city), \
                                address_zip = COALESCE($8, address_zip), \
                                age = COALESCE($9, age), \
                                height = COALESCE($10, height), \
                                weight = COALESCE($11, weight), \
                                email = COALESCE($12, email), \
                                phone = COALESCE($13, phone), \
                                emergency_contact_name = COALESCE($14, emergency_contact_name), \
                                emergency_contact_phone = COALESCE($15, emergency_contact_phone), \
                                medical_notes = COALESCE($16, medical_notes), \
                                organization_id = COALESCE($17, organization_id), \
                                status = COALESCE($18, status), \
                                updated_at = NOW() \
             WHERE id = $1 AND trainer_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(trainer_id)
        .bind(&data.name)
        .bind(data.dob)
        .bind(&data.profile_pic_url)
        .bind(&data.address_street)
        .bind(&data.address_city)
        .bind(&data.address_zip)
        .bind(data.age)
        .bind(&data.height)
        .bind(&data.weight)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.emergency_contact_name)
        .bind(&data.emergency_contact_phone)
        .bind(&data.medical_notes)
        .bind(data.organization_id)
        .bind(data.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update player", e))
    }
}
