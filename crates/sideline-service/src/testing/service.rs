//! Owned-player lookup for the test confirmation screen.
//!
//! The concussion-likelihood computation itself runs on an external analysis
//! service; this service only resolves the player the trainer picked and
//! returns the display projection shown before the run.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use sideline_core::error::AppError;
use sideline_database::repositories::organization::OrganizationRepository;
use sideline_database::repositories::player::PlayerRepository;

use crate::context::RequestContext;

/// Display projection of the player a test is being started for.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPlayerProjection {
    /// Player ID.
    pub id: Uuid,
    /// Player name.
    pub name: String,
    /// Date of birth.
    pub dob: NaiveDate,
    /// Name of the player's organization.
    pub organization_name: String,
}

/// Resolves players for test runs.
#[derive(Debug, Clone)]
pub struct TestingService {
    /// Player repository.
    player_repo: Arc<PlayerRepository>,
    /// Organization repository.
    org_repo: Arc<OrganizationRepository>,
}

impl TestingService {
    /// Creates a new testing service.
    pub fn new(player_repo: Arc<PlayerRepository>, org_repo: Arc<OrganizationRepository>) -> Self {
        Self {
            player_repo,
            org_repo,
        }
    }

    /// Looks up a player owned by the caller and returns its display
    /// projection. Absent and non-owned players are indistinguishable.
    pub async fn start_test(
        &self,
        ctx: &RequestContext,
        player_id: Uuid,
    ) -> Result<TestPlayerProjection, AppError> {
        let player = self
            .player_repo
            .find_owned(player_id, ctx.trainer_id)
            .await?
            .ok_or_else(|| AppError::not_found("Player not found"))?;

        let organization_name = self
            .org_repo
            .find_owned(player.organization_id, ctx.trainer_id)
            .await?
            .map(|org| org.name)
            .unwrap_or_else(|| "Unknown".to_string());

        info!(
            trainer_id = %ctx.trainer_id,
            player_id = %player.id,
            "Test started"
        );

        Ok(TestPlayerProjection {
            id: player.id,
            name: player.name,
            dob: player.dob,
            organization_name,
        })
    }
}
