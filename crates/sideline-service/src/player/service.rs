//! Player CRUD scoped to the owning trainer.
//!
//! Organization references are validated against the caller's ownership
//! before any write; a non-owned organization or player is reported as
//! not found, indistinguishable from a missing one.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use sideline_core::error::AppError;
use sideline_database::repositories::organization::OrganizationRepository;
use sideline_database::repositories::player::PlayerRepository;
use sideline_entity::player::{
    CreatePlayer, Player, PlayerStatus, PlayerWithOrganization, UpdatePlayer,
};

use crate::context::RequestContext;

/// Request to create a new player.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreatePlayerRequest {
    /// Full name.
    pub name: String,
    /// Date of birth.
    pub dob: NaiveDate,
    /// Profile picture URL.
    pub profile_pic_url: Option<String>,
    /// Street address.
    pub address_street: Option<String>,
    /// City.
    pub address_city: Option<String>,
    /// ZIP code.
    pub address_zip: Option<String>,
    /// Age in years.
    pub age: Option<i32>,
    /// Height.
    pub height: Option<String>,
    /// Weight.
    pub weight: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Emergency contact name.
    pub emergency_contact_name: Option<String>,
    /// Emergency contact phone number.
    pub emergency_contact_phone: Option<String>,
    /// Free-form medical notes.
    pub medical_notes: Option<String>,
    /// The organization the player belongs to.
    pub organization_id: Uuid,
    /// Initial status (defaults to active).
    pub status: Option<PlayerStatus>,
}

/// Partial update request for an existing player.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdatePlayerRequest {
    /// New name.
    pub name: Option<String>,
    /// New date of birth.
    pub dob: Option<NaiveDate>,
    /// New profile picture URL.
    pub profile_pic_url: Option<String>,
    /// New street address.
    pub address_street: Option<String>,
    /// New city.
    pub address_city: Option<String>,
    /// New ZIP code.
    pub address_zip: Option<String>,
    /// New age.
    pub age: Option<i32>,
    /// New height.
    pub height: Option<String>,
    /// New weight.
    pub weight: Option<String>,
    /// New contact email.
    pub email: Option<String>,
    /// New contact phone number.
    pub phone: Option<String>,
    /// New emergency contact name.
    pub emergency_contact_name: Option<String>,
    /// New emergency contact phone number.
    pub emergency_contact_phone: Option<String>,
    /// New medical notes.
    pub medical_notes: Option<String>,
    /// Re-link to a different organization.
    pub organization_id: Option<Uuid>,
    /// New status.
    pub status: Option<PlayerStatus>,
}

/// Manages player operations.
#[derive(Debug, Clone)]
pub struct PlayerService {
    /// Player repository.
    player_repo: Arc<PlayerRepository>,
    /// Organization repository, for ownership checks and list joins.
    org_repo: Arc<OrganizationRepository>,
}

impl PlayerService {
    /// Creates a new player service.
    pub fn new(player_repo: Arc<PlayerRepository>, org_repo: Arc<OrganizationRepository>) -> Self {
        Self {
            player_repo,
            org_repo,
        }
    }

    /// Creates a new player owned by the caller.
    pub async fn create_player(
        &self,
        ctx: &RequestContext,
        req: CreatePlayerRequest,
    ) -> Result<Player, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Player name cannot be empty"));
        }

        self.require_owned_organization(ctx, req.organization_id)
            .await?;

        let player = self
            .player_repo
            .create(&CreatePlayer {
                name: req.name.trim().to_string(),
                dob: req.dob,
                profile_pic_url: req.profile_pic_url,
                address_street: req.address_street,
                address_city: req.address_city,
                address_zip: req.address_zip,
                age: req.age,
                height: req.height,
                weight: req.weight,
                email: req.email,
                phone: req.phone,
                emergency_contact_name: req.emergency_contact_name,
                emergency_contact_phone: req.emergency_contact_phone,
                medical_notes: req.medical_notes,
                trainer_id: ctx.trainer_id,
                organization_id: req.organization_id,
                status: req.status.unwrap_or_default(),
            })
            .await?;

        info!(
            trainer_id = %ctx.trainer_id,
            player_id = %player.id,
            organization_id = %player.organization_id,
            "Player created"
        );

        Ok(player)
    }

    /// Lists all players owned by the caller, each with its organization
    /// resolved for display.
    pub async fn list_players(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<PlayerWithOrganization>, AppError> {
        let players = self.player_repo.find_by_trainer(ctx.trainer_id).await?;
        let organizations: HashMap<Uuid, _> = self
            .org_repo
            .find_by_trainer(ctx.trainer_id)
            .await?
            .into_iter()
            .map(|org| (org.id, org))
            .collect();

        players
            .into_iter()
            .map(|player| {
                let organization = organizations
                    .get(&player.organization_id)
                    .cloned()
                    .ok_or_else(|| {
                        AppError::internal(format!(
                            "Player {} references missing organization {}",
                            player.id, player.organization_id
                        ))
                    })?;
                Ok(PlayerWithOrganization {
                    player,
                    organization,
                })
            })
            .collect()
    }

    /// Applies a partial update to a player owned by the caller.
    pub async fn update_player(
        &self,
        ctx: &RequestContext,
        player_id: Uuid,
        req: UpdatePlayerRequest,
    ) -> Result<Player, AppError> {
        if let Some(name) = &req.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Player name cannot be empty"));
            }
        }

        if let Some(organization_id) = req.organization_id {
            self.require_owned_organization(ctx, organization_id).await?;
        }

        let update = UpdatePlayer {
            name: req.name.map(|n| n.trim().to_string()),
            dob: req.dob,
            profile_pic_url: req.profile_pic_url,
            address_street: req.address_street,
            address_city: req.address_city,
            address_zip: req.address_zip,
            age: req.age,
            height: req.height,
            weight: req.weight,
            email: req.email,
            phone: req.phone,
            emergency_contact_name: req.emergency_contact_name,
            emergency_contact_phone: req.emergency_contact_phone,
            medical_notes: req.medical_notes,
            organization_id: req.organization_id,
            status: req.status,
        };

        let player = self
            .player_repo
            .update_owned(player_id, ctx.trainer_id, &update)
            .await?
            .ok_or_else(|| AppError::not_found("Player not found"))?;

        info!(
            trainer_id = %ctx.trainer_id,
            player_id = %player.id,
            status = %player.status,
            "Player updated"
        );

        Ok(player)
    }

    /// Fails with `NotFound` unless the organization exists and is owned by
    /// the caller.
    async fn require_owned_organization(
        &self,
        ctx: &RequestContext,
        organization_id: Uuid,
    ) -> Result<(), AppError> {
        self.org_repo
            .find_owned(organization_id, ctx.trainer_id)
            .await?
            .ok_or_else(|| AppError::not_found("Organization not found"))?;
        Ok(())
    }
}
