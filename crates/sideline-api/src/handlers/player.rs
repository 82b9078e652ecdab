//! Player handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use sideline_core::error::AppError;
use sideline_entity::player::{Player, PlayerWithOrganization};
use sideline_service::player::service::{
    CreatePlayerRequest as SvcCreatePlayer, UpdatePlayerRequest as SvcUpdatePlayer,
};

use crate::dto::request::{CreatePlayerRequest, UpdatePlayerRequest};
use crate::error::ApiError;
use crate::extractors::AuthTrainer;
use crate::state::AppState;

/// POST /players
pub async fn create_player(
    State(state): State<AppState>,
    auth: AuthTrainer,
    Json(req): Json<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let player = state
        .player_service
        .create_player(
            &auth,
            SvcCreatePlayer {
                name: req.name,
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
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(player)))
}

/// GET /players
pub async fn list_players(
    State(state): State<AppState>,
    auth: AuthTrainer,
) -> Result<Json<Vec<PlayerWithOrganization>>, ApiError> {
    let players = state.player_service.list_players(&auth).await?;
    Ok(Json(players))
}

/// PUT /players/{id}
pub async fn update_player(
    State(state): State<AppState>,
    auth: AuthTrainer,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePlayerRequest>,
) -> Result<Json<Player>, ApiError> {
    let player = state
        .player_service
        .update_player(
            &auth,
            id,
            SvcUpdatePlayer {
                name: req.name,
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
            },
        )
        .await?;

    Ok(Json(player))
}
