//! Organization handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use sideline_core::error::AppError;
use sideline_entity::organization::Organization;

use crate::dto::request::CreateOrganizationRequest;
use crate::error::ApiError;
use crate::extractors::AuthTrainer;
use crate::state::AppState;

/// POST /organizations
pub async fn create_organization(
    State(state): State<AppState>,
    auth: AuthTrainer,
    Json(req): Json<CreateOrganizationRequest>,
) -> Result<(StatusCode, Json<Organization>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let organization = state
        .organization_service
        .create_organization(&auth, &req.name)
        .await?;

    Ok((StatusCode::CREATED, Json(organization)))
}

/// GET /organizations
pub async fn list_organizations(
    State(state): State<AppState>,
    auth: AuthTrainer,
) -> Result<Json<Vec<Organization>>, ApiError> {
    let organizations = state.organization_service.list_organizations(&auth).await?;
    Ok(Json(organizations))
}
