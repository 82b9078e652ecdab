//! Testing handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::StartTestRequest;
use crate::dto::response::StartTestResponse;
use crate::error::ApiError;
use crate::extractors::AuthTrainer;
use crate::state::AppState;

/// POST /testing/start
///
/// Resolves the picked player for the confirmation screen. The concussion
/// analysis itself runs on an external service the client talks to directly.
pub async fn start_test(
    State(state): State<AppState>,
    auth: AuthTrainer,
    Json(req): Json<StartTestRequest>,
) -> Result<Json<StartTestResponse>, ApiError> {
    let player = state
        .testing_service
        .start_test(&auth, req.player_id)
        .await?;

    Ok(Json(StartTestResponse { player }))
}
