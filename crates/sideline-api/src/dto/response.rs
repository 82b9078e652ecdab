//! Response DTOs.

use serde::{Deserialize, Serialize};

use sideline_service::testing::service::TestPlayerProjection;

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Check-auth response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckAuthResponse {
    /// Username of the authenticated trainer.
    pub username: String,
}

/// Start-test response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartTestResponse {
    /// The player the test is being started for.
    pub player: TestPlayerProjection,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
