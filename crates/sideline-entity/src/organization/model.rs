//! Organization entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A team or club an athletic trainer manages players for.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Unique organization identifier.
    pub id: Uuid,
    /// Organization name.
    pub name: String,
    /// The trainer that owns this organization.
    pub trainer_id: Uuid,
    /// When the organization was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrganization {
    /// Organization name.
    pub name: String,
    /// The owning trainer.
    pub trainer_id: Uuid,
}
