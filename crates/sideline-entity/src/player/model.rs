//! Player entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::PlayerStatus;
use crate::organization::Organization;

/// An athlete tracked by a trainer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique player identifier.
    pub id: Uuid,
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
    /// Height (free-form, e.g. `6'1"`).
    pub height: Option<String>,
    /// Weight (free-form, e.g. `185 lbs`).
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
    /// The trainer that owns this record.
    pub trainer_id: Uuid,
    /// The organization the player belongs to.
    pub organization_id: Uuid,
    /// Current health status.
    pub status: PlayerStatus,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A player with its linked organization resolved, for list views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerWithOrganization {
    /// The player record.
    #[serde(flatten)]
    pub player: Player,
    /// The player's organization.
    pub organization: Organization,
}

/// Data required to create a new player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlayer {
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
    /// The owning trainer.
    pub trainer_id: Uuid,
    /// The organization the player belongs to.
    pub organization_id: Uuid,
    /// Initial status.
    pub status: PlayerStatus,
}

/// Partial update for an existing player.
///
/// Every field is optional; an absent field leaves the stored value
/// unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlayer {
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
