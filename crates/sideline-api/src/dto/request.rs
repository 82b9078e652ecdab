//! Request DTOs with validation.
//!
//! Wire field names are camelCase, matching the browser clients.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use sideline_entity::player::PlayerStatus;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create organization request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrganizationRequest {
    /// Organization name.
    #[validate(length(min = 1, max = 255, message = "Organization name is required"))]
    pub name: String,
}

/// Create player request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    /// Full name.
    #[validate(length(min = 1, max = 255, message = "Player name is required"))]
    pub name: String,
    /// Date of birth (`YYYY-MM-DD`).
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

/// Partial player update request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
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

/// Start test request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTestRequest {
    /// The player to start a test for.
    pub player_id: Uuid,
}
