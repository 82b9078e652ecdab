//! Request context carrying the authenticated trainer identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current authenticated request.
///
/// Extracted from the session cookie and passed into service methods so that
/// every operation knows *who* is acting. Replaces the ambient per-request
/// globals of typical web frameworks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated trainer's ID.
    pub trainer_id: Uuid,
    /// The username (convenience field from the token claims).
    pub username: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(trainer_id: Uuid, username: String) -> Self {
        Self {
            trainer_id,
            username,
            request_time: Utc::now(),
        }
    }
}
