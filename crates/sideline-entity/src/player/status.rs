//! Player status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Health status of a player.
///
/// Client-settable; any status may move to any other status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "player_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    /// Cleared for play.
    Active,
    /// Out with a non-concussion injury.
    Injured,
    /// Diagnosed concussion.
    Concussion,
    /// In return-to-play protocol.
    Recovery,
}

impl PlayerStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Injured => "injured",
            Self::Concussion => "concussion",
            Self::Recovery => "recovery",
        }
    }
}

impl Default for PlayerStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlayerStatus {
    type Err = sideline_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "injured" => Ok(Self::Injured),
            "concussion" => Ok(Self::Concussion),
            "recovery" => Ok(Self::Recovery),
            _ => Err(sideline_core::AppError::validation(format!(
                "Invalid player status: '{s}'. Expected one of: active, injured, concussion, recovery"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("active".parse::<PlayerStatus>().unwrap(), PlayerStatus::Active);
        assert_eq!(
            "CONCUSSION".parse::<PlayerStatus>().unwrap(),
            PlayerStatus::Concussion
        );
        assert!("benched".parse::<PlayerStatus>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&PlayerStatus::Recovery).unwrap();
        assert_eq!(json, "\"recovery\"");
    }
}
