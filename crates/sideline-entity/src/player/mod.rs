//! Player domain entities.

pub mod model;
pub mod status;

pub use model::{CreatePlayer, Player, PlayerWithOrganization, UpdatePlayer};
pub use status::PlayerStatus;
