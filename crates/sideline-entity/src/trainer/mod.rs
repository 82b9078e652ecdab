//! Trainer (account) domain entities.

pub mod model;

pub use model::{CreateTrainer, Trainer};
