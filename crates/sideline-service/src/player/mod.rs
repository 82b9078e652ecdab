//! Player operations.

pub mod service;

pub use service::PlayerService;
