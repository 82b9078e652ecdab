//! Concussion-test kickoff operations.

pub mod service;

pub use service::TestingService;
