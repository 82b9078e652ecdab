//! Organization operations.

pub mod service;

pub use service::OrganizationService;
