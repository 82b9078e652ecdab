//! Account (credential) operations.

pub mod service;

pub use service::AccountService;
