//! # sideline-service
//!
//! Business logic for Sideline. Every resource operation takes an explicit
//! [`context::RequestContext`] — the verified caller identity — and scopes
//! reads and writes to it. There is no ambient request state.

pub mod account;
pub mod context;
pub mod organization;
pub mod player;
pub mod testing;
