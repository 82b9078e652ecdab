//! Custom middleware.

pub mod logging;
