//! # Infrastructure Layer
//!
//! Integrations with the outside world: the two provider HTTP clients
//! and the caller-authentication check. Both are exposed as traits so
//! the application layer stays independently testable.

pub mod auth;
pub mod providers;
