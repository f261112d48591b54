//! # API Layer
//!
//! External interfaces of the service. REST is the only surface.

pub mod rest;
