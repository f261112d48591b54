//! # Caller Authentication
//!
//! The authentication port and its static-token implementation.
//!
//! Authentication happens once per request, before any provider call.
//! The check is a shared-secret comparison, not a credential store: the
//! expected token comes from configuration at startup.

pub mod error;
pub mod token;
pub mod traits;

pub use error::{AuthError, AuthResult};
pub use token::StaticTokenAuthenticator;
pub use traits::Authenticator;
