//!
//! Helpers shared by services that accept ID tokens issued
//! by an OpenID Connect identity provider
//!

pub mod dto;
pub mod util;

pub use dto::IdTokenClaims;
