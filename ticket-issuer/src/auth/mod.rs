mod auth_error;
mod dto;
mod identity_provider;
mod middleware;
mod oidc_identity_provider;
pub mod session;

pub use auth_error::*;
pub use dto::User;
pub use identity_provider::*;
pub use middleware::RequireAuthLayer;
pub use oidc_identity_provider::*;

#[cfg(test)]
pub use oidc_identity_provider::test as oidc_test;
