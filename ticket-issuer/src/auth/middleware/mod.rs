mod require_auth_future;
mod require_auth_layer;
mod require_auth_service;

pub use require_auth_layer::RequireAuthLayer;
