use super::require_auth_service::RequireAuthService;
use crate::auth::IdentityProvider;
use std::sync::Arc;
use tower::Layer;

///
/// Lets through only requests of authenticated users.
/// Authenticated [crate::auth::User] is added to request extensions.
///
#[derive(Clone)]
pub struct RequireAuthLayer {
    identity_provider: Arc<dyn IdentityProvider>,
}

impl RequireAuthLayer {
    pub fn new(identity_provider: Arc<dyn IdentityProvider>) -> Self {
        Self { identity_provider }
    }
}

impl<S> Layer<S> for RequireAuthLayer {
    type Service = RequireAuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequireAuthService::new(inner, self.identity_provider.clone())
    }
}
