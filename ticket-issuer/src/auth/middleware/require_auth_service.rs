use super::require_auth_future::RequireAuthFuture;
use crate::auth::{session, AuthError, IdentityProvider};
use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, Method},
    response::Response,
};
use std::{
    sync::Arc,
    task::{Context, Poll},
};
use tower::Service;

#[derive(Clone)]
pub struct RequireAuthService<S> {
    inner: S,
    identity_provider: Arc<dyn IdentityProvider>,
}

impl<S> RequireAuthService<S> {
    pub fn new(inner: S, identity_provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            inner,
            identity_provider,
        }
    }

    /// Credentials were taken from session cookie, not from Authorization header
    fn from_session(req: &Request) -> bool {
        !req.headers().contains_key(AUTHORIZATION)
            && session::find_cookie(req.headers(), session::SESSION_COOKIE).is_some()
    }

    fn return_to(req: &Request) -> String {
        req.uri()
            .path_and_query()
            .map(|path| path.as_str().to_string())
            .unwrap_or_else(|| "/".to_string())
    }
}

impl<S> Service<Request> for RequireAuthService<S>
where
    S: Service<Request, Response = Response>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = RequireAuthFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        match self.identity_provider.authenticate(req.headers()) {
            Ok(user) => {
                // crate span that holds user information
                let span = tracing::info_span!("user", id = %user.id);

                req.extensions_mut().insert(user);

                RequireAuthFuture::Authorized {
                    inner: self.inner.call(req),
                    span,
                }
            }
            Err(AuthError::MissingCredentials) if req.method() == Method::GET => {
                tracing::debug!(uri = %req.uri(), "login required");
                RequireAuthFuture::LoginRequired {
                    return_to: Self::return_to(&req),
                    clear_session: false,
                }
            }
            Err(err) if req.method() == Method::GET && Self::from_session(&req) => {
                tracing::info!(%err, uri = %req.uri(), "session no longer valid, login required");
                RequireAuthFuture::LoginRequired {
                    return_to: Self::return_to(&req),
                    clear_session: true,
                }
            }
            Err(err) => {
                tracing::warn!(%err, "auth error");
                RequireAuthFuture::Unauthorized
            }
        }
    }
}
