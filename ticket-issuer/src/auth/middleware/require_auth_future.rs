use crate::auth::session;
use axum::{
    http::{header::SET_COOKIE, StatusCode},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use pin_project::pin_project;
use std::{
    future::Future,
    pin::Pin,
    task::{ready, Context, Poll},
};
use tracing::Span;

#[pin_project(project = RequireAuthFutureProj)]
pub enum RequireAuthFuture<F> {
    Authorized {
        #[pin]
        inner: F,

        /// span that should be used to add
        /// user context to request processing
        span: Span,
    },
    LoginRequired {
        /// path to come back to after login
        return_to: String,

        /// session cookie is present but no longer valid
        clear_session: bool,
    },
    Unauthorized,
}

impl<F, E> Future for RequireAuthFuture<F>
where
    F: Future<Output = Result<Response, E>>,
{
    type Output = Result<Response, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let result = match self.project() {
            RequireAuthFutureProj::Authorized { inner, span } => {
                let _entered = span.enter();
                ready!(inner.poll(cx))
            }
            RequireAuthFutureProj::LoginRequired {
                return_to,
                clear_session,
            } => {
                let mut cookies = vec![(SET_COOKIE, session::create_return_to_cookie(return_to))];
                if *clear_session {
                    cookies.push((
                        SET_COOKIE,
                        session::create_expired_cookie(session::SESSION_COOKIE),
                    ));
                }

                Ok((AppendHeaders(cookies), Redirect::to("/login")).into_response())
            }
            RequireAuthFutureProj::Unauthorized => Ok(StatusCode::UNAUTHORIZED.into_response()),
        };

        Poll::Ready(result)
    }
}
