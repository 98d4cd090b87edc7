use crate::{auth::AuthError, repository};
use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("OIB must have exactly 11 digits.")]
    InvalidTaxpayerId,

    #[error("First name and last name must be letters only.")]
    InvalidName,

    #[error("Cannot generate more than {max} tickets for this OIB.")]
    QuotaExceeded { max: i32 },

    #[error("Invalid form: {0}")]
    InvalidForm(#[from] FormRejection),

    #[error("Ticket not found.")]
    TicketNotFound,

    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),

    ///
    /// This error should be returned only in situations
    /// that should never occur when system is setup correctly.
    ///
    #[error("unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::InvalidForm(FormRejection::FailedToDeserializeFormBody(_)) => {
                StatusCode::BAD_REQUEST
            }
            Error::InvalidForm(rejection) => rejection.status(),
            Error::InvalidTaxpayerId | Error::InvalidName | Error::QuotaExceeded { max: _ } => {
                StatusCode::BAD_REQUEST
            }
            Error::TicketNotFound => StatusCode::NOT_FOUND,
            Error::Auth(_) => StatusCode::UNAUTHORIZED,
            Error::Database(_) | Error::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match status.is_server_error() {
            true => tracing::error!(err = %self),
            false => tracing::warn!(err = %self),
        }

        (status, self.to_string()).into_response()
    }
}
