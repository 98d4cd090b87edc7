use super::{AuthError, User};
use axum::http::HeaderMap;

///
/// Capability of an external identity provider.
///
/// Application never talks to the provider directly. It only redirects
/// the browser to the provider and verifies what the browser brings back.
///
pub trait IdentityProvider: Send + Sync {
    ///
    /// Finds out who sent the request.
    ///
    /// ### Errors
    /// - [AuthError::MissingCredentials] when request carries no credentials
    /// - [AuthError::InvalidCredentials] when credentials are present
    ///   but could not be verified
    ///
    fn authenticate(&self, headers: &HeaderMap) -> Result<User, AuthError>;

    ///
    /// URL that starts login at the provider.
    /// `nonce` must be presented again to [IdentityProvider::verify_login].
    ///
    fn login_url(&self, nonce: &str) -> String;

    ///
    /// Verifies credentials returned by the provider after login.
    ///
    /// ### Errors
    /// - [AuthError::InvalidCredentials] when credentials are invalid
    ///   or were issued for a different `nonce`
    ///
    fn verify_login(&self, id_token: &str, nonce: &str) -> Result<User, AuthError>;

    ///
    /// URL that ends session at the provider
    ///
    fn logout_url(&self) -> String;
}
