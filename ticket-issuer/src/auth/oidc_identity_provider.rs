use super::{session, AuthError, IdentityProvider, User};
use anyhow::anyhow;
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use jwt_auth::{util::create_id_token_validation, IdTokenClaims};
use url::Url;

pub struct OidcIdentityProviderConfig {
    /// Public address of the application without trailing slash
    pub base_url: String,

    /// Issuer base URL without trailing slash
    pub issuer_base_url: String,
    pub client_id: String,

    pub jwt_algorithms: Vec<Algorithm>,
    pub jwt_key: DecodingKey,
}

///
/// Identity provider speaking OpenID Connect.
///
/// Login uses implicit flow with `form_post` response mode so that
/// ID token can be verified locally with configured key,
/// without calling the provider from the server.
///
pub struct OidcIdentityProvider {
    key: DecodingKey,
    validation: Validation,
    authorize_url: Url,
    logout_url: Url,
}

impl OidcIdentityProvider {
    pub fn new(config: OidcIdentityProviderConfig) -> anyhow::Result<Self> {
        let issuer_with_slash = format!("{}/", config.issuer_base_url);
        let validation = create_id_token_validation(
            config.jwt_algorithms,
            &[config.issuer_base_url.as_str(), issuer_with_slash.as_str()],
            &config.client_id,
        );

        let mut authorize_url = Url::parse(&format!("{}/authorize", config.issuer_base_url))
            .map_err(|err| anyhow!("invalid issuer base url: {err}"))?;
        authorize_url
            .query_pairs_mut()
            .append_pair("response_type", "id_token")
            .append_pair("response_mode", "form_post")
            .append_pair("scope", "openid profile email")
            .append_pair("client_id", &config.client_id)
            .append_pair("redirect_uri", &format!("{}/callback", config.base_url));

        let mut logout_url = Url::parse(&format!("{}/v2/logout", config.issuer_base_url))
            .map_err(|err| anyhow!("invalid issuer base url: {err}"))?;
        logout_url
            .query_pairs_mut()
            .append_pair("client_id", &config.client_id)
            .append_pair("returnTo", &config.base_url);

        Ok(Self {
            key: config.jwt_key,
            validation,
            authorize_url,
            logout_url,
        })
    }

    fn decode(&self, id_token: &str) -> Result<IdTokenClaims, AuthError> {
        let token_data = jsonwebtoken::decode::<IdTokenClaims>(id_token, &self.key, &self.validation)
            .map_err(|err| AuthError::InvalidCredentials(format!("invalid jwt: {err}")))?;

        Ok(token_data.claims)
    }

    fn parse_authorization_header(authorization_header: &HeaderValue) -> Result<&str, AuthError> {
        let Ok(authorization_value) = authorization_header.to_str() else {
            return Err(AuthError::InvalidCredentials(
                "illegal character in Authorization header".to_string(),
            ));
        };

        authorization_value
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidCredentials(
                "unsupported authorization type".to_string(),
            ))
    }
}

impl IdentityProvider for OidcIdentityProvider {
    fn authenticate(&self, headers: &HeaderMap) -> Result<User, AuthError> {
        let id_token = match headers.get(AUTHORIZATION) {
            Some(authorization_header) => Self::parse_authorization_header(authorization_header)?,
            None => session::find_cookie(headers, session::SESSION_COOKIE)
                .ok_or(AuthError::MissingCredentials)?,
        };

        let claims = self.decode(id_token)?;

        Ok(User::new(
            claims.sub.clone(),
            claims.display_name().to_string(),
        ))
    }

    fn login_url(&self, nonce: &str) -> String {
        let mut url = self.authorize_url.clone();
        url.query_pairs_mut().append_pair("nonce", nonce);

        url.into()
    }

    fn verify_login(&self, id_token: &str, nonce: &str) -> Result<User, AuthError> {
        let claims = self.decode(id_token)?;

        if claims.nonce.as_deref() != Some(nonce) {
            return Err(AuthError::InvalidCredentials("nonce mismatch".to_string()));
        }

        Ok(User::new(
            claims.sub.clone(),
            claims.display_name().to_string(),
        ))
    }

    fn logout_url(&self) -> String {
        self.logout_url.to_string()
    }
}
