use serde::Deserialize;

///
/// Claims of an OpenID Connect ID token that are used by the services.
///
/// Registered claims like `iss`, `aud` and `exp` are checked by
/// [jsonwebtoken::Validation] so they are not repeated here.
///
#[derive(Debug, Deserialize)]
pub struct IdTokenClaims {
    pub sub: String,
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub nonce: Option<String>,
}

impl IdTokenClaims {
    ///
    /// Name that should be presented to people.
    /// Falls back to less friendly claims when provider didn't send `name`.
    ///
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.nickname.as_deref())
            .or(self.email.as_deref())
            .unwrap_or(&self.sub)
    }
}
