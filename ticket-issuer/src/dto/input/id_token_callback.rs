use serde::Deserialize;

///
/// Login result posted by identity provider
///
#[derive(Deserialize)]
pub struct IdTokenCallback {
    pub id_token: String,
}
