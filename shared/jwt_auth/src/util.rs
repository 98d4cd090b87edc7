use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use std::str::FromStr;

pub fn parse_jwt_algorithms(jwt_algorithms: String) -> anyhow::Result<Vec<Algorithm>> {
    let algorithms = jwt_algorithms
        .split(',')
        .map(str::trim)
        .filter(|algorithm| !algorithm.is_empty())
        .map(|algorithm| {
            Algorithm::from_str(algorithm).map_err(|err| anyhow!("invalid algorithm: {err}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if algorithms.is_empty() {
        return Err(anyhow!("at least one algorithm is required"));
    }

    Ok(algorithms)
}

///
/// Creates key used to verify token signatures.
/// HMAC algorithms use `jwt_key` as a shared secret,
/// all other families expect PEM encoded public key.
///
pub fn parse_jwt_key(jwt_algorithm: &Algorithm, jwt_key: String) -> anyhow::Result<DecodingKey> {
    let jwt_key_bytes = jwt_key.as_bytes();

    let key = match jwt_algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
            DecodingKey::from_secret(jwt_key_bytes)
        }
        Algorithm::ES256 | Algorithm::ES384 => DecodingKey::from_ec_pem(jwt_key_bytes)
            .map_err(|err| anyhow!("invalid ec pem key: {err}"))?,
        Algorithm::RS256
        | Algorithm::RS384
        | Algorithm::RS512
        | Algorithm::PS256
        | Algorithm::PS384
        | Algorithm::PS512 => DecodingKey::from_rsa_pem(jwt_key_bytes)
            .map_err(|err| anyhow!("invalid rsa pem key: {err}"))?,
        Algorithm::EdDSA => DecodingKey::from_ed_pem(jwt_key_bytes)
            .map_err(|err| anyhow!("invalid ed pem key: {err}"))?,
    };

    Ok(key)
}

///
/// Creates validation that accepts only tokens issued by one of `issuers`
/// for `audience` and signed with one of `algorithms`.
///
pub fn create_id_token_validation(
    algorithms: Vec<Algorithm>,
    issuers: &[&str],
    audience: &str,
) -> Validation {
    let mut validation = Validation::default();
    validation.algorithms = algorithms;
    validation.set_issuer(issuers);
    validation.set_audience(&[audience]);
    validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

    validation
}
