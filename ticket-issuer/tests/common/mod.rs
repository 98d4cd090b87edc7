#![allow(dead_code)]

use jwt_auth::test::{create_id_token, TestIdToken};
use reqwest::{redirect::Policy, Client};
use std::sync::Once;
use uuid::Uuid;

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("TICKET_ISSUER_BIND_ADDRESS").unwrap()
}

///
/// Client that does not follow redirects
/// so tests can inspect them
///
pub fn client() -> Client {
    Client::builder().redirect(Policy::none()).build().unwrap()
}

///
/// Random taxpayer ID, so tests do not share quota
/// with each other or with previous runs
///
pub fn random_vatin() -> String {
    format!("{:011}", Uuid::new_v4().as_u128() % 100_000_000_000)
}

pub fn create_id_token_for(subject: &str, name: &str) -> String {
    let issuer = std::env::var("TICKET_ISSUER_OIDC_ISSUER_BASE_URL").unwrap();
    let issuer = format!("{}/", issuer.trim_end_matches('/'));
    let audience = std::env::var("TICKET_ISSUER_OIDC_CLIENT_ID").unwrap();
    let jwt_algorithms = std::env::var("TICKET_ISSUER_JWT_ALGORITHMS").unwrap();
    let jwt_key = std::env::var("TICKET_ISSUER_JWT_TEST_ENCODE_KEY").unwrap();

    let mut token = TestIdToken::new(subject, &issuer, &audience);
    token.name = Some(name);

    create_id_token(token, jwt_algorithms, jwt_key)
}

pub fn create_staff_id_token() -> String {
    create_id_token_for("auth0|staff", "Ivana Horvat")
}
