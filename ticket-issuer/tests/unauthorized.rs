//!
//! Module testing if ticket paths are protected by auth middleware.
//!
//! Browser navigation without session is redirected to login,
//! other requests without credentials return 401.
//!
mod common;
use common::*;

use reqwest::{header::LOCATION, StatusCode};
use uuid::Uuid;

#[tokio::test]
#[ignore = "requires running ticket-issuer"]
async fn post_generate() {
    init_env();

    let response = client()
        .post(format!("http://{}/generate", address()))
        .form(&[
            ("taxpayerId", "12345678901"),
            ("firstName", "Ana"),
            ("lastName", "Kovac"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires running ticket-issuer"]
async fn get_generate_id() {
    init_env();

    let response = client()
        .get(format!("http://{}/generate/{}", address(), Uuid::new_v4()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/login");
}

#[tokio::test]
#[ignore = "requires running ticket-issuer"]
async fn get_ticket_id() {
    init_env();

    let response = client()
        .get(format!("http://{}/ticket/{}", address(), Uuid::new_v4()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/login");
}

#[tokio::test]
#[ignore = "requires running ticket-issuer"]
async fn get_ticket_id_invalid_token() {
    init_env();

    let response = client()
        .get(format!("http://{}/ticket/{}", address(), Uuid::new_v4()))
        .bearer_auth("that's not correct JWT")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires running ticket-issuer"]
async fn get_public_pages() {
    init_env();

    for path in ["/", "/generate-ticket"] {
        let response = client()
            .get(format!("http://{}{path}", address()))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{path}");
    }
}

#[tokio::test]
#[ignore = "requires running ticket-issuer"]
async fn get_non_existent_uri() {
    init_env();

    let response = client()
        .get(format!("http://{}/this-uri-does-not-exist", address()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
