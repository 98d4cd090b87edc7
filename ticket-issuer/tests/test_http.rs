mod common;
pub use common::*;

use futures_util::future::join_all;
use reqwest::{header::LOCATION, Client, Response, StatusCode};
use serial_test::parallel;
use uuid::Uuid;

async fn generate(client: &Client, vatin: &str, first_name: &str, last_name: &str) -> Response {
    client
        .post(format!("http://{}/generate", address()))
        .bearer_auth(create_staff_id_token())
        .form(&[
            ("taxpayerId", vatin),
            ("firstName", first_name),
            ("lastName", last_name),
        ])
        .send()
        .await
        .unwrap()
}

fn generated_ticket_id(response: &Response) -> String {
    let location = response.headers().get(LOCATION).unwrap().to_str().unwrap();
    location.strip_prefix("/generate/").unwrap().to_string()
}

#[tokio::test]
#[parallel]
#[ignore = "requires running ticket-issuer"]
async fn generate_three_tickets_then_reject_fourth() {
    init_env();

    let client = client();
    let vatin = random_vatin();

    for _ in 0..3 {
        let response = generate(&client, &vatin, "Ana", "Kovac").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let response = generate(&client, &vatin, "Ana", "Kovac").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.text().await.unwrap(),
        "Cannot generate more than 3 tickets for this OIB."
    );
}

#[tokio::test]
#[parallel]
#[ignore = "requires running ticket-issuer"]
async fn generate_concurrently_never_exceeds_quota() {
    init_env();

    let client = client();
    let vatin = random_vatin();

    let responses = join_all((0..10).map(|_| generate(&client, &vatin, "Ana", "Kovac"))).await;

    let created = responses
        .iter()
        .filter(|response| response.status() == StatusCode::SEE_OTHER)
        .count();
    let rejected = responses
        .iter()
        .filter(|response| response.status() == StatusCode::BAD_REQUEST)
        .count();
    assert_eq!(created, 3);
    assert_eq!(rejected, 7);
}

#[tokio::test]
#[parallel]
#[ignore = "requires running ticket-issuer"]
async fn generate_invalid_vatin() {
    init_env();

    let response = generate(&client(), "123", "Ana", "Kovac").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.text().await.unwrap(),
        "OIB must have exactly 11 digits."
    );
}

#[tokio::test]
#[parallel]
#[ignore = "requires running ticket-issuer"]
async fn generate_invalid_name() {
    init_env();

    let response = generate(&client(), &random_vatin(), "Ana Marija", "Kovac").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.text().await.unwrap(),
        "First name and last name must be letters only."
    );
}

#[tokio::test]
#[parallel]
#[ignore = "requires running ticket-issuer"]
async fn generated_ticket_can_be_viewed() {
    init_env();

    let client = client();
    let vatin = random_vatin();

    let response = generate(&client, &vatin, "Ana", "Kovac").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let id = generated_ticket_id(&response);

    // QR code page contains shareable link
    let response = client
        .get(format!("http://{}/generate/{id}", address()))
        .bearer_auth(create_staff_id_token())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("data:image/png;base64,"));
    assert!(body.contains(&format!("/ticket/{id}\"")));

    // details page shows issued data and the viewer
    let response = client
        .get(format!("http://{}/ticket/{id}", address()))
        .bearer_auth(create_id_token_for("auth0|viewer", "Marko Maric"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains(&vatin));
    assert!(body.contains("<dd>Ana</dd>"));
    assert!(body.contains("<dd>Kovac</dd>"));
    assert!(body.contains("Logged in as Marko Maric"));
}

#[tokio::test]
#[parallel]
#[ignore = "requires running ticket-issuer"]
async fn unknown_ticket_not_found() {
    init_env();

    let client = client();

    for path in [
        format!("/generate/{}", Uuid::new_v4()),
        format!("/ticket/{}", Uuid::new_v4()),
        "/ticket/not-a-ticket".to_string(),
    ] {
        let response = client
            .get(format!("http://{}{path}", address()))
            .bearer_auth(create_staff_id_token())
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
#[parallel]
#[ignore = "requires running ticket-issuer"]
async fn login_redirects_to_identity_provider() {
    init_env();

    let response = client()
        .get(format!("http://{}/login", address()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers().get(LOCATION).unwrap().to_str().unwrap();
    assert!(location.contains("/authorize?"));
    assert!(location.contains("nonce="));
}
