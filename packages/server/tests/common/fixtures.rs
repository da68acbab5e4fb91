//! Test fixtures for driving the sign-in flow.

use axum::http::StatusCode;
use rand::Rng;
use serde_json::json;

use super::ApiClient;

/// Tokens returned by a successful verification
pub struct SignedIn {
    pub access: String,
    pub refresh: String,
}

/// A phone number no other test is using
pub fn unique_phone_number() -> String {
    let digits: u64 = rand::thread_rng().gen_range(1_000_000_000..10_000_000_000);
    format!("+9{}", digits)
}

/// Request a code for a phone number and return it
pub async fn request_code(client: &ApiClient, phone_number: &str) -> String {
    let response = client
        .post(
            "/generate_code/",
            json!({ "phone_number": phone_number }),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    response.str("code")
}

/// Run generate + verify and return the issued tokens
pub async fn sign_in(client: &ApiClient, phone_number: &str) -> SignedIn {
    let code = request_code(client, phone_number).await;
    let response = client
        .post(
            "/verify_code/",
            json!({ "phone_number": phone_number, "code": code }),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);

    SignedIn {
        access: response.str("access"),
        refresh: response.str("refresh"),
    }
}

/// Read the caller's profile and return its invite code
pub async fn invite_code_of(client: &ApiClient, access: &str) -> String {
    let response = client.get("/profile/", Some(access)).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    response.str("invite_code")
}
