//! Integration tests for invite code redemption and referral listing.

mod common;

use axum::http::StatusCode;
use common::{invite_code_of, sign_in, TestHarness};
use serde_json::json;
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn test_invited_users_lists_only_redeemers(ctx: &TestHarness) {
    let client = ctx.client();
    let inviter = sign_in(&client, "+15550000001").await;
    let first = sign_in(&client, "+15550000002").await;
    let second = sign_in(&client, "+15550000003").await;
    let bystander = sign_in(&client, "+15550000004").await;

    let inviter_code = invite_code_of(&client, &inviter.access).await;
    let first_code = invite_code_of(&client, &first.access).await;

    for redeemer in [&first, &second] {
        let response = client
            .post(
                "/profile/",
                json!({ "invite_code": inviter_code }),
                Some(&redeemer.access),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.body,
            json!({ "message": "Invite code activated successfully." })
        );
    }

    // The bystander redeems someone else's code
    let response = client
        .post(
            "/profile/",
            json!({ "invite_code": first_code }),
            Some(&bystander.access),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = client.get("/profile/", Some(&inviter.access)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["invited_users"],
        json!(["+15550000002", "+15550000003"])
    );

    let response = client.get("/profile/", Some(&second.access)).await;
    assert_eq!(response.str("activated_invite_code"), inviter_code);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_second_activation_rejected(ctx: &TestHarness) {
    let client = ctx.client();
    let first_inviter = sign_in(&client, "+15550000001").await;
    let second_inviter = sign_in(&client, "+15550000002").await;
    let redeemer = sign_in(&client, "+15550000003").await;

    let first_code = invite_code_of(&client, &first_inviter.access).await;
    let second_code = invite_code_of(&client, &second_inviter.access).await;

    let response = client
        .post(
            "/profile/",
            json!({ "invite_code": first_code }),
            Some(&redeemer.access),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = client
        .post(
            "/profile/",
            json!({ "invite_code": second_code }),
            Some(&redeemer.access),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({ "error": "An invite code has already been activated for this account." })
    );

    let response = client.get("/profile/", Some(&redeemer.access)).await;
    assert_eq!(response.str("activated_invite_code"), first_code);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_unknown_invite_code(ctx: &TestHarness) {
    let client = ctx.client();
    let redeemer = sign_in(&client, "+15550000001").await;
    let own_code = invite_code_of(&client, &redeemer.access).await;
    let unknown = if own_code == "ZZZZZZ" { "YYYYYY" } else { "ZZZZZZ" };

    let response = client
        .post(
            "/profile/",
            json!({ "invite_code": unknown }),
            Some(&redeemer.access),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({ "error": "Invite code not found." }));

    let response = client.get("/profile/", Some(&redeemer.access)).await;
    assert!(response.body["activated_invite_code"].is_null());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_activation_validates_and_requires_auth(ctx: &TestHarness) {
    let client = ctx.client();
    let redeemer = sign_in(&client, "+15550000001").await;

    let response = client
        .post(
            "/profile/",
            json!({ "invite_code": "TOOLONG" }),
            Some(&redeemer.access),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({ "invite_code": ["Ensure this field has no more than 6 characters."] })
    );

    let response = client
        .post("/profile/", json!({}), Some(&redeemer.access))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({ "invite_code": ["This field is required."] })
    );

    let response = client
        .post(
            "/profile/",
            json!({ "invite_code": null }),
            Some(&redeemer.access),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({ "invite_code": ["This field may not be null."] })
    );

    let response = client
        .post(
            "/profile/",
            json!({ "invite_code": ["AAAAAA"] }),
            Some(&redeemer.access),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({ "invite_code": ["Not a valid string."] })
    );

    let response = client
        .post("/profile/", json!({ "invite_code": "AAAAAA" }), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
