//! End-to-end tests for the webhook server
//!
//! These tests require a running PostgreSQL instance and the
//! DATABASE_URL environment variable. Without it every test returns
//! early.
//!
//! Run with: cargo test -p integration-tests --test webhook_tests

use integration_tests::{check_test_env, civ_command, reply_content, unique_id, TestServer};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
}

// ============================================================================
// Signature verification
// ============================================================================

#[tokio::test]
async fn test_unsigned_interaction_is_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post_json("/discord", &json!({"type": 1}))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_badly_signed_interaction_is_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post_badly_signed_interaction(&json!({"type": 1}))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Interaction routing
// ============================================================================

#[tokio::test]
async fn test_ping_gets_pong() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post_interaction(&json!({"type": 1})).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"type": 1}));
}

#[tokio::test]
async fn test_unknown_interaction_type_is_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post_interaction(&json!({"type": 9})).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unrecognized_command_is_echoed_as_chat_reply() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let payload = json!({
        "type": 2,
        "guild_id": unique_id("guild"),
        "channel_id": unique_id("channel"),
        "member": {"user": {"id": "D1"}},
        "data": {"name": "ping", "options": [{"name": "start"}]}
    });

    let response = server.post_interaction(&payload).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(reply_content(&body), "Unrecognized command: ping");
}

// ============================================================================
// Start flow
// ============================================================================

#[tokio::test]
async fn test_start_registers_channel_idempotently() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let guild_id = unique_id("guild");
    let channel_id = unique_id("channel");
    let payload = civ_command(&guild_id, &channel_id, "D1", json!([{"name": "start"}]));

    let response = server.post_interaction(&payload).await.unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    let first = reply_content(&body).to_string();
    assert!(first.contains("http://roze.test/_/"));

    // Same channel again: the identical reply, same roze id included.
    let response = server.post_interaction(&payload).await.unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(reply_content(&body), first);
}

// ============================================================================
// Identity claim flow
// ============================================================================

#[tokio::test]
async fn test_iam_claim_reclaim_and_reassign() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let guild_id = unique_id("guild");
    let channel_id = unique_id("channel");

    // A raw SteamID64 short-circuits the resolver, keeping this test
    // off the network.
    let steam_id = "76561197960287930";
    let iam = |user: &str| {
        civ_command(
            &guild_id,
            &channel_id,
            user,
            json!([{"name": "iam", "options": [{"value": steam_id}]}]),
        )
    };

    let response = server.post_interaction(&iam("D1")).await.unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        reply_content(&body),
        format!("Got it. {steam_id} is <@D1>.")
    );

    let response = server.post_interaction(&iam("D1")).await.unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        reply_content(&body),
        format!("You are already {steam_id}, <@D1>.")
    );

    let response = server.post_interaction(&iam("D2")).await.unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        reply_content(&body),
        format!("Updating {steam_id}. Was <@D1>. Now <@D2>.")
    );
}

// ============================================================================
// Game webhook relay
// ============================================================================

#[tokio::test]
async fn test_relay_with_unknown_roze_id_is_404() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post_json("/_/zzzz", &json!({"content": "It is your turn"}))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
