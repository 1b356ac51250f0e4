use axum::http::StatusCode;
use serde_json::json;

mod common;

use common::{send, send_json};

#[tokio::test]
async fn test_greeting_offers_suggestions() {
    let app = common::create_test_app().await;

    let (status, json) = send_json(&app, "GET", "/api/v1/assistant/greeting", "chat-1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["text"]
        .as_str()
        .unwrap()
        .starts_with("Hello! I'm your EduPath AI Assistant."));
    assert_eq!(json["suggestions"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_message_gets_keyword_reply_and_transcript() {
    let app = common::create_test_app().await;

    let (status, reply) = send_json(
        &app,
        "POST",
        "/api/v1/assistant/messages",
        "chat-2",
        Some(json!({ "text": "Tell me about engineering careers" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["type"], "ai");
    assert!(reply["text"]
        .as_str()
        .unwrap()
        .starts_with("Engineering offers diverse career paths"));
    assert_eq!(reply["links"][0]["url"], "/roadmap/cse");

    let (_, transcript) =
        send_json(&app, "GET", "/api/v1/assistant/transcript", "chat-2", None).await;
    let messages = transcript["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["type"], "user");
    assert_eq!(messages[1]["type"], "ai");
}

#[tokio::test]
async fn test_unmatched_message_gets_fallback() {
    let app = common::create_test_app().await;

    let (_, reply) = send_json(
        &app,
        "POST",
        "/api/v1/assistant/messages",
        "chat-3",
        Some(json!({ "text": "what's for lunch?" })),
    )
    .await;

    assert!(reply["text"]
        .as_str()
        .unwrap()
        .starts_with("I'm not sure I understand."));
    assert!(reply.get("links").is_none());
}

#[tokio::test]
async fn test_blank_message_is_rejected() {
    let app = common::create_test_app().await;

    let (status, json) = send_json(
        &app,
        "POST",
        "/api/v1/assistant/messages",
        "chat-4",
        Some(json!({ "text": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_clear_transcript() {
    let app = common::create_test_app().await;

    send_json(
        &app,
        "POST",
        "/api/v1/assistant/messages",
        "chat-5",
        Some(json!({ "text": "physics" })),
    )
    .await;

    let response = send(&app, "DELETE", "/api/v1/assistant/transcript", "chat-5", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (_, transcript) =
        send_json(&app, "GET", "/api/v1/assistant/transcript", "chat-5", None).await;
    assert!(transcript["messages"].as_array().unwrap().is_empty());
}
