//! Chat API integration tests
//!
//! Tests for chat turns, history, and deletion over in-memory stores.

use axum::http::StatusCode;
use chatrelay::backend::chat::handlers::delete::MESSAGE_DELETED;
use chatrelay::backend::chat::handlers::history::HISTORY_DELETED;
use chatrelay::shared::Role;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::assert_error_code;
use crate::common::{create_unique_test_user, expired_token, FlakyTranscriptStore, TestApp};

fn contents(messages: &[serde_json::Value]) -> Vec<(String, String)> {
    messages
        .iter()
        .map(|m| {
            (
                m["role"].as_str().unwrap_or_default().to_string(),
                m["content"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect()
}

fn pair(role: &str, content: &str) -> (String, String) {
    (role.to_string(), content.to_string())
}

#[tokio::test]
async fn test_chat_requires_token() {
    let app = TestApp::new();

    let response = app
        .post("/chat", None, json!({ "message": "hello", "model": "wenxin" }))
        .await;
    assert_error_code!(response, StatusCode::UNAUTHORIZED, "unauthorized");

    let response = app.get("/chat/history", None).await;
    assert_error_code!(response, StatusCode::UNAUTHORIZED, "unauthorized");

    let response = app.delete("/chat/history", None).await;
    assert_error_code!(response, StatusCode::UNAUTHORIZED, "unauthorized");
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    let user_id = app.state.tokens.user_id(&user.token).unwrap();

    let response = app.get("/chat/history", Some(&expired_token(user_id))).await;
    assert_error_code!(response, StatusCode::UNAUTHORIZED, "invalid_token");
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = TestApp::new();

    let response = app.chat("not-a-jwt", "hello", "wenxin").await;
    assert_error_code!(response, StatusCode::UNAUTHORIZED, "invalid_token");
    assert!(app.echo.calls().is_empty());
}

#[tokio::test]
async fn test_chat_turn_appends_user_then_ai() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let response = app.chat(&user.token, "hello", "wenxin").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "reply": "echo: hello" }));

    let messages = app.history(&user.token).await;
    assert_eq!(
        contents(&messages),
        vec![pair("user", "hello"), pair("ai", "echo: hello")]
    );
    for message in &messages {
        assert!(Uuid::parse_str(message["id"].as_str().unwrap()).is_ok());
        assert!(message["timestamp"].is_string());
    }
}

#[tokio::test]
async fn test_provider_receives_full_transcript() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    app.chat(&user.token, "first", "wenxin").await;
    app.chat(&user.token, "second", "wenxin").await;

    let calls = app.echo.calls();
    assert_eq!(calls.len(), 2);
    let turns = |index: usize| -> Vec<(Role, String)> {
        calls[index]
            .history
            .iter()
            .map(|turn| (turn.role, turn.content.clone()))
            .collect()
    };

    assert_eq!(calls[0].prompt, "first");
    assert_eq!(turns(0), vec![(Role::User, "first".to_string())]);

    assert_eq!(calls[1].prompt, "second");
    assert_eq!(
        turns(1),
        vec![
            (Role::User, "first".to_string()),
            (Role::Ai, "echo: first".to_string()),
            (Role::User, "second".to_string()),
        ]
    );

    assert_eq!(app.history(&user.token).await.len(), 4);
}

#[tokio::test]
async fn test_unsupported_provider_writes_nothing() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let response = app.chat(&user.token, "hello", "gpt-17").await;
    assert_error_code!(response, StatusCode::BAD_REQUEST, "unsupported_provider");

    assert!(app.history(&user.token).await.is_empty());
}

#[tokio::test]
async fn test_provider_failure_keeps_user_message() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let response = app.chat(&user.token, "hello", "broken").await;
    assert_error_code!(response, StatusCode::INTERNAL_SERVER_ERROR, "upstream_failure");

    let messages = app.history(&user.token).await;
    assert_eq!(contents(&messages), vec![pair("user", "hello")]);
}

#[tokio::test]
async fn test_store_failure_on_user_message() {
    let app = TestApp::with_transcripts(Arc::new(FlakyTranscriptStore::failing_after(0)));
    let user = create_unique_test_user(&app).await;

    let response = app.chat(&user.token, "hello", "wenxin").await;
    assert_error_code!(response, StatusCode::INTERNAL_SERVER_ERROR, "internal");
    assert!(response.json()["error"].as_str().unwrap().starts_with("chat failed:"));

    assert!(app.echo.calls().is_empty());
    assert!(app.history(&user.token).await.is_empty());
}

#[tokio::test]
async fn test_store_failure_on_reply_keeps_user_message() {
    let app = TestApp::with_transcripts(Arc::new(FlakyTranscriptStore::failing_after(1)));
    let user = create_unique_test_user(&app).await;

    let response = app.chat(&user.token, "hello", "wenxin").await;
    assert_error_code!(response, StatusCode::INTERNAL_SERVER_ERROR, "internal");
    assert!(response.json()["error"].as_str().unwrap().starts_with("chat failed:"));

    assert_eq!(app.echo.calls().len(), 1);
    let messages = app.history(&user.token).await;
    assert_eq!(contents(&messages), vec![pair("user", "hello")]);
}

#[tokio::test]
async fn test_malformed_chat_body_is_rejected() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let response = app
        .post("/chat", Some(&user.token), json!({ "message": "hello" }))
        .await;
    assert_error_code!(response, StatusCode::BAD_REQUEST, "validation");

    let response = app.request(axum::http::Method::POST, "/chat", Some(&user.token), None).await;
    assert_error_code!(response, StatusCode::BAD_REQUEST, "validation");
    assert!(app.history(&user.token).await.is_empty());
}

#[tokio::test]
async fn test_empty_message_is_rejected() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let response = app.chat(&user.token, "", "wenxin").await;
    assert_error_code!(response, StatusCode::BAD_REQUEST, "validation");
    assert!(app.history(&user.token).await.is_empty());
}

#[tokio::test]
async fn test_history_without_transcript_is_empty() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let response = app.get("/chat/history", Some(&user.token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "messages": [] }));
}

#[tokio::test]
async fn test_delete_message_preserves_order() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    app.chat(&user.token, "one", "wenxin").await;
    app.chat(&user.token, "two", "wenxin").await;

    let messages = app.history(&user.token).await;
    let target = messages[1]["id"].as_str().unwrap().to_string();

    let response = app
        .delete(&format!("/chat/message/{}", target), Some(&user.token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), MESSAGE_DELETED);

    let remaining = app.history(&user.token).await;
    assert_eq!(
        contents(&remaining),
        vec![pair("user", "one"), pair("user", "two"), pair("ai", "echo: two")]
    );
}

#[tokio::test]
async fn test_delete_unknown_message_is_not_found() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    app.chat(&user.token, "hello", "wenxin").await;
    let before = app.history(&user.token).await;

    let response = app
        .delete(&format!("/chat/message/{}", Uuid::new_v4()), Some(&user.token))
        .await;
    assert_error_code!(response, StatusCode::NOT_FOUND, "not_found");

    let response = app.delete("/chat/message/not-a-uuid", Some(&user.token)).await;
    assert_error_code!(response, StatusCode::NOT_FOUND, "not_found");

    assert_eq!(app.history(&user.token).await, before);
}

#[tokio::test]
async fn test_delete_message_without_transcript_is_not_found() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let response = app
        .delete(&format!("/chat/message/{}", Uuid::new_v4()), Some(&user.token))
        .await;
    assert_error_code!(response, StatusCode::NOT_FOUND, "not_found");
}

#[tokio::test]
async fn test_delete_history_is_idempotent() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    app.chat(&user.token, "hello", "wenxin").await;

    let response = app.delete("/chat/history", Some(&user.token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), HISTORY_DELETED);
    assert!(app.history(&user.token).await.is_empty());

    let response = app.delete("/chat/history", Some(&user.token)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_transcripts_are_per_user() {
    let app = TestApp::new();
    let alice = create_unique_test_user(&app).await;
    let bob = create_unique_test_user(&app).await;

    app.chat(&alice.token, "secret", "wenxin").await;
    let alice_messages = app.history(&alice.token).await;
    assert!(app.history(&bob.token).await.is_empty());

    let target = alice_messages[0]["id"].as_str().unwrap();
    app.chat(&bob.token, "hi", "wenxin").await;
    let response = app
        .delete(&format!("/chat/message/{}", target), Some(&bob.token))
        .await;
    assert_error_code!(response, StatusCode::NOT_FOUND, "not_found");
    assert_eq!(app.history(&alice.token).await, alice_messages);

    app.delete("/chat/history", Some(&bob.token)).await;
    assert_eq!(app.history(&alice.token).await.len(), 2);
}
