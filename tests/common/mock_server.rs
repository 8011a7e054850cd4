//! Mock server helpers for integration tests
//!
//! Wiremock servers standing in for the AI providers' HTTP APIs.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const WENXIN_PATH: &str = "/wenxin/chat";

/// Wenxin endpoint answering every request with `{ "reply": reply }`
pub async fn mock_wenxin(reply: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(WENXIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": reply })))
        .mount(&server)
        .await;
    server
}

/// OpenAI-compatible endpoint answering with a single choice
pub async fn mock_completion(reply: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": reply } }]
        })))
        .mount(&server)
        .await;
    server
}

/// Endpoint that fails every request with `status`
pub async fn mock_failure(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(status).set_body_string("provider unavailable"))
        .mount(&server)
        .await;
    server
}
