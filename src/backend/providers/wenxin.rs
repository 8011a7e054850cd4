/**
 * Wenxin Provider
 *
 * Posts `{ "prompt": ..., "history": [{ "role", "content" }, ...] }` to the
 * configured endpoint with the API key as a bearer token. The reply is the
 * non-empty `reply` field of a JSON body. Otherwise the body itself is the
 * reply: a bare JSON string verbatim, other JSON as its text, and a
 * non-JSON body as raw text.
 */

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::backend::providers::{check_status, ChatProvider, ProviderError};
use crate::shared::HistoryTurn;

#[derive(Serialize)]
struct WenxinRequest<'a> {
    prompt: &'a str,
    history: &'a [HistoryTurn],
}

pub struct WenxinProvider {
    client: Client,
    api_url: String,
    api_key: String,
}

impl WenxinProvider {
    pub fn new(client: Client, api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }
}

fn extract_reply(body: String) -> Result<String, ProviderError> {
    let Ok(json) = serde_json::from_str::<Value>(&body) else {
        if body.trim().is_empty() {
            return Err(ProviderError::MalformedResponse("empty body".to_string()));
        }
        return Ok(body);
    };

    match json {
        Value::Object(ref fields) => match fields.get("reply") {
            Some(Value::String(reply)) if !reply.is_empty() => Ok(reply.clone()),
            Some(Value::String(_)) | Some(Value::Null) | None => Ok(json.to_string()),
            Some(other) => Err(ProviderError::MalformedResponse(format!(
                "reply is not a string: {}",
                other
            ))),
        },
        Value::String(reply) => Ok(reply),
        Value::Null => Err(ProviderError::MalformedResponse("empty body".to_string())),
        other => Ok(other.to_string()),
    }
}

#[async_trait]
impl ChatProvider for WenxinProvider {
    fn name(&self) -> &str {
        "wenxin"
    }

    async fn generate_reply(
        &self,
        prompt: &str,
        history: &[HistoryTurn],
    ) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&WenxinRequest { prompt, history })
            .send()
            .await?;

        let body = check_status(response).await?.text().await?;
        extract_reply(body)
    }
}
