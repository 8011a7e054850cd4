/**
 * OpenAI-Compatible Chat Completions Provider
 *
 * DeepSeek and Tongyi (DashScope compatible mode) both expose
 * `POST {base_url}/chat/completions`. History roles map `user` → `user` and
 * `ai` → `assistant`. The history already ends with the new user turn, so
 * the prompt is not sent a second time. The reply is
 * `choices[0].message.content`.
 */

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::backend::providers::{check_status, ChatProvider, ProviderError};
use crate::shared::{HistoryTurn, Role};

const CHAT_COMPLETIONS_PATH: &str = "chat/completions";

#[derive(Serialize)]
struct CompletionMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<CompletionMessage<'a>>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionReply,
}

#[derive(Deserialize)]
struct CompletionReply {
    content: Option<String>,
}

fn completion_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Ai => "assistant",
    }
}

pub struct CompletionProvider {
    name: String,
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl CompletionProvider {
    pub fn new(
        name: impl Into<String>,
        client: Client,
        base_url: &str,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            client,
            endpoint: format!("{}/{}", base_url.trim_end_matches('/'), CHAT_COMPLETIONS_PATH),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl ChatProvider for CompletionProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate_reply(
        &self,
        _prompt: &str,
        history: &[HistoryTurn],
    ) -> Result<String, ProviderError> {
        let messages: Vec<CompletionMessage<'_>> = history
            .iter()
            .map(|turn| CompletionMessage {
                role: completion_role(turn.role),
                content: &turn.content,
            })
            .collect();

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest {
                model: &self.model,
                messages,
            })
            .send()
            .await?;

        let body: CompletionResponse = check_status(response).await?.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::MalformedResponse("no choices in response".to_string()))
    }
}
