//! OpenAI-compatible chat-completions client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::{ChatMessage, CodeModel, ModelError};

/// Generation keeps a low temperature: the reply must be code, not prose.
const TEMPERATURE: f32 = 0.5;

/// `CodeModel` backed by any endpoint speaking the OpenAI chat-completions
/// wire format. The base URL points at the provider's `/v1` root, so proxies
/// and relays work unchanged.
#[derive(Clone)]
pub struct OpenAiCompatModel {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiCompatModel {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CodeModel for OpenAiCompatModel {
    async fn complete(&self, model: &str, messages: Vec<ChatMessage>) -> Result<String, ModelError> {
        let body = ChatCompletionRequest {
            model,
            messages,
            temperature: TEMPERATURE,
        };

        tracing::debug!(model, "requesting completion");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ModelError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            // Providers wrap failures as {"error": {"message": ...}}; fall
            // back to the raw body when that shape is absent.
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|wrapper| wrapper.error.message)
                .unwrap_or(text);
            return Err(ModelError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Request(format!("unreadable completion reply: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ModelError::EmptyReply)
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}
