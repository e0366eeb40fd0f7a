//! The model seam and the chat message shapes it accepts.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// The request never reached the provider or the reply was unreadable.
    #[error("model request failed: {0}")]
    Request(String),

    /// The provider answered with a non-2xx status.
    #[error("model returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// A well-formed reply with no content to extract from.
    #[error("model reply had no content")]
    EmptyReply,
}

/// One message of a chat-completions conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn user(content: MessageContent) -> Self {
        Self {
            role: Role::User,
            content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// Chat message content: a plain string, or multimodal parts when an image
/// rides along with the prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Seam between the API and whatever produces code.
///
/// The production implementation is [`crate::OpenAiCompatModel`]; tests
/// substitute a scripted one.
#[async_trait]
pub trait CodeModel: Send + Sync {
    /// Run one completion and return the raw reply text.
    async fn complete(&self, model: &str, messages: Vec<ChatMessage>) -> Result<String, ModelError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_text_content_serializes_as_a_string() {
        let msg = ChatMessage::system("you are helpful");
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"role": "system", "content": "you are helpful"})
        );
    }

    #[test]
    fn multimodal_content_serializes_as_tagged_parts() {
        let msg = ChatMessage::user(MessageContent::Parts(vec![
            ContentPart::Text {
                text: "build a card".to_string(),
            },
            ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: "data:image/png;base64,AAAA".to_string(),
                },
            },
        ]));
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({
                "role": "user",
                "content": [
                    {"type": "text", "text": "build a card"},
                    {"type": "image_url", "image_url": {"url": "data:image/png;base64,AAAA"}},
                ]
            })
        );
    }
}
