//! Generation request/response wire shapes and the submission rules the
//! shell enforces before and after the one POST it ever issues.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{DomainError, DomainResult};
use crate::id::UserId;

/// Model identifier the shell starts with; the settings drawer can override it.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-latest";

/// Body of `POST /generate_jsx`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    /// Data-URL encoded upload, when the user attached one.
    pub image: Option<String>,
    pub modify_existing: bool,
    pub model: String,
    pub user_id: UserId,
}

impl GenerateRequest {
    /// The only payload invariant: a non-blank prompt.
    pub fn validate(&self) -> DomainResult<()> {
        if self.prompt.trim().is_empty() {
            return Err(DomainError::validation("prompt must not be blank"));
        }
        Ok(())
    }
}

/// 2xx reply of `POST /generate_jsx`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error body shape used on every non-2xx API reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Submission is enabled iff the prompt and token are both non-blank and no
/// request is already in flight.
pub fn can_submit(prompt: &str, token: &str, in_flight: bool) -> bool {
    !prompt.trim().is_empty() && !token.trim().is_empty() && !in_flight
}

/// Everything a generation attempt can surface in the error banner.
///
/// The display strings are fixed; the shell renders them verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The model reply contained no fenced code block (HTTP 404).
    #[error("No JSX code block found in the response")]
    NoCodeBlock,

    /// The API failed internally (HTTP 500 with a `detail` message).
    #[error("Server error: {0}")]
    Server(String),

    /// Any other non-2xx status.
    #[error("HTTP error! status: {0}")]
    Http(u16),

    /// 2xx reply with `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// The request never produced a parseable reply.
    #[error("{0}")]
    Transport(String),
}

impl SubmitError {
    /// Classify a non-2xx status into its fixed user-facing message.
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        match status {
            404 => Self::NoCodeBlock,
            500 => Self::Server(detail.unwrap_or_else(|| "unknown".to_string())),
            other => Self::Http(other),
        }
    }

    /// A 2xx reply that reported failure.
    pub fn rejected(message: Option<String>) -> Self {
        Self::Rejected(
            message.unwrap_or_else(|| "Operation failed for unknown reasons".to_string()),
        )
    }

    /// A network or parse failure with no usable reply.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Self::Transport("An unexpected error occurred".to_string())
        } else {
            Self::Transport(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(user_id: UserId) -> GenerateRequest {
        GenerateRequest {
            prompt: "build a card".to_string(),
            image: None,
            modify_existing: true,
            model: DEFAULT_MODEL.to_string(),
            user_id,
        }
    }

    #[test]
    fn request_body_matches_the_wire_contract() {
        let user_id = UserId::new();
        let body = serde_json::to_value(request(user_id)).unwrap();
        assert_eq!(
            body,
            json!({
                "prompt": "build a card",
                "image": null,
                "modify_existing": true,
                "model": "claude-3-5-sonnet-latest",
                "user_id": user_id.to_string(),
            })
        );
    }

    #[test]
    fn blank_prompt_fails_validation() {
        let mut req = request(UserId::new());
        req.prompt = "   ".to_string();
        assert!(req.validate().is_err());
        req.prompt = "x".to_string();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn submit_gate_requires_prompt_token_and_no_inflight_request() {
        assert!(can_submit("build a card", "abc", false));
        assert!(!can_submit("", "abc", false));
        assert!(!can_submit("   ", "abc", false));
        assert!(!can_submit("build a card", "", false));
        assert!(!can_submit("build a card", "  ", false));
        assert!(!can_submit("build a card", "abc", true));
    }

    #[test]
    fn status_404_is_the_fixed_missing_code_block_message() {
        let err = SubmitError::from_status(404, None);
        assert_eq!(err.to_string(), "No JSX code block found in the response");
    }

    #[test]
    fn status_500_carries_the_server_detail() {
        let err = SubmitError::from_status(500, Some("boom".to_string()));
        assert_eq!(err.to_string(), "Server error: boom");
    }

    #[test]
    fn other_statuses_report_generically() {
        let err = SubmitError::from_status(418, Some("ignored".to_string()));
        assert_eq!(err.to_string(), "HTTP error! status: 418");
    }

    #[test]
    fn rejected_reply_prefers_the_server_message() {
        assert_eq!(
            SubmitError::rejected(Some("quota exceeded".to_string())).to_string(),
            "quota exceeded"
        );
        assert_eq!(
            SubmitError::rejected(None).to_string(),
            "Operation failed for unknown reasons"
        );
    }

    #[test]
    fn transport_failures_fall_back_to_a_generic_message() {
        assert_eq!(
            SubmitError::transport("connection refused").to_string(),
            "connection refused"
        );
        assert_eq!(
            SubmitError::transport("").to_string(),
            "An unexpected error occurred"
        );
    }

    #[test]
    fn response_message_is_optional_on_the_wire() {
        let parsed: GenerateResponse = serde_json::from_value(json!({"success": true})).unwrap();
        assert_eq!(
            parsed,
            GenerateResponse {
                success: true,
                message: None
            }
        );
    }
}
