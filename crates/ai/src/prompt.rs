//! Message assembly for the two generation modes.

use crate::model::{ChatMessage, ContentPart, ImageUrl, MessageContent};

const SYSTEM_PROMPT: &str = r#"You are a UI generator. The user describes the view they want; you reply with the complete code for it.

Rules:
- Reply with exactly one fenced code block and nothing else. No prose before or after it.
- The block must contain a single self-contained HTML fragment: one root element, inline styles or a <style> tag scoped to it, no external scripts, stylesheets, or imports.
- The fragment must be complete enough to render as-is when injected into a page.
- When existing code is provided, produce the full updated fragment, never a diff or a partial snippet."#;

/// Seed "existing code" for a user who has never generated anything.
pub const STARTER_FRAGMENT: &str = r#"<div>
  <h1>Welcome to your new component!</h1>
</div>"#;

/// Build the conversation for one generation request.
///
/// `existing` is the caller's current artifact when the request asked to
/// modify it. An attached image overrides the modify template: the user
/// message becomes the raw prompt plus the image part, matching the
/// long-standing behavior clients depend on.
pub fn build_messages(
    prompt: &str,
    image: Option<&str>,
    existing: Option<&str>,
) -> Vec<ChatMessage> {
    let user = if let Some(url) = image {
        MessageContent::Parts(vec![
            ContentPart::Text {
                text: prompt.to_string(),
            },
            ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: url.to_string(),
                },
            },
        ])
    } else if let Some(code) = existing {
        MessageContent::Text(format!(
            "Based on the following existing code:\n\n```tsx\n{code}\n```\n\n{prompt}, \
             please generate the complete updated code block directly."
        ))
    } else {
        MessageContent::Text(format!(
            "Design the view the following request describes and reply with the code block \
             directly, without any extra text. Request: {prompt}"
        ))
    };

    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user)]
}
