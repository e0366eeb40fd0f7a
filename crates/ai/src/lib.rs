//! `viewsmith-ai` — the code-generation model boundary.
//!
//! This crate owns everything between a validated generation request and the
//! raw model reply: message assembly, the `CodeModel` seam the API depends
//! on, the OpenAI-compatible HTTP implementation, and extraction of the
//! fenced code block from whatever the model returned.

pub mod extract;
pub mod model;
pub mod openai;
pub mod prompt;

pub use extract::extract_code_block;
pub use model::{ChatMessage, CodeModel, ContentPart, ImageUrl, MessageContent, ModelError, Role};
pub use openai::OpenAiCompatModel;
pub use prompt::{STARTER_FRAGMENT, build_messages};
