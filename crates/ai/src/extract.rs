//! Fenced code block extraction from model replies.

use std::sync::OnceLock;

use regex::Regex;

static FENCE: OnceLock<Regex> = OnceLock::new();

/// Return the body of the first fenced code block in `reply`, if any.
///
/// Accepts untagged fences and the tags the generator is prompted to emit
/// (`jsx`, `tsx`, `html`). Anything outside the first block is ignored.
pub fn extract_code_block(reply: &str) -> Option<String> {
    let fence = FENCE
        .get_or_init(|| Regex::new(r"(?s)```(?:jsx|tsx|html)?\n(.*?)\n```").expect("valid regex"));
    fence
        .captures(reply)
        .map(|captures| captures[1].to_string())
}
