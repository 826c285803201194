//! The tutoring core: pure functions that classify a question, format
//! conversation history, assemble the prompt, and check the shape of a
//! generated answer. Everything here is deterministic and side-effect free;
//! the request orchestration lives in [`crate::services`].

mod approach;
mod greeting;
mod history;
mod prompt;
mod validate;

pub use approach::{select_approach, Approach};
pub use greeting::{
    general_reply, general_reply_for_context, is_general_query, GENERAL_REPLY_MAX_CHARS,
};
pub use history::{format_history, NO_PREVIOUS_CONTEXT};
pub use prompt::{build_prompt, TutorPrompt};
pub use validate::{validate_response, REQUIRED_SECTIONS};

/// Truncate to at most `max` characters, respecting char boundaries.
pub(crate) fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
