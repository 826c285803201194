use super::truncate_chars;

/// Phrases that mark a question as chit-chat rather than an academic
/// problem. Matching is substring containment over the lower-cased
/// question, so short phrases deliberately over-trigger ("help me solve"
/// still routes to help).
const GENERAL_PATTERNS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
    "how are you",
    "what can you do",
    "help",
    "who are you",
];

/// Cap applied to the canned reply when it is echoed back inside the
/// response context.
pub const GENERAL_REPLY_MAX_CHARS: usize = 500;

const HI_REPLY: &str = "Hi! 👋 I'm your JEE study assistant. I can help you with Physics, \
Chemistry, and Mathematics problems. Would you like to:\n\n\
• Solve a specific JEE problem?\n\
• Understand a concept?\n\
• Practice with example questions?\n\n\
Just ask me anything related to JEE preparation!";

const HELLO_REPLY: &str = "Hello! 👋 I'm here to help with your JEE preparation. What subject \
would you like to focus on - Physics, Chemistry, or Mathematics?";

const HELP_REPLY: &str = "I'm your JEE study assistant! I can help you:\n\n\
• Solve JEE problems step by step\n\
• Explain complex concepts\n\
• Provide practice questions\n\
• Share exam tips and strategies\n\n\
What would you like help with?";

const DEFAULT_REPLY: &str = "Hello! 👋 I'm your JEE study assistant. I specialize in Physics, \
Chemistry, and Mathematics. How can I help you with your JEE preparation today?";

/// True when the question is a greeting or meta question rather than a
/// problem. These are answered from canned text without touching the LLM.
pub fn is_general_query(question: &str) -> bool {
    let question_lower = question.to_lowercase();
    GENERAL_PATTERNS
        .iter()
        .any(|pattern| question_lower.contains(pattern))
}

/// The canned reply for a general query: first matching key wins, with a
/// default greeting as fallback.
pub fn general_reply(question: &str) -> &'static str {
    let question_lower = question.to_lowercase();
    for (key, reply) in [("hi", HI_REPLY), ("hello", HELLO_REPLY), ("help", HELP_REPLY)] {
        if question_lower.contains(key) {
            return reply;
        }
    }
    DEFAULT_REPLY
}

/// The reply as stored in the echoed context, capped at
/// [`GENERAL_REPLY_MAX_CHARS`].
pub fn general_reply_for_context(reply: &str) -> &str {
    truncate_chars(reply, GENERAL_REPLY_MAX_CHARS)
}
