use super::truncate_chars;
use crate::models::Interaction;

/// Sentinel rendered when a conversation has no prior turns.
pub const NO_PREVIOUS_CONTEXT: &str = "No previous context.";

/// Per-message cap inside the history block.
const MESSAGE_MAX_CHARS: usize = 300;

/// Render the last `limit` interactions as a plain-text transcript block.
///
/// Each interaction contributes a `Student:` line for the question and a
/// `Tutor:` line for the response, both capped at 300 characters, in
/// original order.
pub fn format_history(interactions: &[Interaction], limit: u32) -> String {
    let limit = limit as usize;
    let start = interactions.len().saturating_sub(limit);
    let window = &interactions[start..];

    if window.is_empty() {
        return NO_PREVIOUS_CONTEXT.to_string();
    }

    let mut lines = Vec::with_capacity(window.len() * 2);
    for interaction in window {
        lines.push(format!(
            "Student: {}",
            truncate_chars(&interaction.question, MESSAGE_MAX_CHARS)
        ));
        lines.push(format!(
            "Tutor: {}",
            truncate_chars(&interaction.response, MESSAGE_MAX_CHARS)
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InteractionContext;

    fn interaction(question: &str, response: &str) -> Interaction {
        Interaction::new(
            nanoid::nanoid!(),
            "u1".to_string(),
            "s1".to_string(),
            question.to_string(),
            response.to_string(),
            InteractionContext::default(),
        )
    }

    #[test]
    fn empty_history_yields_sentinel() {
        assert_eq!(format_history(&[], 100), NO_PREVIOUS_CONTEXT);
    }

    #[test]
    fn single_interaction_renders_both_roles() {
        let history = [interaction("What is momentum?", "Momentum is mass times velocity.")];
        let block = format_history(&history, 100);
        assert_eq!(
            block,
            "Student: What is momentum?\nTutor: Momentum is mass times velocity."
        );
    }

    #[test]
    fn window_keeps_most_recent_in_original_order() {
        let history: Vec<Interaction> = (0..5)
            .map(|i| interaction(&format!("q{i}"), &format!("a{i}")))
            .collect();
        let block = format_history(&history, 2);
        assert_eq!(block, "Student: q3\nTutor: a3\nStudent: q4\nTutor: a4");
    }

    #[test]
    fn long_messages_are_truncated() {
        let history = [interaction(&"q".repeat(1000), &"a".repeat(1000))];
        let block = format_history(&history, 100);
        for line in block.lines() {
            assert!(line.chars().count() <= "Student: ".len() + 300);
        }
    }

    #[test]
    fn zero_limit_yields_sentinel() {
        let history = [interaction("q", "a")];
        assert_eq!(format_history(&history, 0), NO_PREVIOUS_CONTEXT);
    }
}
