use super::{format_history, Approach};
use crate::models::{ConversationContext, Interaction};

/// The two messages sent to the chat model: a system instruction carrying
/// all context and a user message carrying the raw question.
#[derive(Debug, Clone)]
pub struct TutorPrompt {
    pub system: String,
    pub user: String,
}

/// Marker embedded when the request carried an image payload.
const IMAGE_MARKER: &str = "[Image provided for reference]";

/// Output contract with the model. Downstream consumers render the answer
/// as plain text, so the model must not emit LaTeX or markup.
const FORMAT_RULES: &str = "\
Format your response following these rules:
1. Use plain text without LaTeX markers or special characters
2. For mathematical expressions:
   - Use simple text: x^2 for powers
   - Use / for fractions: a/b
   - Use * for multiplication
   - Write units in parentheses: (m/s), (kg), etc.
3. Structure your response with:
   - Clear numbered sections
   - Bullet points using simple dashes (-)
   - Line breaks between sections
   - Simple indentation for sub-points
4. For equations:
   - Write them on separate lines
   - Use = sign with spaces around it
   - Example: F = m * a
   - For complex equations, break into multiple lines
5. For explanations:
   - Use step-by-step numbering
   - Include clear examples
   - Explain concepts without technical markup";

fn subject_framing(subject: &str) -> &'static str {
    match subject.to_lowercase().as_str() {
        "physics" => "As a Physics expert, focus on physical concepts, laws, and their applications.",
        "chemistry" => {
            "As a Chemistry expert, focus on chemical principles, reactions, and molecular understanding."
        }
        "mathematics" => {
            "As a Mathematics expert, focus on mathematical concepts, proofs, and problem-solving strategies."
        }
        _ => "As a JEE expert, provide comprehensive guidance across Physics, Chemistry, and Mathematics.",
    }
}

/// Assemble the instruction/question message pair for one completion.
///
/// The system message stacks the tutor framing, subject framing, the
/// selected response style, the history transcript, echoed request
/// context, and the fixed formatting contract.
pub fn build_prompt(
    question: &str,
    approach: Approach,
    context: &ConversationContext,
    history: &[Interaction],
) -> TutorPrompt {
    let subject = context.subject.as_deref().unwrap_or("");
    let topic = context.topic.as_deref().unwrap_or("");
    let pinned_text = context.pinned_text.as_deref().unwrap_or("");
    let image_context = if context.image.is_some() {
        IMAGE_MARKER
    } else {
        ""
    };

    let history_context = format_history(history, context.history_limit);

    let system = format!(
        "You are an expert friendly JEE tutor specialized in Physics, Chemistry, and Mathematics.\n\
         {subject_instruction}\n\
         \n\
         Response style:\n\
         {approach_instructions}\n\
         \n\
         Previous conversation context:\n\
         {history_context}\n\
         \n\
         Additional context:\n\
         Subject: {subject}\n\
         Topic: {topic}\n\
         {pinned_text}\n\
         {image_context}\n\
         \n\
         {format_rules}\n\
         \n\
         If the student asks about previous conversations or history, summarize the context above \
         using this same formatting.\n\
         \n\
         Keep all mathematical and scientific content accurate while using this simplified format.\n\
         Include specific details from previous questions and their solutions.",
        subject_instruction = subject_framing(subject),
        approach_instructions = approach.instructions(),
        history_context = history_context,
        subject = subject,
        topic = topic,
        pinned_text = pinned_text,
        image_context = image_context,
        format_rules = FORMAT_RULES,
    );

    TutorPrompt {
        system,
        user: question.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InteractionContext;
    use crate::tutor::NO_PREVIOUS_CONTEXT;

    fn context_for(subject: &str) -> ConversationContext {
        ConversationContext {
            subject: Some(subject.to_string()),
            topic: Some("quadratics".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn mathematics_subject_gets_mathematics_framing() {
        let prompt = build_prompt(
            "Solve x^2 - 4 = 0",
            Approach::StepByStep,
            &context_for("mathematics"),
            &[],
        );
        assert!(prompt.system.contains("As a Mathematics expert"));
        assert_eq!(prompt.user, "Solve x^2 - 4 = 0");
    }

    #[test]
    fn unknown_subject_falls_back_to_generic_framing() {
        let prompt = build_prompt(
            "Solve this",
            Approach::StepByStep,
            &context_for("biology"),
            &[],
        );
        assert!(prompt.system.contains("As a JEE expert"));
    }

    #[test]
    fn subject_matching_is_case_insensitive() {
        let prompt = build_prompt(
            "Why does ice float?",
            Approach::Basics,
            &context_for("Physics"),
            &[],
        );
        assert!(prompt.system.contains("As a Physics expert"));
    }

    #[test]
    fn empty_history_embeds_sentinel() {
        let prompt = build_prompt(
            "Solve x^2 - 4 = 0",
            Approach::StepByStep,
            &context_for("mathematics"),
            &[],
        );
        assert!(prompt.system.contains(NO_PREVIOUS_CONTEXT));
    }

    #[test]
    fn history_lines_are_embedded() {
        let history = [Interaction::new(
            "i1".to_string(),
            "u1".to_string(),
            "s1".to_string(),
            "What is momentum?".to_string(),
            "Mass times velocity.".to_string(),
            InteractionContext::default(),
        )];
        let prompt = build_prompt(
            "And impulse?",
            Approach::Basics,
            &context_for("physics"),
            &history,
        );
        assert!(prompt.system.contains("Student: What is momentum?"));
        assert!(prompt.system.contains("Tutor: Mass times velocity."));
    }

    #[test]
    fn image_presence_adds_marker() {
        let mut context = context_for("physics");
        context.image = Some(vec![0u8; 16]);
        let prompt = build_prompt("What does the figure show?", Approach::Basics, &context, &[]);
        assert!(prompt.system.contains(IMAGE_MARKER));

        context.image = None;
        let prompt = build_prompt("What does the figure show?", Approach::Basics, &context, &[]);
        assert!(!prompt.system.contains(IMAGE_MARKER));
    }

    #[test]
    fn approach_instructions_are_embedded() {
        let prompt = build_prompt(
            "show me a practice problem",
            Approach::Examples,
            &context_for("mathematics"),
            &[],
        );
        assert!(prompt.system.contains("Provide similar problems"));
    }

    #[test]
    fn format_rules_are_always_present() {
        let prompt = build_prompt("anything", Approach::StepByStep, &context_for(""), &[]);
        assert!(prompt.system.contains("Use plain text without LaTeX markers"));
        assert!(prompt.system.contains("Bullet points using simple dashes"));
    }
}
