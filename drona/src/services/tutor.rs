use std::sync::Arc;

use nanoid::nanoid;

use crate::config::Config;
use crate::db::DatabaseBackend;
use crate::error::{DronaError, Result};
use crate::llm::{CompletionOptions, LlmProvider};
use crate::models::{ConversationContext, Interaction, InteractionContext};
use crate::tutor::{
    build_prompt, general_reply, is_general_query, select_approach, validate_response, Approach,
};

/// Outcome of one solve request.
#[derive(Debug, Clone)]
pub struct Solved {
    /// The question that was actually answered (pinned text when the
    /// question field was empty).
    pub question: String,
    /// The full answer returned to the student.
    pub solution: String,
    /// The answer as echoed inside the response context (greeting replies
    /// are capped there).
    pub context_response: String,
    /// Conversation history after this turn, most-recent-last.
    pub chat_history: Vec<Interaction>,
    /// Response style used for the prompt. Absent on the greeting path.
    pub approach: Option<Approach>,
    /// Structural check verdict. Absent on the greeting path.
    pub structure_ok: Option<bool>,
}

/// Sequences one question through history lookup, prompt assembly,
/// completion, validation, and persistence.
///
/// History reads and writes are best-effort: the store is an enhancement,
/// not a requirement for answering, so its failures are logged and the
/// request continues with what it has.
pub struct TutorService {
    db: Arc<dyn DatabaseBackend>,
    llm: LlmProvider,
    config: Arc<Config>,
}

impl TutorService {
    pub fn new(db: Arc<dyn DatabaseBackend>, llm: LlmProvider, config: Arc<Config>) -> Self {
        Self { db, llm, config }
    }

    pub async fn solve(&self, question: &str, context: &ConversationContext) -> Result<Solved> {
        let question = question.trim();
        let effective_question = if !question.is_empty() {
            question
        } else {
            context
                .pinned_text
                .as_deref()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .ok_or_else(|| DronaError::Validation("Question is required".to_string()))?
        };

        // Chit-chat short-circuits to a canned reply: no completion call,
        // nothing written to the durable log.
        if is_general_query(effective_question) {
            let reply = general_reply(effective_question);
            let chat_history = self.fetch_history(context).await;
            return Ok(Solved {
                question: effective_question.to_string(),
                solution: reply.to_string(),
                context_response: crate::tutor::general_reply_for_context(reply).to_string(),
                chat_history,
                approach: None,
                structure_ok: None,
            });
        }

        let chat_history = self.fetch_history(context).await;

        let approach = select_approach(effective_question);
        let prompt = build_prompt(effective_question, approach, context, &chat_history);

        let options = self.llm.config().map(CompletionOptions::from_config);
        let solution = self
            .llm
            .complete(&prompt.user, Some(prompt.system.as_str()), options.as_ref())
            .await?;
        if solution.trim().is_empty() {
            return Err(DronaError::Llm("LLM returned an empty solution".to_string()));
        }

        let structure_ok = validate_response(&solution);
        if !structure_ok {
            if self.config.tutor.enforce_validation {
                return Err(DronaError::Llm(
                    "Generated response failed structural validation".to_string(),
                ));
            }
            tracing::warn!(approach = %approach, "Generated response is missing expected structure");
        }

        self.persist(effective_question, &solution, context).await;

        // Re-read so the caller sees the turn that was just saved.
        let chat_history = self.fetch_history(context).await;

        Ok(Solved {
            question: effective_question.to_string(),
            context_response: solution.clone(),
            solution,
            chat_history,
            approach: Some(approach),
            structure_ok: Some(structure_ok),
        })
    }

    async fn fetch_history(&self, context: &ConversationContext) -> Vec<Interaction> {
        if !context.has_identity() {
            return Vec::new();
        }
        let user_id = context.user_id.as_deref().unwrap_or_default();
        let session_id = context.session_id.as_deref().unwrap_or_default();
        let limit = context.history_limit.min(self.config.tutor.history_limit);

        match self
            .db
            .get_recent_interactions(user_id, session_id, limit)
            .await
        {
            Ok(history) => history,
            Err(error) => {
                tracing::warn!(error = %error, user_id, session_id, "Failed to fetch chat history");
                Vec::new()
            }
        }
    }

    async fn persist(&self, question: &str, solution: &str, context: &ConversationContext) {
        if !context.has_identity() {
            return;
        }

        let interaction = Interaction::new(
            nanoid!(),
            context.user_id.clone().unwrap_or_default(),
            context.session_id.clone().unwrap_or_default(),
            question.to_string(),
            solution.to_string(),
            InteractionContext {
                subject: context.subject.clone(),
                topic: context.topic.clone(),
                interaction_type: context.interaction_type,
                pinned_text: context.pinned_text.clone(),
            },
        );

        if let Err(error) = self.db.append_interaction(&interaction).await {
            tracing::error!(error = %error, "Failed to save interaction");
        }
    }
}
