use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DronaError, Result};
use crate::models::{
    ConversationContext, Interaction, InteractionType, DEFAULT_HISTORY_LIMIT,
};
use crate::services::Solved;

/// Request body for `POST /v1/solve`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct SolveRequest {
    /// The question to answer. May be empty when pinned text is supplied.
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub context: SolveContextDto,
}

/// Request-scoped conversation context.
///
/// `pinnedText`/`selectedText` are the historical wire names; the
/// snake_case spellings are accepted as aliases.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct SolveContextDto {
    pub user_id: Option<String>,
    pub session_id: Option<String>,
    /// Number of past interactions to include, defaults to 100.
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,
    pub subject: Option<String>,
    pub topic: Option<String>,
    #[serde(rename = "pinnedText", alias = "pinned_text")]
    pub pinned_text: Option<String>,
    #[serde(rename = "selectedText", alias = "selected_text")]
    pub selected_text: Option<String>,
    #[serde(default)]
    pub interaction_type: InteractionType,
    /// Base64-encoded image payload.
    pub image: Option<String>,
}

fn default_history_limit() -> u32 {
    DEFAULT_HISTORY_LIMIT
}

impl Default for SolveContextDto {
    fn default() -> Self {
        Self {
            user_id: None,
            session_id: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            subject: None,
            topic: None,
            pinned_text: None,
            selected_text: None,
            interaction_type: InteractionType::default(),
            image: None,
        }
    }
}

impl SolveContextDto {
    /// Convert the wire context into the request-scoped domain bundle,
    /// decoding the image payload if one was sent.
    pub fn into_context(self) -> Result<ConversationContext> {
        let image = self
            .image
            .filter(|data| !data.is_empty())
            .map(|data| {
                base64::engine::general_purpose::STANDARD
                    .decode(data.as_bytes())
                    .map_err(|error| {
                        DronaError::Validation(format!("Invalid image encoding: {error}"))
                    })
            })
            .transpose()?;

        Ok(ConversationContext {
            user_id: self.user_id,
            session_id: self.session_id,
            history_limit: self.history_limit,
            subject: self.subject,
            topic: self.topic,
            pinned_text: self.pinned_text,
            selected_text: self.selected_text,
            image,
            interaction_type: self.interaction_type,
        })
    }
}

/// Response for `POST /v1/solve`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct SolveResponse {
    pub solution: String,
    pub context: SolveResponseContext,
}

/// Echo of the conversation state after this turn.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct SolveResponseContext {
    pub current_question: String,
    pub response: String,
    pub user_id: Option<String>,
    pub session_id: Option<String>,
    pub subject: Option<String>,
    pub topic: Option<String>,
    pub chat_history: Vec<InteractionDto>,
}

/// One persisted exchange as exposed on the wire.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct InteractionDto {
    pub question: String,
    pub response: String,
    #[schema(value_type = String)]
    pub timestamp: DateTime<Utc>,
    pub context: InteractionContextDto,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct InteractionContextDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub interaction_type: InteractionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned_text: Option<String>,
}

impl From<Interaction> for InteractionDto {
    fn from(interaction: Interaction) -> Self {
        Self {
            question: interaction.question,
            response: interaction.response,
            timestamp: interaction.created_at,
            context: InteractionContextDto {
                subject: interaction.context.subject,
                topic: interaction.context.topic,
                interaction_type: interaction.context.interaction_type,
                pinned_text: interaction.context.pinned_text,
            },
        }
    }
}

impl SolveResponse {
    pub fn from_outcome(solved: Solved, context: &ConversationContext) -> Self {
        Self {
            context: SolveResponseContext {
                current_question: solved.question,
                response: solved.context_response,
                user_id: context.user_id.clone(),
                session_id: context.session_id.clone(),
                subject: context.subject.clone(),
                topic: context.topic.clone(),
                chat_history: solved.chat_history.into_iter().map(Into::into).collect(),
            },
            solution: solved.solution,
        }
    }
}
