use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted question/answer exchange, scoped to a user and session.
///
/// Interactions are append-only: they are created once after a successful
/// completion and never updated or deleted by this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub id: String,
    pub user_id: String,
    pub session_id: String,
    pub question: String,
    pub response: String,
    pub context: InteractionContext,
    pub created_at: DateTime<Utc>,
}

impl Interaction {
    pub fn new(
        id: String,
        user_id: String,
        session_id: String,
        question: String,
        response: String,
        context: InteractionContext,
    ) -> Self {
        Self {
            id,
            user_id,
            session_id,
            question,
            response,
            context,
            created_at: Utc::now(),
        }
    }
}

/// Metadata persisted alongside an interaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InteractionContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default)]
    pub interaction_type: InteractionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_text: Option<String>,
}

/// The kind of help the student asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    #[default]
    Solve,
    Explain,
    General,
}

impl InteractionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solve => "solve",
            Self::Explain => "explain",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for InteractionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
