use super::InteractionType;

/// Default number of past interactions carried as prompt context.
pub const DEFAULT_HISTORY_LIMIT: u32 = 100;

/// Everything one request needs to answer a single question.
///
/// Owned by the request that built it and discarded once the response is
/// produced; the durable record is the persisted [`super::Interaction`],
/// never this bundle. Keeping history caller-scoped means concurrent
/// requests can never observe each other's conversation state.
#[derive(Debug, Clone)]
pub struct ConversationContext {
    pub user_id: Option<String>,
    pub session_id: Option<String>,
    pub history_limit: u32,
    pub subject: Option<String>,
    pub topic: Option<String>,
    pub pinned_text: Option<String>,
    pub selected_text: Option<String>,
    /// Decoded image payload. Only its presence reaches the prompt.
    pub image: Option<Vec<u8>>,
    pub interaction_type: InteractionType,
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self {
            user_id: None,
            session_id: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            subject: None,
            topic: None,
            pinned_text: None,
            selected_text: None,
            image: None,
            interaction_type: InteractionType::default(),
        }
    }
}

impl ConversationContext {
    /// Both identifiers are required before any history is read or written.
    pub fn has_identity(&self) -> bool {
        self.user_id.as_deref().is_some_and(|id| !id.is_empty())
            && self.session_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_has_no_identity() {
        assert!(!ConversationContext::default().has_identity());
    }

    #[test]
    fn identity_requires_both_ids() {
        let mut context = ConversationContext {
            user_id: Some("u1".to_string()),
            ..Default::default()
        };
        assert!(!context.has_identity());

        context.session_id = Some("s1".to_string());
        assert!(context.has_identity());
    }

    #[test]
    fn empty_ids_do_not_count_as_identity() {
        let context = ConversationContext {
            user_id: Some(String::new()),
            session_id: Some("s1".to_string()),
            ..Default::default()
        };
        assert!(!context.has_identity());
    }
}
