use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Interaction, Profile};

// ---------------------------------------------------------------------------
// Individual store traits
// ---------------------------------------------------------------------------

/// Append/read operations for the per-session interaction log.
///
/// Callers in the solve flow treat every error from this trait as
/// recoverable: a failed fetch degrades to an empty history and a failed
/// append is logged without failing the request.
#[async_trait]
pub trait InteractionStore: Send + Sync {
    /// Append one interaction to the log.
    async fn append_interaction(&self, interaction: &Interaction) -> Result<()>;

    /// The last `limit` interactions for `(user_id, session_id)`,
    /// most-recent-last.
    async fn get_recent_interactions(
        &self,
        user_id: &str,
        session_id: &str,
        limit: u32,
    ) -> Result<Vec<Interaction>>;
}

/// Lookup and session maintenance for student profiles.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_profile(&self, uuid: &str) -> Result<Option<Profile>>;

    /// Set `current_session_id` and bump `updated_at`.
    async fn set_current_session(&self, uuid: &str, session_id: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Unified backend supertrait
// ---------------------------------------------------------------------------

/// A complete database backend combining all store traits plus lifecycle
/// operations.
#[async_trait]
pub trait DatabaseBackend: InteractionStore + ProfileStore {
    /// Sync with remote (e.g. Turso replication). No-op for local-only backends.
    async fn sync(&self) -> Result<()>;
}
