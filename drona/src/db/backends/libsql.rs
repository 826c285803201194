use async_trait::async_trait;

use crate::db::connection::Database;
use crate::db::repository::{InteractionRepository, ProfileRepository};
use crate::db::traits::{DatabaseBackend, InteractionStore, ProfileStore};
use crate::error::Result;
use crate::models::{Interaction, Profile};

pub struct LibSqlBackend {
    db: Database,
}

impl LibSqlBackend {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InteractionStore for LibSqlBackend {
    async fn append_interaction(&self, interaction: &Interaction) -> Result<()> {
        let conn = self.db.connect()?;
        InteractionRepository::create(&conn, interaction).await
    }

    async fn get_recent_interactions(
        &self,
        user_id: &str,
        session_id: &str,
        limit: u32,
    ) -> Result<Vec<Interaction>> {
        let conn = self.db.connect()?;
        InteractionRepository::get_recent(&conn, user_id, session_id, limit).await
    }
}

#[async_trait]
impl ProfileStore for LibSqlBackend {
    async fn get_profile(&self, uuid: &str) -> Result<Option<Profile>> {
        let conn = self.db.connect()?;
        ProfileRepository::get_by_uuid(&conn, uuid).await
    }

    async fn set_current_session(&self, uuid: &str, session_id: &str) -> Result<()> {
        let conn = self.db.connect()?;
        ProfileRepository::set_current_session(&conn, uuid, session_id).await
    }
}

#[async_trait]
impl DatabaseBackend for LibSqlBackend {
    async fn sync(&self) -> Result<()> {
        self.db.sync().await
    }
}
