use chrono::{DateTime, Utc};
use libsql::{params, Connection};

use crate::error::Result;
use crate::models::Interaction;

pub struct InteractionRepository;

impl InteractionRepository {
    pub async fn create(conn: &Connection, interaction: &Interaction) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO interactions (
                id, user_id, session_id, question, response, context, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                interaction.id.clone(),
                interaction.user_id.clone(),
                interaction.session_id.clone(),
                interaction.question.clone(),
                interaction.response.clone(),
                serde_json::to_string(&interaction.context)?,
                interaction.created_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    /// The last `limit` interactions of a conversation, most-recent-last.
    ///
    /// Rows are fetched newest-first (rowid breaks same-timestamp ties) and
    /// reversed so the caller sees original order.
    pub async fn get_recent(
        conn: &Connection,
        user_id: &str,
        session_id: &str,
        limit: u32,
    ) -> Result<Vec<Interaction>> {
        let mut rows = conn
            .query(
                r#"
                SELECT id, user_id, session_id, question, response, context, created_at
                FROM interactions
                WHERE user_id = ?1 AND session_id = ?2
                ORDER BY created_at DESC, rowid DESC
                LIMIT ?3
                "#,
                params![user_id, session_id, limit as i64],
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(Self::row_to_interaction(&row)?);
        }
        results.reverse();
        Ok(results)
    }

    fn row_to_interaction(row: &libsql::Row) -> Result<Interaction> {
        Ok(Interaction {
            id: row.get(0)?,
            user_id: row.get(1)?,
            session_id: row.get(2)?,
            question: row.get(3)?,
            response: row.get(4)?,
            context: serde_json::from_str(&row.get::<String>(5)?).unwrap_or_default(),
            created_at: DateTime::parse_from_rfc3339(&row.get::<String>(6)?)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}
