use chrono::{DateTime, Utc};
use libsql::{params, Connection};

use crate::error::Result;
use crate::models::Profile;

pub struct ProfileRepository;

impl ProfileRepository {
    pub async fn get_by_uuid(conn: &Connection, uuid: &str) -> Result<Option<Profile>> {
        let mut rows = conn
            .query(
                "SELECT uuid, name, email, current_session_id, created_at, updated_at
                 FROM profiles WHERE uuid = ?1",
                params![uuid],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_profile(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn set_current_session(
        conn: &Connection,
        uuid: &str,
        session_id: &str,
    ) -> Result<()> {
        conn.execute(
            "UPDATE profiles SET current_session_id = ?2, updated_at = ?3 WHERE uuid = ?1",
            params![uuid, session_id, Utc::now().to_rfc3339()],
        )
        .await?;

        Ok(())
    }

    fn row_to_profile(row: &libsql::Row) -> Result<Profile> {
        Ok(Profile {
            uuid: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            current_session_id: row
                .get::<Option<String>>(3)?
                .filter(|id| !id.is_empty()),
            created_at: DateTime::parse_from_rfc3339(&row.get::<String>(4)?)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
            updated_at: DateTime::parse_from_rfc3339(&row.get::<String>(5)?)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}
