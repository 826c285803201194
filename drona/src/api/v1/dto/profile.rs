use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Profile;

/// Query parameters for `GET /v1/profile`. The identifier may also arrive
/// via the `X-User-Id` header.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct ProfileQuery {
    pub user_id: Option<String>,
}

/// Response for `GET /v1/profile`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ProfileResponse {
    pub uuid: String,
    pub name: String,
    pub email: String,
    pub current_session_id: Option<String>,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String)]
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            uuid: profile.uuid,
            name: profile.name,
            email: profile.email,
            current_session_id: profile.current_session_id,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_response_serializes_all_fields() {
        let now = Utc::now();
        let response = ProfileResponse::from(Profile {
            uuid: "u1".to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            current_session_id: Some("session_ab12cd34".to_string()),
            created_at: now,
            updated_at: now,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["uuid"], "u1");
        assert_eq!(json["name"], "Asha");
        assert_eq!(json["current_session_id"], "session_ab12cd34");
        assert!(json.get("created_at").is_some());
    }
}
