use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A student profile row. `current_session_id` groups that student's
/// interactions into one logical conversation until a new session is cut.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub uuid: String,
    pub name: String,
    pub email: String,
    pub current_session_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Allocate a fresh session identifier: fixed prefix + 8 random hex chars.
    pub fn new_session_id() -> String {
        let hex = uuid::Uuid::new_v4().simple().to_string();
        format!("session_{}", &hex[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_has_prefix_and_suffix() {
        let id = Profile::new_session_id();
        assert!(id.starts_with("session_"));
        assert_eq!(id.len(), "session_".len() + 8);
        assert!(id["session_".len()..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(Profile::new_session_id(), Profile::new_session_id());
    }
}
