//! Domain types shared across the workspace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A note owned by a single user.
///
/// # Invariants
/// - `owner` is immutable after creation.
/// - `updated_at >= created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Note ID.
    pub id: Uuid,
    /// Note title.
    pub title: String,
    /// Note body text.
    pub body: String,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// ID of the owning user.
    pub owner: Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Public view of a registered user.
///
/// The password hash never appears here; this is the only user shape the API
/// exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Display name.
    pub fullname: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_serializes_with_camel_case_timestamps() {
        let now = Utc::now();
        let note = Note {
            id: Uuid::nil(),
            title: "Groceries".to_string(),
            body: "Eggs, flour".to_string(),
            tags: vec!["shopping".to_string()],
            owner: Uuid::nil(),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("createdAt"));
        assert!(json.contains("updatedAt"));
        assert!(!json.contains("created_at"));
    }

    #[test]
    fn user_round_trips() {
        let user = User {
            id: Uuid::nil(),
            username: "alice".to_string(),
            fullname: "Alice Smith".to_string(),
        };

        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
