use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a directed relationship between two members
///
/// One enum carries both lifecycle variants; the record's `is_moderated`
/// flag selects which transition table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipStatus {
    /// No live relation; the state after an unblock
    Neutral,
    // Direct (non-moderated) path
    Pending,
    Rejected,
    // Moderated path
    PendingAdmin,
    ApprovedByAdmin,
    AcceptedByUser,
    ShortlistedByAdmin,
    RejectedByUser,
    // Shared
    Connected,
    Blocked,
}

impl RelationshipStatus {
    /// Terminal states admit no transition except `Blocked -> Neutral`
    /// via unblock.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RelationshipStatus::Rejected
                | RelationshipStatus::RejectedByUser
                | RelationshipStatus::Blocked
        )
    }

    /// A live relation blocks a duplicate interest for the same pair.
    pub fn is_live(&self) -> bool {
        !self.is_terminal() && *self != RelationshipStatus::Neutral
    }
}

/// User or moderator action submitted to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipAction {
    SendInterest,
    SendRequest,
    ApproveAdmin,
    AcceptUser,
    ShortlistAdmin,
    ConfirmConnection,
    Accept,
    Decline,
    Reject,
    Block,
    Unblock,
}

/// Role attached to the actor submitting an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Moderator,
    Astrologer,
}

/// The party submitting an action
#[derive(Debug, Clone)]
pub struct Actor {
    pub user_id: String,
    pub role: Role,
}

impl Actor {
    pub fn user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: Role::User,
        }
    }

    pub fn moderator(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: Role::Moderator,
        }
    }

    pub fn astrologer(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: Role::Astrologer,
        }
    }
}

/// A directed interest from one member to another
///
/// At most one record exists per ordered (from, to) pair; the reverse pair
/// is an independent record. Records are never deleted, only transitioned,
/// so the audit trail survives rejections and blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: Uuid,
    pub from_user_id: String,
    pub to_user_id: String,
    pub status: RelationshipStatus,
    pub is_moderated: bool,
    /// Counterpart display name, denormalized for read convenience
    #[serde(default)]
    pub to_display_name: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Optimistic-concurrency token; bumped by the store on every write
    #[serde(default)]
    pub version: u64,
}

impl Relationship {
    pub fn new(
        from_user_id: impl Into<String>,
        to_user_id: impl Into<String>,
        status: RelationshipStatus,
        is_moderated: bool,
    ) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: Uuid::new_v4(),
            from_user_id: from_user_id.into(),
            to_user_id: to_user_id.into(),
            status,
            is_moderated,
            to_display_name: None,
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }
}

/// Published on the engine's broadcast channel after every applied
/// transition, so consuming surfaces do not have to poll the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipEvent {
    pub from_user_id: String,
    pub to_user_id: String,
    pub status: RelationshipStatus,
    pub at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(RelationshipStatus::Blocked.is_terminal());
        assert!(RelationshipStatus::Rejected.is_terminal());
        assert!(RelationshipStatus::RejectedByUser.is_terminal());
        assert!(!RelationshipStatus::Connected.is_terminal());
        assert!(!RelationshipStatus::PendingAdmin.is_terminal());
    }

    #[test]
    fn test_neutral_is_not_live() {
        assert!(!RelationshipStatus::Neutral.is_live());
        assert!(RelationshipStatus::Pending.is_live());
        assert!(RelationshipStatus::Connected.is_live());
        assert!(!RelationshipStatus::Blocked.is_live());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&RelationshipStatus::PendingAdmin).unwrap();
        assert_eq!(json, "\"pending_admin\"");
    }
}
