use crate::error::EngineError;
use crate::models::{Actor, Relationship, RelationshipAction, RelationshipStatus, Role};

/// Transition tables for both relationship lifecycles
///
/// Moderated path:
/// `PendingAdmin -> ApprovedByAdmin -> AcceptedByUser -> ShortlistedByAdmin
/// -> Connected`, with `Reject` available from every pre-connected state.
///
/// Direct path: `Pending -> Connected` via `Accept`, or `Rejected` via
/// `Decline`.
///
/// `Block` wins from any non-blocked state; `Unblock` is the only way out
/// of `Blocked` and resets the relation to `Neutral`. No transition skips
/// an intermediate state.
pub fn next_status(
    current: RelationshipStatus,
    action: RelationshipAction,
    is_moderated: bool,
) -> Result<RelationshipStatus, EngineError> {
    use RelationshipAction as A;
    use RelationshipStatus as S;

    // Blocking overrides everything; re-blocking is a no-op upstream
    if action == A::Block {
        return Ok(S::Blocked);
    }
    if action == A::Unblock {
        return match current {
            S::Blocked => Ok(S::Neutral),
            _ => Err(EngineError::InvalidTransition(
                "only a blocked profile can be unblocked".to_string(),
            )),
        };
    }

    let next = if is_moderated {
        match (current, action) {
            (S::Neutral, A::SendInterest) => Some(S::PendingAdmin),
            (S::PendingAdmin, A::ApproveAdmin) => Some(S::ApprovedByAdmin),
            (S::ApprovedByAdmin, A::AcceptUser) => Some(S::AcceptedByUser),
            (S::AcceptedByUser, A::ShortlistAdmin) => Some(S::ShortlistedByAdmin),
            (S::ShortlistedByAdmin, A::ConfirmConnection) => Some(S::Connected),
            (
                S::PendingAdmin | S::ApprovedByAdmin | S::AcceptedByUser | S::ShortlistedByAdmin,
                A::Reject,
            ) => Some(S::RejectedByUser),
            _ => None,
        }
    } else {
        match (current, action) {
            (S::Neutral, A::SendRequest) => Some(S::Pending),
            (S::Pending, A::Accept) => Some(S::Connected),
            (S::Pending, A::Decline) => Some(S::Rejected),
            _ => None,
        }
    };

    next.ok_or_else(|| {
        EngineError::InvalidTransition(format!(
            "action {:?} is not permitted from status {:?}; this request may already have been responded to",
            action, current
        ))
    })
}

/// Check that the actor may submit this action for this relation.
///
/// Interest, request, block and unblock belong to the sender; accept,
/// decline and reject to the receiver (a moderator may also reject on a
/// member's behalf); approval, shortlisting and connection confirmation
/// are moderator-only.
pub fn authorize(
    action: RelationshipAction,
    actor: &Actor,
    relationship: &Relationship,
) -> Result<(), EngineError> {
    use RelationshipAction as A;

    let allowed = match action {
        A::SendInterest | A::SendRequest | A::Block | A::Unblock => {
            actor.user_id == relationship.from_user_id
        }
        A::AcceptUser | A::Accept | A::Decline => actor.user_id == relationship.to_user_id,
        A::Reject => {
            actor.user_id == relationship.to_user_id || actor.role == Role::Moderator
        }
        A::ApproveAdmin | A::ShortlistAdmin | A::ConfirmConnection => {
            actor.role == Role::Moderator
        }
    };

    if allowed {
        Ok(())
    } else {
        Err(EngineError::InvalidTransition(format!(
            "{} is not allowed to perform {:?} on this relation",
            actor.user_id, action
        )))
    }
}
