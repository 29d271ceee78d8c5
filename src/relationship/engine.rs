use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::error::EngineError;
use crate::models::{
    Actor, Relationship, RelationshipAction, RelationshipEvent, RelationshipStatus,
};
use crate::relationship::status::{authorize, next_status};
use crate::store::{Direction, RelationshipStore};

/// State machine over directed relationship records
///
/// Every transition is applied as a read-validate-write unit guarded by
/// the store's version check; on a concurrent-write collision the engine
/// retries exactly once with a fresh read before surfacing the conflict.
/// Applied transitions are published on a broadcast channel so consuming
/// surfaces are not forced to poll the store.
pub struct RelationshipEngine<S: RelationshipStore> {
    store: Arc<S>,
    events: broadcast::Sender<RelationshipEvent>,
}

impl<S: RelationshipStore> RelationshipEngine<S> {
    pub fn new(store: Arc<S>) -> Self {
        let (events, _) = broadcast::channel(64);
        Self { store, events }
    }

    /// Change-notification hook; receivers observe every applied
    /// transition.
    pub fn subscribe(&self) -> broadcast::Receiver<RelationshipEvent> {
        self.events.subscribe()
    }

    /// Send a moderated interest: the record enters `PendingAdmin` and
    /// waits for a moderator.
    pub async fn send_interest(
        &self,
        actor: &Actor,
        to_user_id: &str,
    ) -> Result<Relationship, EngineError> {
        self.open_relation(actor, to_user_id, true, RelationshipAction::SendInterest)
            .await
    }

    /// Send a direct connection request (non-moderated path).
    pub async fn send_request(
        &self,
        actor: &Actor,
        to_user_id: &str,
    ) -> Result<Relationship, EngineError> {
        self.open_relation(actor, to_user_id, false, RelationshipAction::SendRequest)
            .await
    }

    pub async fn approve_admin(
        &self,
        actor: &Actor,
        from_id: &str,
        to_id: &str,
    ) -> Result<Relationship, EngineError> {
        self.respond(actor, from_id, to_id, RelationshipAction::ApproveAdmin)
            .await
    }

    pub async fn accept_user(
        &self,
        actor: &Actor,
        from_id: &str,
        to_id: &str,
    ) -> Result<Relationship, EngineError> {
        self.respond(actor, from_id, to_id, RelationshipAction::AcceptUser)
            .await
    }

    pub async fn shortlist_admin(
        &self,
        actor: &Actor,
        from_id: &str,
        to_id: &str,
    ) -> Result<Relationship, EngineError> {
        self.respond(actor, from_id, to_id, RelationshipAction::ShortlistAdmin)
            .await
    }

    pub async fn confirm_connection(
        &self,
        actor: &Actor,
        from_id: &str,
        to_id: &str,
    ) -> Result<Relationship, EngineError> {
        self.respond(actor, from_id, to_id, RelationshipAction::ConfirmConnection)
            .await
    }

    pub async fn reject(
        &self,
        actor: &Actor,
        from_id: &str,
        to_id: &str,
    ) -> Result<Relationship, EngineError> {
        self.respond(actor, from_id, to_id, RelationshipAction::Reject)
            .await
    }

    pub async fn accept(
        &self,
        actor: &Actor,
        from_id: &str,
        to_id: &str,
    ) -> Result<Relationship, EngineError> {
        self.respond(actor, from_id, to_id, RelationshipAction::Accept)
            .await
    }

    pub async fn decline(
        &self,
        actor: &Actor,
        from_id: &str,
        to_id: &str,
    ) -> Result<Relationship, EngineError> {
        self.respond(actor, from_id, to_id, RelationshipAction::Decline)
            .await
    }

    /// Block a counterpart. Idempotent: blocking an already-blocked pair
    /// is a no-op, not an error. Creates the record when none exists, so
    /// a block does not require a prior interest.
    pub async fn block(
        &self,
        actor: &Actor,
        target_user_id: &str,
    ) -> Result<Relationship, EngineError> {
        for attempt in 0..2 {
            let existing = self.store.get(&actor.user_id, target_user_id).await?;

            let mut rel = match existing {
                Some(rel) if rel.status == RelationshipStatus::Blocked => {
                    debug!(from = %actor.user_id, to = target_user_id, "already blocked, no-op");
                    return Ok(rel);
                }
                Some(rel) => rel,
                None => Relationship::new(
                    actor.user_id.clone(),
                    target_user_id,
                    RelationshipStatus::Neutral,
                    false,
                ),
            };

            authorize(RelationshipAction::Block, actor, &rel)?;
            rel.status = next_status(rel.status, RelationshipAction::Block, rel.is_moderated)?;
            rel.updated_at = chrono::Utc::now();

            match self.store.put(rel).await {
                Ok(stored) => {
                    info!(from = %actor.user_id, to = target_user_id, "blocked");
                    self.publish(&stored);
                    return Ok(stored);
                }
                Err(err) if err.is_conflict() && attempt == 0 => {
                    warn!(from = %actor.user_id, to = target_user_id, "block raced, retrying");
                }
                Err(err) => return Err(err),
            }
        }
        unreachable!("block retries are bounded")
    }

    /// Unblock a counterpart; the relation returns to `Neutral` so a new
    /// interest can be sent.
    pub async fn unblock(
        &self,
        actor: &Actor,
        target_user_id: &str,
    ) -> Result<Relationship, EngineError> {
        self.respond(
            actor,
            &actor.user_id,
            target_user_id,
            RelationshipAction::Unblock,
        )
        .await
    }

    /// True when either side has blocked the other. Consuming surfaces
    /// must deny messaging and calls while this holds.
    pub async fn is_blocked(&self, a: &str, b: &str) -> Result<bool, EngineError> {
        let forward = self.store.get(a, b).await?;
        if matches!(forward, Some(ref rel) if rel.status == RelationshipStatus::Blocked) {
            return Ok(true);
        }
        let reverse = self.store.get(b, a).await?;
        Ok(matches!(reverse, Some(ref rel) if rel.status == RelationshipStatus::Blocked))
    }

    /// Counterpart ids blocked in either direction, for candidate-pool
    /// exclusion ahead of scoring.
    pub async fn blocked_ids(&self, user_id: &str) -> Result<HashSet<String>, EngineError> {
        let relations = self.store.list_for(user_id, Direction::Either).await?;
        Ok(relations
            .into_iter()
            .filter(|r| r.status == RelationshipStatus::Blocked)
            .map(|r| {
                if r.from_user_id == user_id {
                    r.to_user_id
                } else {
                    r.from_user_id
                }
            })
            .collect())
    }

    pub async fn relationships_for(
        &self,
        user_id: &str,
        direction: Direction,
    ) -> Result<Vec<Relationship>, EngineError> {
        self.store.list_for(user_id, direction).await
    }

    /// Open (or re-open after a terminal rejection) a directed relation.
    async fn open_relation(
        &self,
        actor: &Actor,
        to_user_id: &str,
        is_moderated: bool,
        action: RelationshipAction,
    ) -> Result<Relationship, EngineError> {
        for attempt in 0..2 {
            let existing = self.store.get(&actor.user_id, to_user_id).await?;

            let mut rel = match existing {
                Some(rel) if rel.status == RelationshipStatus::Blocked => {
                    return Err(EngineError::InvalidTransition(
                        "this profile is blocked; unblock before sending an interest".to_string(),
                    ));
                }
                Some(rel) if rel.status.is_live() => {
                    return Err(EngineError::InvalidTransition(
                        "an interest for this profile is already in progress".to_string(),
                    ));
                }
                // Neutral or terminally rejected: the same record is
                // re-opened so the pair keeps one source of truth.
                Some(mut rel) => {
                    rel.status = RelationshipStatus::Neutral;
                    rel.is_moderated = is_moderated;
                    rel
                }
                None => Relationship::new(
                    actor.user_id.clone(),
                    to_user_id,
                    RelationshipStatus::Neutral,
                    is_moderated,
                ),
            };

            authorize(action, actor, &rel)?;
            rel.status = next_status(rel.status, action, is_moderated)?;
            rel.updated_at = chrono::Utc::now();

            match self.store.put(rel).await {
                Ok(stored) => {
                    info!(
                        from = %actor.user_id,
                        to = to_user_id,
                        status = ?stored.status,
                        "interest opened"
                    );
                    self.publish(&stored);
                    return Ok(stored);
                }
                Err(err) if err.is_conflict() && attempt == 0 => {
                    warn!(from = %actor.user_id, to = to_user_id, "open raced, retrying");
                }
                Err(err) => return Err(err),
            }
        }
        unreachable!("open retries are bounded")
    }

    /// Apply one transition to an existing record.
    async fn respond(
        &self,
        actor: &Actor,
        from_id: &str,
        to_id: &str,
        action: RelationshipAction,
    ) -> Result<Relationship, EngineError> {
        for attempt in 0..2 {
            let mut rel = self
                .store
                .get(from_id, to_id)
                .await?
                .ok_or_else(|| {
                    EngineError::NotFound(format!(
                        "no relationship from {} to {}",
                        from_id, to_id
                    ))
                })?;

            authorize(action, actor, &rel)?;
            rel.status = next_status(rel.status, action, rel.is_moderated)?;
            rel.updated_at = chrono::Utc::now();

            match self.store.put(rel).await {
                Ok(stored) => {
                    info!(
                        from = from_id,
                        to = to_id,
                        action = ?action,
                        status = ?stored.status,
                        "transition applied"
                    );
                    self.publish(&stored);
                    return Ok(stored);
                }
                Err(err) if err.is_conflict() && attempt == 0 => {
                    warn!(from = from_id, to = to_id, action = ?action, "transition raced, retrying");
                }
                Err(err) => return Err(err),
            }
        }
        unreachable!("transition retries are bounded")
    }

    fn publish(&self, relationship: &Relationship) {
        // Nobody listening is fine
        let _ = self.events.send(RelationshipEvent {
            from_user_id: relationship.from_user_id.clone(),
            to_user_id: relationship.to_user_id.clone(),
            status: relationship.status,
            at: relationship.updated_at,
        });
    }
}
