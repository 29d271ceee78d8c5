// Store abstractions and the in-memory reference adapter
pub mod memory;

use std::collections::HashSet;

use crate::error::EngineError;
use crate::models::{FinalizedReport, Profile, Relationship};

/// Which side of a relationship record to query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    From,
    To,
    Either,
}

/// Pluggable persistence behind the relationship state machine
///
/// `put` must enforce optimistic concurrency: a write whose `version` does
/// not match the stored record fails with `EngineError::Conflict` and
/// leaves the record unchanged. The stored copy, with its bumped version,
/// is returned on success.
pub trait RelationshipStore: Send + Sync {
    fn get(
        &self,
        from_id: &str,
        to_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Relationship>, EngineError>> + Send;

    fn put(
        &self,
        relationship: Relationship,
    ) -> impl std::future::Future<Output = Result<Relationship, EngineError>> + Send;

    fn list_for(
        &self,
        user_id: &str,
        direction: Direction,
    ) -> impl std::future::Future<Output = Result<Vec<Relationship>, EngineError>> + Send;

    fn get_report(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<FinalizedReport>, EngineError>> + Send;

    /// Report finalization writes one record per participant with separate
    /// `put_report` calls; the engine does not make the pair atomic. An
    /// adapter that can fail between writes should make `put_report`
    /// idempotent so a repeated finalization converges.
    fn put_report(
        &self,
        user_id: &str,
        report: FinalizedReport,
    ) -> impl std::future::Future<Output = Result<(), EngineError>> + Send;
}

/// Profile-directory collaborator supplying the candidate pool
pub trait CandidateDirectory: Send + Sync {
    fn list_candidates(
        &self,
        excluding: &HashSet<String>,
    ) -> impl std::future::Future<Output = Result<Vec<Profile>, EngineError>> + Send;
}
