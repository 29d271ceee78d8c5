//! Sangam Engine - match compatibility and relationship workflow engine
//! for the Sangam matrimony platform
//!
//! Three subsystems share one engine because the relationship state
//! machine consumes the compatibility scorer's output and both obey the
//! same moderation and blocking rules:
//!
//! - a weighted multi-attribute scorer with relaxation fallback when the
//!   strict preferences accept nobody,
//! - a ten-factor Porutham star compatibility comparator over a fixed
//!   lookup table,
//! - a moderated/direct relationship lifecycle with optimistic-concurrency
//!   writes and block/unblock semantics.
//!
//! The crate is a library: no network surface of its own, backed by the
//! pluggable store traits in [`store`].

pub mod astro;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod models;
pub mod relationship;
pub mod store;

// Re-export commonly used types
pub use astro::{HoroscopeComparator, Nakshatra, PoruthamTable, Raasi};
pub use self::core::{calculate_match_score, MatchOutcome, Matcher, RelaxationStage};
pub use engine::MatchmakingEngine;
pub use error::EngineError;
pub use models::{
    Actor, FinalizedReport, HoroscopeReport, PreferenceSet, Profile, Relationship,
    RelationshipAction, RelationshipEvent, RelationshipStatus, Role, ScoredCandidate,
    ScoringWeights, Verdict,
};
pub use relationship::RelationshipEngine;
pub use store::{CandidateDirectory, Direction, RelationshipStore};
