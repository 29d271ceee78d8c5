// Model exports
pub mod domain;
pub mod relationship;
pub mod report;

pub use domain::{PreferenceSet, Profile, ScoredCandidate, ScoringWeights};
pub use relationship::{
    Actor, Relationship, RelationshipAction, RelationshipEvent, RelationshipStatus, Role,
};
pub use report::{FactorResult, FinalizedReport, HoroscopeReport, Verdict};
