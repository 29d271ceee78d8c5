// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod relaxation;
pub mod scoring;

pub use matcher::{MatchOutcome, Matcher};
pub use relaxation::RelaxationStage;
pub use scoring::calculate_match_score;
