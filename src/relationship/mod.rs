// Relationship state machine exports
pub mod engine;
pub mod status;

pub use engine::RelationshipEngine;
pub use status::{authorize, next_status};
