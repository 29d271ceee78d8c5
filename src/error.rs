use thiserror::Error;

/// Errors surfaced by the engine
///
/// Scoring never aborts on bad candidate data (missing attributes simply
/// contribute nothing); these variants cover the cases that must reach the
/// caller.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl EngineError {
    /// True when the error came from a concurrent-write collision and a
    /// retry with a fresh read may succeed.
    pub fn is_conflict(&self) -> bool {
        matches!(self, EngineError::Conflict(_))
    }
}
