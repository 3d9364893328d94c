// Domain layer - receipt scoring with no HTTP concerns
// Rules are pure functions over raw receipt fields; the engine composes them
// and validation is an optional gate applied before scoring.

pub mod rules;
pub mod scoring;
pub mod validation;

// Domain error type - no HTTP concerns
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
}

// Re-export commonly used types and functions
pub use scoring::{compute_total, score_breakdown, PointsBreakdown};
pub use validation::validate_receipt;
