//! Error types for the scoring engine.

use crate::table::MAX_FAAN;

/// Errors reported when a round cannot be resolved or a snapshot is unsound.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    /// The faan count is outside the scoring table.
    #[error("invalid faan {0}: must be between 0 and {MAX_FAAN}")]
    InvalidFaan(i32),

    /// The winning seat index is not one of the four seats.
    #[error("invalid winner seat {0}: must be between 0 and 3")]
    InvalidWinner(usize),

    /// The discarding seat is missing, out of range, or the winner itself.
    #[error("invalid discarder: {0}")]
    InvalidDiscarder(String),

    /// A snapshot loaded from outside the engine breaks a state invariant.
    #[error("corrupt game state: {0}")]
    CorruptState(String),
}

/// Convenience result type for scoring operations.
pub type ScoreResult<T> = Result<T, ScoreError>;
