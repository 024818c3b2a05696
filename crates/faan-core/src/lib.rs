//! Score and seating engine for four-player faan sessions.
//!
//! Converts faan to points, derives seat winds from the dealer position,
//! and resolves wins and ties into new session snapshots with zero-sum
//! scores, dealer rotation, prevailing-wind progression and an append-only
//! round ledger. The crate does no I/O: callers own persistence and display.

/// Error types for scoring operations.
pub mod error;
/// The append-only round ledger.
pub mod history;
/// Win and tie resolution.
pub mod resolver;
/// Dealer rotation state machine.
pub mod rotation;
/// Exact quarter-point score arithmetic.
pub mod score;
/// Session snapshot and invariants.
pub mod state;
/// Faan-to-points table.
pub mod table;
/// Winds and seat-wind derivation.
pub mod wind;

pub use error::{ScoreError, ScoreResult};
pub use history::{History, RoundKind, RoundRecord, ScoreChange};
pub use resolver::{resolve_tie, resolve_win};
pub use rotation::Rotation;
pub use score::Score;
pub use state::{GameState, Player, SEATS, ScoringVariation, total_score};
pub use table::{FAAN_TABLE, MAX_FAAN, WinType, points_for};
pub use wind::{Wind, seat_wind};
