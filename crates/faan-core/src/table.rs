//! Faan-to-points conversion.
//!
//! The table is a scoring convention, written out literally rather than
//! derived. Self-drawn values are what each losing seat pays; discard values
//! are what the winner collects in total.

use serde::{Deserialize, Serialize};

use crate::error::{ScoreError, ScoreResult};

/// The highest faan count the table covers.
pub const MAX_FAAN: i32 = 13;

/// Points per faan as `(faan, self_drawn, discard)`, for faan 1 through 13.
pub const FAAN_TABLE: [(i32, u32, u32); 13] = [
    (1, 2, 4),
    (2, 4, 8),
    (3, 8, 16),
    (4, 16, 32),
    (5, 32, 64),
    (6, 48, 96),
    (7, 64, 128),
    (8, 96, 192),
    (9, 128, 256),
    (10, 192, 384),
    (11, 256, 512),
    (12, 384, 768),
    (13, 512, 1024),
];

/// How a winning hand was completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WinType {
    /// The winner drew the winning tile; every other seat pays.
    SelfDrawn,
    /// The winner claimed a tile discarded by one other seat.
    Discard,
}

impl std::fmt::Display for WinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelfDrawn => write!(f, "self-drawn"),
            Self::Discard => write!(f, "discard"),
        }
    }
}

/// Look up the points a win of `faan` is worth.
///
/// Zero faan is a valid, scoreless win. Anything outside `0..=MAX_FAAN` is
/// rejected rather than capped.
pub fn points_for(faan: i32, win_type: WinType) -> ScoreResult<u32> {
    if faan == 0 {
        return Ok(0);
    }
    let (_, self_drawn, discard) = FAAN_TABLE
        .iter()
        .find(|(f, _, _)| *f == faan)
        .ok_or(ScoreError::InvalidFaan(faan))?;
    Ok(match win_type {
        WinType::SelfDrawn => *self_drawn,
        WinType::Discard => *discard,
    })
}
