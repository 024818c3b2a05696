//! Dealer rotation and prevailing-wind progression.
//!
//! The dealer passes to the next seat after a tie or a non-dealer win. Every
//! fourth pass advances the prevailing wind and restarts the count.

use serde::{Deserialize, Serialize};

use crate::wind::Wind;

/// Number of dealer passes that make up one prevailing-wind round.
pub const ROTATIONS_PER_WIND: u8 = 4;

/// Where the deal currently sits within the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rotation {
    /// Seat currently dealing (seat wind East).
    pub dealer_index: usize,
    /// Dealer passes since the prevailing wind last advanced, in `0..4`.
    pub dealer_rotations: u8,
    /// The session-wide wind.
    pub prevailing_wind: Wind,
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            dealer_index: 0,
            dealer_rotations: 0,
            prevailing_wind: Wind::East,
        }
    }
}

impl Rotation {
    /// Pass the deal to the next seat.
    pub fn advance(self) -> Self {
        let dealer_index = (self.dealer_index + 1) % 4;
        let dealer_rotations = self.dealer_rotations + 1;
        if dealer_rotations >= ROTATIONS_PER_WIND {
            Self {
                dealer_index,
                dealer_rotations: 0,
                prevailing_wind: self.prevailing_wind.next(),
            }
        } else {
            Self {
                dealer_index,
                dealer_rotations,
                prevailing_wind: self.prevailing_wind,
            }
        }
    }
}
