//! Winds and seat-wind derivation.

use serde::{Deserialize, Serialize};

/// One of the four winds, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Wind {
    /// East, always the dealer's seat wind.
    East,
    /// South.
    South,
    /// West.
    West,
    /// North.
    North,
}

impl Wind {
    /// All winds in play order.
    pub const ALL: [Wind; 4] = [Self::East, Self::South, Self::West, Self::North];

    /// The wind's position in play order (East = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The wind at `index` in play order, if it is in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The wind that follows this one, wrapping North back to East.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// The wind's CJK glyph as printed on tiles.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::East => "東",
            Self::South => "南",
            Self::West => "西",
            Self::North => "北",
        }
    }
}

impl std::fmt::Display for Wind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::East => write!(f, "East"),
            Self::South => write!(f, "South"),
            Self::West => write!(f, "West"),
            Self::North => write!(f, "North"),
        }
    }
}

impl From<Wind> for u8 {
    fn from(wind: Wind) -> u8 {
        wind as u8
    }
}

impl TryFrom<u8> for Wind {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value as usize).ok_or_else(|| format!("wind index {value} out of range"))
    }
}

/// The positional wind of `seat` when `dealer` holds East.
pub fn seat_wind(seat: usize, dealer: usize) -> Wind {
    Wind::ALL[(seat % 4 + 4 - dealer % 4) % 4]
}
