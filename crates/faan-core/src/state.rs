//! The session snapshot and its invariants.
//!
//! A [`GameState`] is an immutable value from the caller's point of view:
//! the resolver functions take a reference and hand back a new snapshot.
//! Field names serialise in camelCase, the layout stored session documents use.

use serde::{Deserialize, Serialize};

use crate::error::{ScoreError, ScoreResult};
use crate::history::History;
use crate::rotation::{ROTATIONS_PER_WIND, Rotation};
use crate::score::Score;
use crate::wind::{Wind, seat_wind};

/// Number of seats at the table.
pub const SEATS: usize = 4;

/// How a discard win is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringVariation {
    /// Full gun: the discarder pays the whole amount.
    #[default]
    Full,
    /// Half gun: the discarder pays half, the other two losers a quarter each.
    Half,
}

impl ScoringVariation {
    /// The traditional label for the variant.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Full => "全銃",
            Self::Half => "半銃",
        }
    }
}

impl std::fmt::Display for ScoringVariation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => write!(f, "Full Gun"),
            Self::Half => write!(f, "Shared Gun"),
        }
    }
}

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name; not required to be unique.
    pub name: String,
    /// Running score.
    pub score: Score,
}

/// Score and seating state for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub(crate) players: [Player; SEATS],
    #[serde(flatten)]
    pub(crate) rotation: Rotation,
    pub(crate) starting_dealer_index: usize,
    pub(crate) round_number: u32,
    #[serde(default)]
    pub(crate) scoring_variation: ScoringVariation,
    #[serde(default)]
    pub(crate) history: History,
}

impl GameState {
    /// Seat four players in the given order, all on zero, with seat 0 dealing.
    pub fn new<S: Into<String>>(names: [S; SEATS], scoring_variation: ScoringVariation) -> Self {
        let players = names.map(|name| Player {
            name: name.into(),
            score: Score::ZERO,
        });
        Self {
            players,
            rotation: Rotation::default(),
            starting_dealer_index: 0,
            round_number: 1,
            scoring_variation,
            history: History::new(),
        }
    }

    /// Players in seat order.
    pub fn players(&self) -> &[Player; SEATS] {
        &self.players
    }

    /// The player in `seat`, if the seat exists.
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Seat currently dealing.
    pub fn dealer_index(&self) -> usize {
        self.rotation.dealer_index
    }

    /// Seat that dealt the first round.
    pub fn starting_dealer_index(&self) -> usize {
        self.starting_dealer_index
    }

    /// The round about to be played, starting at 1.
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// The session-wide wind.
    pub fn prevailing_wind(&self) -> Wind {
        self.rotation.prevailing_wind
    }

    /// Dealer passes since the prevailing wind last advanced.
    pub fn dealer_rotations(&self) -> u8 {
        self.rotation.dealer_rotations
    }

    /// Dealer, pass count and prevailing wind together.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Payout rule for discard wins.
    pub fn scoring_variation(&self) -> ScoringVariation {
        self.scoring_variation
    }

    /// Ledger of resolved rounds.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Seat wind of `seat` under the current dealer.
    pub fn seat_wind(&self, seat: usize) -> Wind {
        seat_wind(seat, self.rotation.dealer_index)
    }

    /// Seat winds for all four seats, in seat order.
    pub fn seat_winds(&self) -> [Wind; SEATS] {
        std::array::from_fn(|seat| self.seat_wind(seat))
    }

    /// Find a seat by player name, ignoring case. Returns the first match.
    pub fn seat_of(&self, name: &str) -> Option<usize> {
        self.players
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Sum of every player's score. Zero for every reachable state.
    pub fn total_score(&self) -> Score {
        self.players.iter().map(|p| p.score).sum()
    }

    /// Check a snapshot that came from outside the engine against every
    /// state invariant.
    pub fn validate(&self) -> ScoreResult<()> {
        let corrupt = |msg: String| -> ScoreResult<()> { Err(ScoreError::CorruptState(msg)) };

        if self.rotation.dealer_index >= SEATS {
            return corrupt(format!(
                "dealer index {} out of range",
                self.rotation.dealer_index
            ));
        }
        if self.starting_dealer_index >= SEATS {
            return corrupt(format!(
                "starting dealer index {} out of range",
                self.starting_dealer_index
            ));
        }
        if self.rotation.dealer_rotations >= ROTATIONS_PER_WIND {
            return corrupt(format!(
                "dealer rotations {} must be below {ROTATIONS_PER_WIND}",
                self.rotation.dealer_rotations
            ));
        }
        if self.round_number == 0 {
            return corrupt("round number must start at 1".to_string());
        }
        let total = Score::checked_sum(self.players.iter().map(|p| p.score))
            .ok_or_else(|| ScoreError::CorruptState("score total overflows".to_string()))?;
        if total != Score::ZERO {
            return corrupt(format!("scores sum to {total}, expected 0"));
        }
        if self.history.len() as u64 != u64::from(self.round_number) - 1 {
            return corrupt(format!(
                "{} history records for round {}",
                self.history.len(),
                self.round_number
            ));
        }
        for (i, record) in self.history.records().iter().enumerate() {
            if record.game as usize != i + 1 {
                return corrupt(format!(
                    "history record {} is numbered game {}",
                    i + 1,
                    record.game
                ));
            }
            let net = Score::checked_sum(record.changes.iter().map(|c| c.change))
                .ok_or_else(|| {
                    ScoreError::CorruptState(format!("game {} changes overflow", record.game))
                })?;
            if net != Score::ZERO {
                return corrupt(format!("game {} changes sum to {net}", record.game));
            }
        }
        Ok(())
    }
}

/// Sum of every player's score in `state`.
pub fn total_score(state: &GameState) -> Score {
    state.total_score()
}
