//! The append-only ledger of resolved rounds.

use serde::{Deserialize, Serialize};

use crate::score::Score;
use crate::table::WinType;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundKind {
    /// Won by a self-drawn tile.
    SelfDrawn,
    /// Won off another seat's discard.
    Discard,
    /// Nobody won.
    Tie,
}

impl From<WinType> for RoundKind {
    fn from(win_type: WinType) -> Self {
        match win_type {
            WinType::SelfDrawn => Self::SelfDrawn,
            WinType::Discard => Self::Discard,
        }
    }
}

impl std::fmt::Display for RoundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelfDrawn => write!(f, "self-drawn"),
            Self::Discard => write!(f, "discard"),
            Self::Tie => write!(f, "tie"),
        }
    }
}

/// One player's score movement in a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreChange {
    /// Player name at the time of the round.
    pub name: String,
    /// Signed change applied to that player's score.
    pub change: Score,
}

/// What happened in one resolved round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    /// Round number the record was made in.
    #[serde(alias = "round")]
    pub game: u32,
    /// Winner's name, or `None` for a tie.
    pub winner: Option<String>,
    /// How the round ended.
    pub win_type: RoundKind,
    /// Discarder's name for discard wins.
    pub discarder: Option<String>,
    /// Faan claimed by the winner; absent for ties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faans: Option<i32>,
    /// Points value the payout was based on.
    pub points: u32,
    /// Per-player score changes.
    pub changes: Vec<ScoreChange>,
}

impl RoundRecord {
    /// Sum of every change in the round. Zero for a well-formed record.
    pub fn net_change(&self) -> Score {
        self.changes.iter().map(|c| c.change).sum()
    }

    /// One-line description of the outcome.
    pub fn describe(&self) -> String {
        let faans = self
            .faans
            .map(|f| f.to_string())
            .unwrap_or_else(|| "?".to_string());
        let winner = self.winner.as_deref().unwrap_or("?");
        match self.win_type {
            RoundKind::Tie => "Tie (No Winner)".to_string(),
            RoundKind::SelfDrawn => format!(
                "{winner} won (Self-Drawn) - {faans} faan ({} pts each)",
                self.points
            ),
            RoundKind::Discard => format!(
                "{winner} won from {} - {faans} faan ({} pts)",
                self.discarder.as_deref().unwrap_or("?"),
                self.points
            ),
        }
    }
}

/// Format a change with an explicit sign for gains.
pub fn signed(change: Score) -> String {
    if change.is_positive() {
        format!("+{change}")
    } else {
        change.to_string()
    }
}

/// The ordered list of round records for a session.
///
/// Only the round resolver appends; everything else reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    records: Vec<RoundRecord>,
}

impl History {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, record: RoundRecord) {
        self.records.push(record);
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no round has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent record.
    pub fn last(&self) -> Option<&RoundRecord> {
        self.records.last()
    }

    /// Records newest first, the order a history view shows them in.
    pub fn latest_first(&self) -> impl Iterator<Item = &RoundRecord> {
        self.records.iter().rev()
    }

    /// Export the ledger as plain text, newest first.
    pub fn export_text(&self) -> String {
        if self.records.is_empty() {
            return "No games recorded yet.\n".to_string();
        }
        let mut out = String::new();
        for record in self.latest_first() {
            out.push_str(&format!("Game {}: {}\n", record.game, record.describe()));
            for c in &record.changes {
                out.push_str(&format!("  {} {}\n", c.name, signed(c.change)));
            }
        }
        out
    }

    /// Export the ledger as markdown, oldest first.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Session History\n\n");
        if self.records.is_empty() {
            out.push_str("No games recorded yet.\n");
            return out;
        }
        for record in &self.records {
            out.push_str(&format!("## Game {}\n\n", record.game));
            out.push_str(&format!("{}\n", record.describe()));
            if !record.changes.is_empty() {
                out.push('\n');
                for c in &record.changes {
                    out.push_str(&format!("- {}: **{}**\n", c.name, signed(c.change)));
                }
            }
            out.push('\n');
        }
        out
    }
}
