//! Round outcomes and per-game results.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRngState, PlayerId};

/// How a single deal ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// At least one player emptied their Nertz stack; the round is scored.
    Completed {
        ticks: u32,
        declared: SmallVec<[PlayerId; 2]>,
    },
    /// The tick budget ran out; the round is discarded and redealt.
    TimedOut { ticks: u32 },
}

impl RoundOutcome {
    #[must_use]
    pub fn is_timed_out(&self) -> bool {
        matches!(self, RoundOutcome::TimedOut { .. })
    }

    #[must_use]
    pub fn ticks(&self) -> u32 {
        match self {
            RoundOutcome::Completed { ticks, .. } | RoundOutcome::TimedOut { ticks } => *ticks,
        }
    }
}

/// Progress of the game being played.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Game {
    /// Scored rounds so far.
    pub round_count: u32,
    pub winner: Option<PlayerId>,
    /// Whether the latest deal timed out.
    pub timeout: bool,
    pub is_over: bool,
    pub timed_out_rounds: u32,
    pub aborted_rounds: u32,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(&mut self, winner: PlayerId) {
        self.winner = Some(winner);
        self.is_over = true;
    }
}

/// Where a game started, enough to replay it on the same table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOpening {
    pub rng: GameRngState,
    pub starting_player: usize,
}

/// Result of one finished game, as consumed by the statistics layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Scored rounds; redealt rounds are not counted.
    pub round_count: u32,
    pub winner: PlayerId,
    pub winner_name: String,

    /// At least one deal of this game timed out and was redealt.
    pub timeout_occurred: bool,
    pub timed_out_rounds: u32,
    pub aborted_rounds: u32,

    /// Scores in seat order when the game ended.
    pub final_scores: Vec<i32>,

    pub opening: GameOpening,
}
