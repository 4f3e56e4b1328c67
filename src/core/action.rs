//! Middle-stack requests and the grant log.
//!
//! Plays onto a Middle stack are contended: during a tick a player only
//! *requests* the play by moving its `Action` to `Waiting`. After every player
//! has acted, the table grants at most one request per target stack and the
//! winners commit. An `Action` never outlives its tick.

use serde::{Deserialize, Serialize};

use super::handle::MiddleStackId;
use super::player::PlayerId;

/// Which of the player's stacks the requested card comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionSource {
    /// Top of the Nertz stack.
    Nertz,
    /// Top of the Solitaire stack at this index (0..4).
    Solitaire(u8),
    /// The Hand's exposed card.
    Hand,
}

impl std::fmt::Display for ActionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionSource::Nertz => f.write_str("Nertz"),
            ActionSource::Solitaire(i) => write!(f, "Solitaire {}", i),
            ActionSource::Hand => f.write_str("Hand"),
        }
    }
}

/// Lifecycle of a request within one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionStatus {
    #[default]
    Idle,
    Waiting,
    Granted,
}

/// A player's transient Middle-stack request.
///
/// ```
/// use nertz_sim::core::{Action, ActionSource, MiddleStackId};
///
/// let mut action = Action::default();
/// action.set_waiting(MiddleStackId::new(3), ActionSource::Hand);
/// assert!(action.is_waiting());
///
/// action.set_granted();
/// assert!(action.is_granted());
///
/// action.clear();
/// assert!(!action.is_waiting() && !action.is_granted());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub target: Option<MiddleStackId>,
    pub source: Option<ActionSource>,
    pub status: ActionStatus,
}

impl Action {
    /// Reset to idle. Called at the start of every player turn.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn set_waiting(&mut self, target: MiddleStackId, source: ActionSource) {
        self.target = Some(target);
        self.source = Some(source);
        self.status = ActionStatus::Waiting;
    }

    /// Mark a waiting request as granted. Idle actions stay idle.
    pub fn set_granted(&mut self) {
        if self.status == ActionStatus::Waiting {
            self.status = ActionStatus::Granted;
        }
    }

    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.status == ActionStatus::Waiting
    }

    #[must_use]
    pub fn is_granted(&self) -> bool {
        self.status == ActionStatus::Granted
    }

    /// Target and source of a waiting or granted request.
    #[must_use]
    pub fn request(&self) -> Option<(MiddleStackId, ActionSource)> {
        match self.status {
            ActionStatus::Idle => None,
            _ => self.target.zip(self.source),
        }
    }
}

/// A committed Middle-stack play, kept for replay checks and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub target: MiddleStackId,
    pub source: ActionSource,

    /// Round attempt number within the game, counting redeals.
    pub deal: u32,

    /// Tick within the deal.
    pub tick: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, target: MiddleStackId, source: ActionSource, deal: u32, tick: u32) -> Self {
        Self {
            player,
            target,
            source,
            deal,
            tick,
        }
    }
}
