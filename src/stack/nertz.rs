use serde::{Deserialize, Serialize};

use super::{Pile, Stack};
use crate::cards::Zone;

/// A player's 13-card race pile. Emptying it ends the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NertzStack {
    pile: Pile,
}

impl NertzStack {
    /// Cards dealt to the Nertz stack.
    pub const DEAL: usize = 13;

    #[must_use]
    pub fn new() -> Self {
        Self {
            pile: Pile::new(Zone::Nertz),
        }
    }
}

impl Default for NertzStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack for NertzStack {
    fn pile(&self) -> &Pile {
        &self.pile
    }

    fn pile_mut(&mut self) -> &mut Pile {
        &mut self.pile
    }
}
