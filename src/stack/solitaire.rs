use serde::{Deserialize, Serialize};

use super::{Pile, Placement, Stack};
use crate::cards::{Card, Zone};
use crate::error::{NertzError, Result};
use crate::rules::solitaire_accepts;

/// Solitaire stacks per player.
pub const SOLITAIRE_STACKS: usize = 4;

/// A private build pile: descending ranks, alternating colours.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolitaireStack {
    pile: Pile,
}

impl SolitaireStack {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pile: Pile::new(Zone::Solitaire),
        }
    }

    /// Lift the whole run off this stack, bottom card first.
    pub fn take_run(&mut self) -> Vec<Card> {
        self.pile.take_all()
    }

    /// Place a run lifted from another stack; its bottom card must be legal
    /// on this stack's top.
    pub fn place_run(&mut self, run: Vec<Card>) -> Result<()> {
        if let Some(bottom) = run.first() {
            if !self.can_add(bottom) {
                return Err(NertzError::IllegalPlacement {
                    card: *bottom,
                    zone: Zone::Solitaire,
                });
            }
        }
        for card in run {
            self.push(card);
        }
        Ok(())
    }
}

impl Default for SolitaireStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack for SolitaireStack {
    fn pile(&self) -> &Pile {
        &self.pile
    }

    fn pile_mut(&mut self) -> &mut Pile {
        &mut self.pile
    }
}

impl Placement for SolitaireStack {
    fn can_add(&self, card: &Card) -> bool {
        solitaire_accepts(self.top(), card)
    }
}
