//! The Hand stack and flip-three.
//!
//! Cards are dealt face-down. The face-up cards always form one run from the
//! exposed card to the physical top of the stack: the lowest-index face-up
//! card is the exposed one, and only it can be played. Flip-three turns up
//! the three face-down cards directly below the run. When fewer than three
//! remain below it, the hand is restacked: the run moves to the bottom of the
//! pile, ahead of the leftover face-down cards, everything is turned face-down
//! and the top three are turned up again.

use serde::{Deserialize, Serialize};

use super::{Pile, Stack};
use crate::cards::{Card, Zone};
use crate::error::{NertzError, Result};

/// Cards turned up by one flip.
pub const FLIP_COUNT: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandStack {
    pile: Pile,
}

impl HandStack {
    /// Cards dealt to the Hand.
    pub const DEAL: usize = 34;

    #[must_use]
    pub fn new() -> Self {
        Self {
            pile: Pile::new(Zone::Hand),
        }
    }

    /// Deal a card face-down onto the stack.
    pub fn push_face_down(&mut self, mut card: Card) {
        card.face_up = false;
        self.pile.push(card);
    }

    /// Place a card face-up on the physical top, extending the run.
    pub fn push_face_up(&mut self, mut card: Card) {
        card.face_up = true;
        self.pile.push(card);
    }

    /// Index of the exposed card, if any card is face-up.
    #[must_use]
    pub fn exposed_index(&self) -> Option<usize> {
        self.pile.cards().iter().position(|c| c.face_up)
    }

    /// The playable card, if any card is face-up.
    #[must_use]
    pub fn exposed(&self) -> Option<&Card> {
        self.exposed_index().map(|i| &self.pile.cards()[i])
    }

    /// Cards still face-down.
    #[must_use]
    pub fn face_down_count(&self) -> usize {
        self.pile.cards().iter().filter(|c| !c.face_up).count()
    }

    /// Turn up the next three cards, restacking when too few remain.
    pub fn flip_three(&mut self) {
        let cards = self.pile.cards_mut();
        let len = cards.len();
        if len == 0 {
            return;
        }

        let run_start = cards.iter().position(|c| c.face_up).unwrap_or(len);
        if run_start >= FLIP_COUNT {
            for card in &mut cards[run_start - FLIP_COUNT..run_start] {
                card.face_up = true;
            }
            return;
        }

        cards.rotate_left(run_start);
        for card in cards.iter_mut() {
            card.face_up = false;
        }
        let turned = FLIP_COUNT.min(len);
        for card in &mut cards[len - turned..] {
            card.face_up = true;
        }
    }
}

impl Default for HandStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack for HandStack {
    fn pile(&self) -> &Pile {
        &self.pile
    }

    fn pile_mut(&mut self) -> &mut Pile {
        &mut self.pile
    }

    /// Remove the exposed card rather than the physical top.
    fn pop(&mut self) -> Result<Card> {
        match self.exposed_index() {
            Some(i) => Ok(self.pile.cards_mut().remove(i)),
            None => Err(NertzError::EmptyStack { zone: Zone::Hand }),
        }
    }
}
