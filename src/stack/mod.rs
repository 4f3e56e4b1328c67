//! The four kinds of card stack.
//!
//! Every stack is a `Pile`: an ordered `Vec<Card>` whose last element is the
//! top, tagged with the zone it stamps onto cards pushed into it. The
//! [`Stack`] trait gives each kind the shared LIFO operations; kinds with a
//! placement rule also implement [`Placement`].
//!
//! | Kind | Owner | Rule |
//! |------|-------|------|
//! | [`NertzStack`] | player | none, top always playable |
//! | [`SolitaireStack`] | player (x4) | descending, alternating colour |
//! | [`HandStack`] | player | only the exposed card is playable |
//! | [`MiddleStack`] | table | ascending, one suit, starts at Ace |
//!
//! Reading the top of an empty stack is `None`. Operations that need a card
//! (`pop`, `try_top`) return [`NertzError::EmptyStack`] instead.

mod hand;
mod middle;
mod nertz;
mod solitaire;

pub use hand::{HandStack, FLIP_COUNT};
pub use middle::{MiddleStack, MiddleStacks};
pub use nertz::NertzStack;
pub use solitaire::{SolitaireStack, SOLITAIRE_STACKS};

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Zone};
use crate::error::{NertzError, Result};

/// Ordered cards with LIFO top semantics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
    zone: Zone,
}

impl Pile {
    #[must_use]
    pub fn new(zone: Zone) -> Self {
        Self {
            cards: Vec::new(),
            zone,
        }
    }

    #[must_use]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }

    /// Append a card, stamping this pile's zone on it.
    pub fn push(&mut self, mut card: Card) {
        card.zone = self.zone;
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(NertzError::EmptyStack { zone: self.zone })
    }

    /// Remove every card, returning them bottom first.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}

/// Shared LIFO operations.
pub trait Stack {
    fn pile(&self) -> &Pile;

    fn pile_mut(&mut self) -> &mut Pile;

    fn zone(&self) -> Zone {
        self.pile().zone()
    }

    fn cards(&self) -> &[Card] {
        self.pile().cards()
    }

    fn len(&self) -> usize {
        self.pile().cards().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Last card added, or `None` when empty.
    fn top(&self) -> Option<&Card> {
        self.pile().cards().last()
    }

    /// Last card added; an empty stack is an error.
    fn try_top(&self) -> Result<&Card> {
        self.top().ok_or(NertzError::EmptyStack { zone: self.zone() })
    }

    /// First card added, or `None` when empty.
    fn bottom(&self) -> Option<&Card> {
        self.pile().cards().first()
    }

    fn push(&mut self, card: Card) {
        self.pile_mut().push(card);
    }

    /// Remove the playable card.
    fn pop(&mut self) -> Result<Card> {
        self.pile_mut().pop()
    }

    fn clear(&mut self) {
        self.pile_mut().cards_mut().clear();
    }
}

/// Stacks that only accept certain cards.
pub trait Placement: Stack {
    /// Would `card` be a legal placement right now?
    fn can_add(&self, card: &Card) -> bool;

    /// Push `card` if legal.
    fn try_add(&mut self, card: Card) -> Result<()> {
        if !self.can_add(&card) {
            return Err(NertzError::IllegalPlacement {
                card,
                zone: self.zone(),
            });
        }
        self.push(card);
        Ok(())
    }
}
