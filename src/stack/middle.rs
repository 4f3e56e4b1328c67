//! Shared Middle stacks.
//!
//! Every Ace played starts a new Middle stack owned by the table. Stacks are
//! addressed by `MiddleStackId`, handed out in creation order, so two
//! players' requests for the same stack compare equal without any notion of
//! object identity.

use serde::{Deserialize, Serialize};

use super::{Pile, Placement, Stack};
use crate::cards::{Card, Zone};
use crate::core::{MiddleStackId, PlayerId};
use crate::error::{NertzError, Result};
use crate::rules::middle_accepts;

/// A single-suit ascending pile that started with an Ace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiddleStack {
    id: MiddleStackId,
    pile: Pile,
}

impl MiddleStack {
    #[must_use]
    pub fn id(&self) -> MiddleStackId {
        self.id
    }
}

impl Stack for MiddleStack {
    fn pile(&self) -> &Pile {
        &self.pile
    }

    fn pile_mut(&mut self) -> &mut Pile {
        &mut self.pile
    }
}

impl Placement for MiddleStack {
    fn can_add(&self, card: &Card) -> bool {
        middle_accepts(self.top(), card)
    }
}

/// All Middle stacks on the table for the current round.
///
/// ```
/// use nertz_sim::cards::{Card, Suit};
/// use nertz_sim::core::PlayerId;
/// use nertz_sim::stack::MiddleStacks;
///
/// let me = PlayerId::new(0);
/// let mut middle = MiddleStacks::new();
/// let id = middle.start(Card::new(Suit::Clubs, 1, me)).unwrap();
///
/// assert_eq!(middle.find_accepting(&Card::new(Suit::Clubs, 2, me)), Some(id));
/// assert_eq!(middle.find_accepting(&Card::new(Suit::Spades, 2, me)), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiddleStacks {
    stacks: Vec<MiddleStack>,
}

impl MiddleStacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MiddleStack> {
        self.stacks.iter()
    }

    /// Drop every stack, at the start of a deal.
    pub fn clear(&mut self) {
        self.stacks.clear();
    }

    /// Open a new stack with an Ace.
    pub fn start(&mut self, card: Card) -> Result<MiddleStackId> {
        if !card.is_ace() {
            return Err(NertzError::NotAnAce { card });
        }
        let id = MiddleStackId::new(self.stacks.len() as u32);
        let mut stack = MiddleStack {
            id,
            pile: Pile::new(Zone::Middle),
        };
        stack.push(card);
        self.stacks.push(stack);
        Ok(id)
    }

    pub fn get(&self, id: MiddleStackId) -> Result<&MiddleStack> {
        self.stacks
            .get(id.index())
            .ok_or(NertzError::UnknownMiddleStack(id))
    }

    pub fn get_mut(&mut self, id: MiddleStackId) -> Result<&mut MiddleStack> {
        self.stacks
            .get_mut(id.index())
            .ok_or(NertzError::UnknownMiddleStack(id))
    }

    /// First stack, in creation order, that would take `card`.
    #[must_use]
    pub fn find_accepting(&self, card: &Card) -> Option<MiddleStackId> {
        self.stacks.iter().find(|s| s.can_add(card)).map(MiddleStack::id)
    }

    /// Every card in every Middle stack.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.stacks.iter().flat_map(|s| s.cards().iter())
    }

    /// Cards in the Middle that came from `player`'s deck.
    #[must_use]
    pub fn count_owned_by(&self, player: PlayerId) -> usize {
        self.cards().filter(|c| c.owner == player).count()
    }
}
