//! Per-player 52-card decks.

use super::card::{Card, Suit, ACE, KING};
use crate::core::player::PlayerId;

/// Cards in one player's deck.
pub const DECK_SIZE: usize = 52;

/// Build a fresh, ordered 52-card deck owned by `owner`.
///
/// ```
/// use nertz_sim::cards::{full_deck, DECK_SIZE};
/// use nertz_sim::core::PlayerId;
///
/// let deck = full_deck(PlayerId::new(0));
/// assert_eq!(deck.len(), DECK_SIZE);
/// assert!(deck.iter().all(|c| c.owner == PlayerId::new(0)));
/// ```
#[must_use]
pub fn full_deck(owner: PlayerId) -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| (ACE..=KING).map(move |rank| Card::new(suit, rank, owner)))
        .collect()
}
