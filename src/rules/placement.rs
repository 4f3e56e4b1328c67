//! Placement legality and the n-deep look-ahead.
//!
//! These are free functions over `Option<&Card>` tops so the stack types and
//! the property tests share exactly one definition of each rule.

use crate::cards::{Card, ACE};

/// Deepest look-ahead any strategy uses.
pub const MAX_LOOKAHEAD: u8 = 2;

/// Solitaire rule: anything on an empty stack, otherwise opposite colour and
/// exactly one rank lower than the top.
#[must_use]
pub fn solitaire_accepts(top: Option<&Card>, card: &Card) -> bool {
    match top {
        None => true,
        Some(top) => !top.same_color(card) && card.rank + 1 == top.rank,
    }
}

/// Middle rule: same suit and exactly one rank higher than the top. An empty
/// Middle stack only takes an Ace.
#[must_use]
pub fn middle_accepts(top: Option<&Card>, card: &Card) -> bool {
    match top {
        None => card.rank == ACE,
        Some(top) => top.suit == card.suit && card.rank == top.rank + 1,
    }
}

/// Could `card` end up on top of `base` in a Solitaire run once up to
/// `depth` - 1 intervening cards are placed between them?
///
/// Gap 1 needs opposite colours and a rank one lower; gap 2 needs the same
/// colour and a rank two lower. `depth` is clamped to [`MAX_LOOKAHEAD`].
///
/// ```
/// use nertz_sim::cards::{Card, Suit};
/// use nertz_sim::core::PlayerId;
/// use nertz_sim::rules::can_stack_after;
///
/// let me = PlayerId::new(0);
/// let nine = Card::new(Suit::Hearts, 9, me);
/// let eight = Card::new(Suit::Clubs, 8, me);
/// let seven = Card::new(Suit::Diamonds, 7, me);
///
/// assert!(can_stack_after(&nine, &eight, 1));
/// assert!(!can_stack_after(&nine, &seven, 1));
/// assert!(can_stack_after(&nine, &seven, 2));
/// ```
#[must_use]
pub fn can_stack_after(base: &Card, card: &Card, depth: u8) -> bool {
    let same_color = base.same_color(card);
    let drop = i16::from(base.rank) - i16::from(card.rank);

    (1..=depth.min(MAX_LOOKAHEAD)).any(|gap| {
        // Colours alternate down a run, so an even gap means the same colour.
        let needs_same_color = gap % 2 == 0;
        same_color == needs_same_color && drop == i16::from(gap)
    })
}
