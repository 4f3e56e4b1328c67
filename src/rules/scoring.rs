//! Round scoring.
//!
//! Every card resting in a Middle stack earns its owner a point, whoever
//! played it there; every card left in a player's own Nertz stack costs two.

use crate::cards::Card;
use crate::core::{PlayerId, PlayerMap};

/// Points per own card in the Middle.
pub const MIDDLE_CARD_POINTS: i32 = 1;

/// Points per card left in the Nertz stack.
pub const NERTZ_CARD_POINTS: i32 = -2;

/// Score changes for one completed round.
///
/// ```
/// use nertz_sim::cards::{Card, Suit};
/// use nertz_sim::core::{PlayerId, PlayerMap};
/// use nertz_sim::rules::round_deltas;
///
/// let (p0, p1) = (PlayerId::new(0), PlayerId::new(1));
/// let middle = vec![Card::new(Suit::Hearts, 1, p0), Card::new(Suit::Hearts, 2, p1)];
/// let nertz_left = PlayerMap::from_vec(vec![0, 3]);
///
/// let deltas = round_deltas(middle.iter(), &nertz_left);
/// assert_eq!(deltas[p0], 1);
/// assert_eq!(deltas[p1], 1 - 6);
/// ```
pub fn round_deltas<'a>(
    middle_cards: impl IntoIterator<Item = &'a Card>,
    nertz_left: &PlayerMap<usize>,
) -> PlayerMap<i32> {
    let mut deltas = nertz_left.map(|&left| left as i32 * NERTZ_CARD_POINTS);
    for card in middle_cards {
        deltas[card.owner] += MIDDLE_CARD_POINTS;
    }
    deltas
}

/// Flip a score of exactly -50 to +50 and exactly -100 to +100.
///
/// Only those two values move; everything else is returned unchanged.
#[must_use]
pub const fn apply_score_jump(score: i32) -> i32 {
    match score {
        -50 => 50,
        -100 => 100,
        other => other,
    }
}

/// The player who has won, if any score reached `win_score`.
///
/// Seats are checked in order and each one at or above the line replaces the
/// previous pick, so when several cross in the same round the highest seat
/// wins regardless of score.
#[must_use]
pub fn pick_winner(scores: &PlayerMap<i32>, win_score: i32) -> Option<PlayerId> {
    scores
        .iter()
        .filter(|&(_, &score)| score >= win_score)
        .map(|(player, _)| player)
        .last()
}
