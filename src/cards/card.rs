//! Playing cards and the zones they travel through.
//!
//! A `Card` has a fixed identity (suit, rank, owner) and two mutable tags:
//! the zone of the stack currently holding it, and its face orientation.
//! Orientation only matters while the card sits in a Hand stack.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Rank of an Ace.
pub const ACE: u8 = 1;

/// Rank of a King.
pub const KING: u8 = 13;

/// Card colour, used by Solitaire placement and look-ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// The four suits. Hearts and Diamonds are red, Spades and Clubs black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Spades,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs];

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    /// Single-letter label used in logs.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }
}

/// Which kind of container currently holds a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Not in any stack (freshly created, or set aside during the deal).
    #[default]
    Unassigned,
    Nertz,
    Solitaire,
    Hand,
    Middle,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Unassigned => "unassigned",
            Zone::Nertz => "nertz",
            Zone::Solitaire => "solitaire",
            Zone::Hand => "hand",
            Zone::Middle => "middle",
        };
        f.write_str(name)
    }
}

/// A single playing card.
///
/// `Card` is `Copy`: stacks own their cards by value and moving a card is a
/// pop followed by a push, which restamps the zone tag.
///
/// ```
/// use nertz_sim::cards::{Card, Color, Suit, Zone};
/// use nertz_sim::core::PlayerId;
///
/// let card = Card::new(Suit::Diamonds, 12, PlayerId::new(2));
/// assert_eq!(card.color(), Color::Red);
/// assert_eq!(card.zone, Zone::Unassigned);
/// assert!(!card.face_up);
/// assert_eq!(card.to_string(), "QD");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,

    /// 1 (Ace) through 13 (King).
    pub rank: u8,

    /// The player whose deck this card belongs to.
    pub owner: PlayerId,

    /// Zone of the stack currently holding the card.
    pub zone: Zone,

    /// Face orientation. Only read while the card is in a Hand stack.
    pub face_up: bool,
}

impl Card {
    /// Create a face-down, unassigned card.
    #[must_use]
    pub fn new(suit: Suit, rank: u8, owner: PlayerId) -> Self {
        debug_assert!((ACE..=KING).contains(&rank), "rank out of range: {rank}");
        Self {
            suit,
            rank,
            owner,
            zone: Zone::Unassigned,
            face_up: false,
        }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// True when both cards are the same colour.
    #[must_use]
    pub fn same_color(&self, other: &Card) -> bool {
        self.color() == other.color()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rank {
            1 => write!(f, "A{}", self.suit.letter()),
            11 => write!(f, "J{}", self.suit.letter()),
            12 => write!(f, "Q{}", self.suit.letter()),
            13 => write!(f, "K{}", self.suit.letter()),
            n => write!(f, "{}{}", n, self.suit.letter()),
        }
    }
}
