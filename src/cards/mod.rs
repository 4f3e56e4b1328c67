//! Card identity, colour and zone tagging.
//!
//! Every player plays with a private 52-card deck; cards keep their owner for
//! life so Middle-stack scoring can credit the right player.

pub mod card;
pub mod deck;

pub use card::{Card, Color, Suit, Zone, ACE, KING};
pub use deck::{full_deck, DECK_SIZE};
