//! Error types.
//!
//! Asking whether a move is legal never errors; a `false` answer is a normal
//! result. `NertzError` covers contract violations inside the engine (reading
//! a card from an empty stack, committing a move that is no longer legal) and
//! the redeal limit. `ConfigError` covers loading and validating batch
//! configuration.

use thiserror::Error;

use crate::cards::{Card, Zone};
use crate::core::MiddleStackId;

/// Engine errors. Any of these aborts the current round only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NertzError {
    #[error("{zone} stack is empty")]
    EmptyStack { zone: Zone },

    #[error("{card} cannot be placed on the {zone} stack")]
    IllegalPlacement { card: Card, zone: Zone },

    #[error("only an Ace can start a middle stack, got {card}")]
    NotAnAce { card: Card },

    #[error("no middle stack with handle {0}")]
    UnknownMiddleStack(MiddleStackId),

    #[error("gave up after {attempts} redeals without a scored round")]
    RedealLimit { attempts: u32 },
}

impl NertzError {
    /// Whether the game can continue by redealing the round.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, NertzError::RedealLimit { .. })
    }
}

/// Batch configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("player count {0} is out of range (1..={max})", max = crate::core::config::MAX_PLAYERS)]
    InvalidPlayerCount(usize),

    #[error("no player counts to simulate")]
    NoPlayerCounts,

    #[error("games per player count must be positive")]
    NoGames,

    #[error("duplicate player name: {0}")]
    DuplicateName(String),
}

/// Convenience alias for engine results.
pub type Result<T, E = NertzError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::core::PlayerId;

    #[test]
    fn test_error_messages() {
        let err = NertzError::EmptyStack { zone: Zone::Nertz };
        assert_eq!(err.to_string(), "nertz stack is empty");

        let card = Card::new(Suit::Hearts, 5, PlayerId::new(0));
        let err = NertzError::IllegalPlacement { card, zone: Zone::Middle };
        assert_eq!(err.to_string(), "5H cannot be placed on the middle stack");

        assert_eq!(
            ConfigError::InvalidPlayerCount(11).to_string(),
            "player count 11 is out of range (1..=10)"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(NertzError::UnknownMiddleStack(MiddleStackId::new(2)).is_recoverable());
        assert!(!NertzError::RedealLimit { attempts: 5 }.is_recoverable());
    }
}
