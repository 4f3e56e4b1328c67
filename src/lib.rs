//! # nertz-sim
//!
//! A deterministic simulator for Nertz, the real-time multiplayer
//! solitaire game, built to gather win-rate and round-length statistics
//! for scripted play.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: one seeded ChaCha8 stream per table drives every
//!    shuffle and every contested grant. Same seed, same games.
//!
//! 2. **Simultaneous play in discrete ticks**: players move in a rotating
//!    seat order, and Middle plays are collected and arbitrated before any
//!    is applied.
//!
//! 3. **N-Player First**: tables seat 1 to 10 players; nothing assumes a
//!    particular count.
//!
//! ## Modules
//!
//! - `core`: player IDs, RNG, actions, configuration
//! - `cards`: cards, suits, zones, decks
//! - `stack`: the Nertz, Solitaire, Hand and Middle stacks
//! - `rules`: placement legality, look-ahead, scoring
//! - `engine`: player decisions, arbitration, tick/round/game loops
//! - `sim`: batches of games and their statistics
//! - `error`: error types

pub mod cards;
pub mod core;
pub mod engine;
pub mod error;
pub mod rules;
pub mod sim;
pub mod stack;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ActionSource, ActionStatus,
    GameRng, GameRngState,
    MiddleStackId, PlayerId, PlayerMap,
    PlayerConfig, Skill, Strategy, TableConfig, MAX_PLAYERS, ROSTER,
};

pub use crate::cards::{full_deck, Card, Color, Suit, Zone, DECK_SIZE};

pub use crate::stack::{HandStack, MiddleStack, MiddleStacks, NertzStack, Placement, SolitaireStack, Stack};

pub use crate::rules::{apply_score_jump, can_stack_after, middle_accepts, pick_winner, solitaire_accepts};

pub use crate::engine::{arbitrate, GameRecord, Layout, Player, Request, RoundOutcome, Table, TickReport, Turn};

pub use crate::sim::{BatchReport, BatchSummary, SimulationConfig, Simulator};

pub use crate::error::{ConfigError, NertzError, Result};
