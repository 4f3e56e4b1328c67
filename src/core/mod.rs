//! Core engine types: seats, handles, requests, RNG, configuration.
//!
//! Nothing in here knows the rules of Nertz; the rules live in `stack`,
//! `rules` and `engine`.

pub mod action;
pub mod config;
pub mod handle;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord, ActionSource, ActionStatus};
pub use config::{PlayerConfig, Skill, Strategy, TableConfig, MAX_PLAYERS, ROSTER};
pub use handle::MiddleStackId;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
