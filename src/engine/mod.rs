//! The simulation engine.
//!
//! - `player`: one seat's stacks and its fixed-precedence decision procedure
//! - `arbiter`: resolving simultaneous requests for the same Middle stack
//! - `table`: the tick, round and game loops
//! - `game`: round outcomes and game records

pub mod arbiter;
pub mod game;
pub mod player;
pub mod table;

pub use arbiter::{arbitrate, Request, Requests};
pub use game::{Game, GameOpening, GameRecord, RoundOutcome};
pub use player::{Layout, Player, Turn};
pub use table::{Table, TickReport};
