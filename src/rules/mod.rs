//! Rules of Nertz that are independent of who is playing.
//!
//! - `placement`: Solitaire and Middle legality, plus the n-deep look-ahead
//! - `scoring`: round deltas, the score jump, and picking a winner

pub mod placement;
pub mod scoring;

pub use placement::{can_stack_after, middle_accepts, solitaire_accepts, MAX_LOOKAHEAD};
pub use scoring::{apply_score_jump, pick_winner, round_deltas, MIDDLE_CARD_POINTS, NERTZ_CARD_POINTS};
