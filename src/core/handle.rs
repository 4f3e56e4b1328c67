//! Stable handles for table-wide resources.
//!
//! Middle stacks are shared between every player at the table, so requests to
//! play onto one must name it by something that survives the stack being
//! borrowed, moved, or compared across players. A `MiddleStackId` is assigned
//! when the stack is created and is never reused within a round.

use serde::{Deserialize, Serialize};

/// Handle for a Middle stack, assigned in creation order within a round.
///
/// ```
/// use nertz_sim::core::MiddleStackId;
///
/// let first = MiddleStackId::new(0);
/// assert_eq!(first.index(), 0);
/// assert_eq!(format!("{}", first), "Middle(0)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MiddleStackId(pub u32);

impl MiddleStackId {
    /// Create a new handle.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position of the stack in the table's creation order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for MiddleStackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Middle({})", self.0)
    }
}
