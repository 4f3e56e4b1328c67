//! Seat identification and per-seat storage.
//!
//! ## PlayerId
//!
//! Seat index at the table. Cards record their owner as a `PlayerId`, so the
//! id doubles as the key for crediting Middle-stack cards at scoring time.
//!
//! ## PlayerMap
//!
//! Vec-backed per-seat storage, indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier. Seats are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every seat for a table of `player_count` players.
    ///
    /// ```
    /// use nertz_sim::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// Seats in tick order when `start` acts first, wrapping around.
    ///
    /// ```
    /// use nertz_sim::core::PlayerId;
    ///
    /// let order: Vec<_> = PlayerId::rotated(4, 2).map(|p| p.index()).collect();
    /// assert_eq!(order, vec![2, 3, 0, 1]);
    /// ```
    pub fn rotated(player_count: usize, start: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(move |offset| PlayerId(((start + offset) % player_count) as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per seat, indexed by `PlayerId`.
///
/// ```
/// use nertz_sim::core::{PlayerId, PlayerMap};
///
/// let mut scores = PlayerMap::from_vec(vec![0, 0, 0, 0]);
/// scores[PlayerId::new(1)] += 3;
/// assert_eq!(scores[PlayerId::new(1)], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Wrap values already in seat order. Tables seat at most `u8::MAX`.
    pub fn from_vec(seats: Vec<T>) -> Self {
        assert!(!seats.is_empty(), "a table needs at least one seat");
        assert!(seats.len() <= usize::from(u8::MAX), "too many seats: {}", seats.len());
        Self { seats }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.seats.len()).zip(&self.seats)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::all(self.seats.len()).zip(&mut self.seats)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.seats.iter()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.seats.iter_mut()
    }

    /// Map every seat's value, keeping seat order.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PlayerMap<U> {
        PlayerMap {
            seats: self.seats.iter().map(f).collect(),
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
