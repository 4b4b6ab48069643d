//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat index. Seats are 0-based internally and displayed
//! 1-based ("Player 1", "Player 2", ...), which is also the default name
//! given to each expedition member.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a `Vec` for O(1) access, indexable by
//! `PlayerId`. Used for the roster itself and for every per-player report
//! (claims, totals, busted flags).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Largest supported table.
pub const MAX_PLAYERS: usize = 8;

/// Seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every seat of a table with `player_count` players.
    ///
    /// ```
    /// use temple_expedition::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// Default display name for this seat.
    #[must_use]
    pub fn default_name(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 as u16 + 1)
    }
}

/// Per-seat data with O(1) access.
///
/// ```
/// use temple_expedition::core::{PlayerId, PlayerMap};
///
/// let mut claims: PlayerMap<u32> = PlayerMap::with_value(3, 0);
/// claims[PlayerId::new(1)] += 7;
/// assert_eq!(claims.iter().map(|(_, c)| *c).sum::<u32>(), 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build a map from a factory receiving each seat.
    pub fn new(player_count: usize, factory: impl FnMut(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(
            player_count <= MAX_PLAYERS,
            "At most {MAX_PLAYERS} players supported"
        );

        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Build a map from an existing per-seat vector, seat order preserved.
    ///
    /// Returns `None` for an empty or oversized vector.
    pub fn from_vec(data: Vec<T>) -> Option<Self> {
        if data.is_empty() || data.len() > MAX_PLAYERS {
            return None;
        }
        Some(Self { data })
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }

    /// Project every entry into a new map of the same shape.
    pub fn map<U>(&self, mut f: impl FnMut(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: self.iter().map(|(id, v)| f(id, v)).collect(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(PlayerId::new(0).to_string(), "Player 1");
        assert_eq!(PlayerId::new(2).default_name(), "Player 3");
        assert_eq!(PlayerId::new(4).index(), 4);
    }

    #[test]
    fn test_player_map_new_and_index() {
        let mut map: PlayerMap<u32> = PlayerMap::new(3, |p| p.index() as u32 * 10);
        assert_eq!(map[PlayerId::new(2)], 20);

        map[PlayerId::new(0)] = 5;
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![5, 10, 20]);
    }

    #[test]
    fn test_player_map_map_preserves_seats() {
        let map: PlayerMap<u32> = PlayerMap::new(4, |p| p.index() as u32);
        let doubled = map.map(|_, v| v * 2);

        assert_eq!(doubled.player_count(), 4);
        assert_eq!(doubled[PlayerId::new(3)], 6);
    }

    #[test]
    fn test_from_vec_bounds() {
        assert!(PlayerMap::<u8>::from_vec(vec![]).is_none());
        assert!(PlayerMap::from_vec(vec![0u8; MAX_PLAYERS + 1]).is_none());
        assert_eq!(PlayerMap::from_vec(vec![1u8, 2]).map(|m| m.player_count()), Some(2));
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(2, |p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<u32> = PlayerMap::with_value(0, 0);
    }
}
