use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::First, PlayerId::Second];

    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    /// Slot index (0 or 1), also the raw owner id used in observations.
    pub fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        Cell::Owner(self)
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            PlayerId::First => "First",
            PlayerId::Second => "Second",
        }
    }

    /// Board glyph: `X` for the first player, `O` for the second.
    pub fn symbol(self) -> char {
        match self {
            PlayerId::First => 'X',
            PlayerId::Second => 'O',
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value for each player, indexed by [`PlayerId`].
///
/// Both slots always exist, so per-player rewards and termination flags can
/// never silently drop the opponent's entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    slots: [T; 2],
}

impl<T> PlayerMap<T> {
    pub fn new(first: T, second: T) -> Self {
        PlayerMap {
            slots: [first, second],
        }
    }

    /// Build a map by evaluating `f` once per player.
    pub fn from_fn(mut f: impl FnMut(PlayerId) -> T) -> Self {
        PlayerMap::new(f(PlayerId::First), f(PlayerId::Second))
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.slots.iter())
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PlayerMap<U> {
        PlayerMap::new(f(&self.slots[0]), f(&self.slots[1]))
    }
}

impl<T: Clone> PlayerMap<T> {
    pub fn splat(value: T) -> Self {
        PlayerMap::new(value.clone(), value)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.slots[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.slots[player.index()]
    }
}
