//! Game categories and per-category data storage.
//!
//! ## GameKind
//!
//! The fixed set of games in the hub. Scores are partitioned by it.
//!
//! ## CategoryMap
//!
//! Per-category storage backed by an array for O(1) access.
//! Supports iteration and indexing by `GameKind`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the hub's games.
///
/// Serialized as the lowercase name (`"memory"`, `"trivia"`, `"puzzle"`),
/// which is the `gameType` value in persisted scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Memory,
    Trivia,
    Puzzle,
}

impl GameKind {
    /// All games, in menu order.
    pub const ALL: [GameKind; 3] = [GameKind::Memory, GameKind::Trivia, GameKind::Puzzle];

    /// Dense index in `0..3`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            GameKind::Memory => 0,
            GameKind::Trivia => 1,
            GameKind::Puzzle => 2,
        }
    }

    /// Lowercase name, as persisted.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameKind::Memory => "memory",
            GameKind::Trivia => "trivia",
            GameKind::Puzzle => "puzzle",
        }
    }

    /// Parse a lowercase name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category data storage with O(1) access.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMap<T> {
    data: [T; 3],
}

impl<T> CategoryMap<T> {
    /// Create a new map with values from a factory function.
    pub fn new(factory: impl Fn(GameKind) -> T) -> Self {
        Self {
            data: GameKind::ALL.map(factory),
        }
    }

    /// Get a reference to a category's data.
    #[must_use]
    pub fn get(&self, kind: GameKind) -> &T {
        &self.data[kind.index()]
    }

    /// Get a mutable reference to a category's data.
    pub fn get_mut(&mut self, kind: GameKind) -> &mut T {
        &mut self.data[kind.index()]
    }

    /// Iterate over (GameKind, &T) pairs in menu order.
    pub fn iter(&self) -> impl Iterator<Item = (GameKind, &T)> {
        GameKind::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (GameKind, &mut T) pairs in menu order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (GameKind, &mut T)> {
        GameKind::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<GameKind> for CategoryMap<T> {
    type Output = T;

    fn index(&self, kind: GameKind) -> &Self::Output {
        self.get(kind)
    }
}

impl<T> IndexMut<GameKind> for CategoryMap<T> {
    fn index_mut(&mut self, kind: GameKind) -> &mut Self::Output {
        self.get_mut(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_kind_names() {
        assert_eq!(GameKind::Memory.as_str(), "memory");
        assert_eq!(format!("{}", GameKind::Puzzle), "puzzle");
        assert_eq!(GameKind::parse("trivia"), Some(GameKind::Trivia));
        assert_eq!(GameKind::parse("Trivia"), None);
    }

    #[test]
    fn test_game_kind_serde() {
        let json = serde_json::to_string(&GameKind::Puzzle).unwrap();
        assert_eq!(json, "\"puzzle\"");

        let kind: GameKind = serde_json::from_str("\"memory\"").unwrap();
        assert_eq!(kind, GameKind::Memory);

        assert!(serde_json::from_str::<GameKind>("\"chess\"").is_err());
    }

    #[test]
    fn test_game_kind_index_dense() {
        for (i, kind) in GameKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_category_map_new() {
        let map: CategoryMap<usize> = CategoryMap::new(|k| k.index() * 10);

        assert_eq!(map[GameKind::Memory], 0);
        assert_eq!(map[GameKind::Trivia], 10);
        assert_eq!(map[GameKind::Puzzle], 20);
    }

    #[test]
    fn test_category_map_mutation() {
        let mut map: CategoryMap<Vec<u32>> = CategoryMap::default();

        map[GameKind::Trivia].push(5);

        assert!(map[GameKind::Memory].is_empty());
        assert_eq!(map[GameKind::Trivia], vec![5]);
        assert!(map[GameKind::Puzzle].is_empty());
    }

    #[test]
    fn test_category_map_iter() {
        let map: CategoryMap<usize> = CategoryMap::new(|k| k.index());

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(
            pairs,
            vec![(GameKind::Memory, &0), (GameKind::Trivia, &1), (GameKind::Puzzle, &2)]
        );
    }
}
