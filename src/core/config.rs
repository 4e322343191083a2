//! Hub configuration types.
//!
//! Each game and the score store take their own config:
//! - `PuzzleConfig`: Shuffle length and re-roll policy
//! - `MemoryConfig`: Card symbols
//! - `TriviaConfig`: Per-question time limit
//! - `StoreConfig`: Storage key and leaderboard size
//! - `HubConfig`: Combines all of the above
//!
//! Defaults reproduce the hub's standard rules.

use serde::{Deserialize, Serialize};

/// Fewest random moves a puzzle shuffle may use.
pub const MIN_SHUFFLE_MOVES: usize = 500;

/// Card symbols dealt when none are configured.
pub const DEFAULT_SYMBOLS: [&str; 8] = ["🎮", "🎯", "🎲", "🎪", "🎨", "🎭", "🎸", "🎺"];

/// Sliding puzzle configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Random legal moves walked from the solved board.
    ///
    /// Shuffles never walk fewer than `MIN_SHUFFLE_MOVES`, whatever this says.
    pub shuffle_moves: usize,

    /// Walk again if the shuffle happens to land on the solved board.
    pub reroll_solved: bool,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            shuffle_moves: 1000,
            reroll_solved: true,
        }
    }
}

impl PuzzleConfig {
    /// Set the shuffle length.
    #[must_use]
    pub fn with_shuffle_moves(mut self, moves: usize) -> Self {
        assert!(
            moves >= MIN_SHUFFLE_MOVES,
            "Shuffle must walk at least {} moves",
            MIN_SHUFFLE_MOVES
        );
        self.shuffle_moves = moves;
        self
    }

    /// Moves a shuffle actually walks.
    #[must_use]
    pub fn walk_length(&self) -> usize {
        self.shuffle_moves.max(MIN_SHUFFLE_MOVES)
    }

    /// Accept a solved board as a shuffle result.
    #[must_use]
    pub fn allow_solved_start(mut self) -> Self {
        self.reroll_solved = false;
        self
    }
}

/// Memory game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// One symbol per pair; every symbol appears on exactly two cards.
    ///
    /// An empty list deals `DEFAULT_SYMBOLS`.
    pub symbols: Vec<String>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.into_iter().map(String::from).collect(),
        }
    }
}

impl MemoryConfig {
    /// Replace the card symbols.
    #[must_use]
    pub fn with_symbols<S: Into<String>>(mut self, symbols: impl IntoIterator<Item = S>) -> Self {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        assert!(!self.symbols.is_empty(), "Memory game needs at least 1 pair");
        self
    }

    /// Symbols actually dealt, one per pair.
    #[must_use]
    pub fn deck_symbols(&self) -> Vec<String> {
        if self.symbols.is_empty() {
            DEFAULT_SYMBOLS.into_iter().map(String::from).collect()
        } else {
            self.symbols.clone()
        }
    }

    /// Number of pairs on the table.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        if self.symbols.is_empty() {
            DEFAULT_SYMBOLS.len()
        } else {
            self.symbols.len()
        }
    }
}

/// Trivia game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaConfig {
    /// Seconds the player has for each question.
    pub seconds_per_question: u32,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            seconds_per_question: 30,
        }
    }
}

impl TriviaConfig {
    /// Set the per-question time limit.
    #[must_use]
    pub fn with_seconds_per_question(mut self, secs: u32) -> Self {
        assert!(secs > 0, "Questions need a non-zero time limit");
        self.seconds_per_question = secs;
        self
    }
}

/// Score store configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Key the score list is stored under.
    pub storage_key: String,

    /// Records kept per category (and returned by leaderboard queries).
    ///
    /// At least one record is always kept.
    pub capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: "gameScores".to_string(),
            capacity: 10,
        }
    }
}

impl StoreConfig {
    /// Set the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Records actually kept per category.
    #[must_use]
    pub fn kept_per_category(&self) -> usize {
        self.capacity.max(1)
    }

    /// Set the per-category capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Leaderboard must hold at least 1 score");
        self.capacity = capacity;
        self
    }
}

/// Complete hub configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubConfig {
    pub puzzle: PuzzleConfig,
    pub memory: MemoryConfig,
    pub trivia: TriviaConfig,
    pub store: StoreConfig,
}

impl HubConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the puzzle configuration.
    #[must_use]
    pub fn with_puzzle(mut self, puzzle: PuzzleConfig) -> Self {
        self.puzzle = puzzle;
        self
    }

    /// Replace the memory configuration.
    #[must_use]
    pub fn with_memory(mut self, memory: MemoryConfig) -> Self {
        self.memory = memory;
        self
    }

    /// Replace the trivia configuration.
    #[must_use]
    pub fn with_trivia(mut self, trivia: TriviaConfig) -> Self {
        self.trivia = trivia;
        self
    }

    /// Replace the store configuration.
    #[must_use]
    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }
}
