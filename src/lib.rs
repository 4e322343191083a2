//! # game-hub
//!
//! Core of a casual game hub: a 3×3 sliding puzzle, a memory game and a
//! timed trivia quiz, plus a local leaderboard.
//!
//! ## Design Principles
//!
//! 1. **Always Solvable**: Puzzle boards are produced by walking random
//!    legal moves away from the solved board, never by permuting tiles.
//!
//! 2. **Deterministic**: All randomness flows through an injected
//!    `GameRng` and all time through an injected `Clock`, so a seed and a
//!    clock reproduce any session.
//!
//! 3. **No Ambient State**: The controller owns exactly one session; the
//!    score store is an explicit value. Nothing is global.
//!
//! ## Architecture
//!
//! The presentation layer drives everything synchronously:
//!
//! 1. `GameSessionController::start` a game.
//! 2. Forward intents (`move_tile`, `flip_card`, `answer`, `tick`).
//! 3. On completion, collect a player name and build a `ScoreRecord`.
//! 4. `ScoreStore::submit` it; `ScoreStore::top_scores` for leaderboards.
//!
//! ## Modules
//!
//! - `core`: Game categories, RNG, clock, configuration
//! - `puzzle`: Board, legal moves, shuffling, scoring
//! - `session`: Puzzle, memory and trivia sessions and their controller
//! - `scores`: Score records, storage backends, ranked score store
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod puzzle;
pub mod scores;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    CategoryMap, Clock, GameKind, GameRng, HubConfig, ManualClock, MemoryConfig, PuzzleConfig,
    StoreConfig, SystemClock, TriviaConfig,
};

pub use crate::error::{BoardError, IllegalMove, ScoreError, StoreError};

pub use crate::puzzle::{
    apply_move, compute_score, is_solved, legal_moves, shuffle, solved_board, Board, Position,
};

pub use crate::scores::{
    share_text, FileStorage, KeyValueStorage, MemoryStorage, ScoreRecord, ScoreStore,
};

pub use crate::session::{
    ActiveSession, Answer, Flip, GameSession, GameSessionController, MemorySession, PuzzleSession,
    Rejection, SessionComplete, SessionStatus, Slide, Summary, TriviaSession, Verdict,
};
