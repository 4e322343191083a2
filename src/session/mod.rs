//! Play sessions and the controller that owns them.
//!
//! A session is the transient state of one game attempt. It is created when
//! a game starts, mutated by player intents and dropped when the player
//! leaves or starts another game. Nothing in a session is persisted.
//!
//! Every session moves through the same states:
//!
//! ```text
//! NotStarted --start--> InProgress --last move--> Completed
//!                           ^                         |
//!                           +--------- start ---------+
//! ```
//!
//! `Completed` is terminal; further intents are rejected until a new game
//! starts. Completion yields a [`SessionComplete`] event that the
//! presentation layer turns into a [`ScoreRecord`] once the player has
//! entered a name.

pub mod controller;
pub mod memory;
pub mod puzzle;
pub mod trivia;

pub use controller::{ActiveSession, GameSessionController};
pub use memory::{memory_score, Card, Flip, MemorySession};
pub use puzzle::{PuzzleSession, Slide};
pub use trivia::{answer_points, question_bank, Answer, Question, TriviaSession, Verdict};

use serde::{Deserialize, Serialize};

use crate::core::GameKind;
use crate::error::{IllegalMove, ScoreError};
use crate::scores::ScoreRecord;

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No game running.
    NotStarted,
    /// Accepting intents.
    InProgress,
    /// Finished (for the puzzle: solved). Terminal.
    Completed,
}

/// Common read access to a running session.
pub trait GameSession {
    /// Which game this session plays.
    fn kind(&self) -> GameKind;

    /// `InProgress` or `Completed`.
    fn status(&self) -> SessionStatus;

    /// Completion event, once the session has finished.
    fn completion(&self) -> Option<&SessionComplete>;

    /// Whole seconds since the session started, frozen at completion.
    fn elapsed_secs(&self, now_millis: u64) -> u64;

    fn is_complete(&self) -> bool {
        self.status() == SessionStatus::Completed
    }
}

/// Game-specific numbers behind a final score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Summary {
    Puzzle { moves: u32, elapsed_secs: u64 },
    Memory { moves: u32, matches: u32, elapsed_secs: u64 },
    Trivia { correct: u32, total: u32 },
}

/// Emitted once when a session finishes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionComplete {
    pub kind: GameKind,
    pub score: u64,
    pub summary: Summary,
}

impl SessionComplete {
    /// Build the score record for this result.
    ///
    /// This is where player names are validated: blank names are rejected.
    pub fn into_record(
        self,
        player_name: &str,
        id: impl Into<String>,
        timestamp: u64,
    ) -> Result<ScoreRecord, ScoreError> {
        ScoreRecord::new(id, player_name, self.score, self.kind, timestamp)
    }
}

/// Why an intent was ignored. No state changes when an intent is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("no game is running")]
    NoSession,

    #[error("the running game is {active}, not {requested}")]
    WrongGame { active: GameKind, requested: GameKind },

    #[error("the game is already finished")]
    Finished,

    #[error("index {0} is out of range")]
    OutOfRange(usize),

    #[error(transparent)]
    IllegalMove(#[from] IllegalMove),

    #[error("card {0} is already face up")]
    CardFaceUp(usize),
}
