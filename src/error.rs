//! Error types.

use crate::puzzle::Position;

/// A cell array that is not a valid puzzle board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("tile value {0} is outside 1..=8")]
    TileOutOfRange(u8),

    #[error("tile {0} appears more than once")]
    DuplicateTile(u8),

    #[error("board must have exactly one empty cell, found {0}")]
    EmptyCount(usize),
}

/// A move whose target is not next to the empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{target} is not adjacent to the empty cell at {empty}")]
pub struct IllegalMove {
    pub target: Position,
    pub empty: Position,
}

/// Problems building a score record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("player name is empty")]
    EmptyPlayerName,
}

/// Failures writing the score store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
