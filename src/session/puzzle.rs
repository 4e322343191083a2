//! Sliding puzzle session.
//!
//! Starts from a freshly shuffled board with the move counter at zero.
//! Each legal slide adds exactly one move; rejected slides change nothing.
//! The slide that produces the solved board completes the session.

use tracing::{debug, info};

use super::{GameSession, Rejection, SessionComplete, SessionStatus, Summary};
use crate::core::{elapsed_secs, GameKind, GameRng, PuzzleConfig};
use crate::puzzle::{compute_score, shuffle, Board, Position};

/// Result of an accepted slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    /// Board after the slide.
    pub board: Board,
    /// Move count after the slide.
    pub moves: u32,
    /// Set when this slide solved the puzzle.
    pub completion: Option<SessionComplete>,
}

/// One attempt at the sliding puzzle.
#[derive(Clone, Debug)]
pub struct PuzzleSession {
    board: Board,
    moves: u32,
    started_at: u64,
    completion: Option<SessionComplete>,
}

impl PuzzleSession {
    /// Start a session on a shuffled board at time `now_millis`.
    pub fn start(config: &PuzzleConfig, rng: &mut GameRng, now_millis: u64) -> Self {
        Self::with_board(shuffle(config, rng), now_millis)
    }

    /// Start a session on a given board.
    ///
    /// The board is taken as-is; a solved board still needs one move away
    /// and back before the session completes.
    pub fn with_board(board: Board, now_millis: u64) -> Self {
        debug!(board = %board, "puzzle session started");
        Self {
            board,
            moves: 0,
            started_at: now_millis,
            completion: None,
        }
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Legal slides so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Start time in milliseconds since the Unix epoch.
    #[must_use]
    pub fn started_at(&self) -> u64 {
        self.started_at
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.completion.is_some()
    }

    /// Slide the tile at cell `index` into the empty cell.
    pub fn slide(&mut self, index: usize, now_millis: u64) -> Result<Slide, Rejection> {
        if self.completion.is_some() {
            return Err(Rejection::Finished);
        }
        let target = Position::new(index).ok_or(Rejection::OutOfRange(index))?;
        let board = self.board.apply_move(target)?;

        self.board = board;
        self.moves += 1;
        debug!(target = index, moves = self.moves, "tile moved");

        if board.is_solved() {
            let elapsed = elapsed_secs(self.started_at, now_millis);
            let done = SessionComplete {
                kind: GameKind::Puzzle,
                score: compute_score(self.moves, elapsed),
                summary: Summary::Puzzle {
                    moves: self.moves,
                    elapsed_secs: elapsed,
                },
            };
            info!(moves = self.moves, elapsed_secs = elapsed, score = done.score, "puzzle solved");
            self.completion = Some(done);
        }

        Ok(Slide {
            board,
            moves: self.moves,
            completion: self.completion.clone(),
        })
    }
}

impl GameSession for PuzzleSession {
    fn kind(&self) -> GameKind {
        GameKind::Puzzle
    }

    fn status(&self) -> SessionStatus {
        if self.is_solved() {
            SessionStatus::Completed
        } else {
            SessionStatus::InProgress
        }
    }

    fn completion(&self) -> Option<&SessionComplete> {
        self.completion.as_ref()
    }

    fn elapsed_secs(&self, now_millis: u64) -> u64 {
        match &self.completion {
            Some(SessionComplete {
                summary: Summary::Puzzle { elapsed_secs, .. },
                ..
            }) => *elapsed_secs,
            _ => elapsed_secs(self.started_at, now_millis),
        }
    }
}
