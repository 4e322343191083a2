//! 3×3 sliding puzzle engine.
//!
//! - `board`: positions, boards, legal moves, move application
//! - `shuffle`: random-walk shuffle that always yields a solvable board
//! - `scoring`: the completion score formula
//!
//! All operations are pure functions of their inputs plus an explicit
//! `GameRng` for shuffling.

pub mod board;
pub mod scoring;
pub mod shuffle;

pub use board::{
    apply_move, is_solved, legal_moves, solved_board, Board, Cell, Neighbors, Position, CELL_COUNT,
    MAX_TILE, SIDE,
};
pub use scoring::compute_score;
pub use shuffle::{random_walk, shuffle, Walk};
