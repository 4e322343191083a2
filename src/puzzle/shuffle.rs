//! Guaranteed-solvable shuffling.
//!
//! A shuffle walks random legal moves forward from the solved board, so the
//! result can always be walked back. No permutation is ever generated
//! directly and no parity check is needed to accept the result.

use tracing::debug;

use super::board::{Board, Position};
use crate::core::{GameRng, PuzzleConfig};

/// Result of a random walk.
#[derive(Clone, Debug)]
pub struct Walk {
    /// Board at the end of the walk.
    pub board: Board,

    /// Empty-cell position before each step, in order.
    ///
    /// Sliding the tiles at these positions in reverse order undoes the walk.
    pub trail: Vec<Position>,
}

/// Walk `steps` uniformly chosen legal moves from `start`.
pub fn random_walk(start: Board, steps: usize, rng: &mut GameRng) -> Walk {
    let mut board = start;
    let mut trail = Vec::with_capacity(steps);

    for _ in 0..steps {
        let moves = board.legal_moves();
        let Some(&target) = rng.choose(&moves) else {
            break;
        };
        trail.push(board.empty());
        if let Ok(next) = board.apply_move(target) {
            board = next;
        }
    }

    Walk { board, trail }
}

/// Produce a shuffled, solvable board.
///
/// Walks `config.walk_length()` moves from the solved board. If the walk
/// ends back on the solved board and `config.reroll_solved` is set, walks
/// again.
pub fn shuffle(config: &PuzzleConfig, rng: &mut GameRng) -> Board {
    loop {
        let walk = random_walk(Board::solved(), config.walk_length(), rng);
        if !(config.reroll_solved && walk.board.is_solved()) {
            return walk.board;
        }
        debug!("shuffle returned to the solved board, walking again");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_trail_length() {
        let mut rng = GameRng::new(42);
        let walk = random_walk(Board::solved(), 50, &mut rng);
        assert_eq!(walk.trail.len(), 50);
        assert_eq!(walk.trail[0], Board::solved().empty());
    }

    #[test]
    fn test_walk_reverses_to_start() {
        let mut rng = GameRng::new(7);
        let walk = random_walk(Board::solved(), 200, &mut rng);

        let mut board = walk.board;
        for &pos in walk.trail.iter().rev() {
            board = board.apply_move(pos).unwrap();
        }
        assert!(board.is_solved());
    }

    #[test]
    fn test_zero_step_walk() {
        let mut rng = GameRng::new(1);
        let walk = random_walk(Board::solved(), 0, &mut rng);
        assert!(walk.board.is_solved());
        assert!(walk.trail.is_empty());
    }

    #[test]
    fn test_shuffle_deterministic() {
        let config = PuzzleConfig::default();
        let a = shuffle(&config, &mut GameRng::new(99));
        let b = shuffle(&config, &mut GameRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_with_deserialized_zero_moves() {
        let config: PuzzleConfig =
            serde_json::from_str(r#"{"shuffle_moves": 0, "reroll_solved": true}"#).unwrap();

        let board = shuffle(&config, &mut GameRng::new(11));
        assert!(!board.is_solved());
        assert!(board.is_solvable());
    }

    #[test]
    fn test_shuffle_is_solvable_and_unsolved() {
        let config = PuzzleConfig::default();
        let mut rng = GameRng::new(3);
        for _ in 0..20 {
            let board = shuffle(&config, &mut rng);
            assert!(board.is_solvable());
            assert!(!board.is_solved());
        }
    }
}
