//! Puzzle score formula.
//!
//! `1000 + max(0, 300 - seconds) * 10 + max(0, 100 - moves) * 5`.
//! Existing leaderboards hold scores from this exact formula, including the
//! 300 second and 100 move bonus caps.

/// Points for any completed puzzle.
pub const BASE_SCORE: u64 = 1000;

/// Seconds after which the time bonus is gone.
pub const TIME_BONUS_SECS: u64 = 300;

/// Points per second under `TIME_BONUS_SECS`.
pub const TIME_BONUS_WEIGHT: u64 = 10;

/// Moves after which the move bonus is gone.
pub const MOVE_BONUS_MOVES: u64 = 100;

/// Points per move under `MOVE_BONUS_MOVES`.
pub const MOVE_BONUS_WEIGHT: u64 = 5;

/// Final score for a puzzle solved in `moves` moves and `elapsed_secs` seconds.
#[must_use]
pub fn compute_score(moves: u32, elapsed_secs: u64) -> u64 {
    let time_bonus = TIME_BONUS_SECS.saturating_sub(elapsed_secs);
    let move_bonus = MOVE_BONUS_MOVES.saturating_sub(u64::from(moves));
    BASE_SCORE + time_bonus * TIME_BONUS_WEIGHT + move_bonus * MOVE_BONUS_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_score() {
        assert_eq!(compute_score(42, 120), 3090);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(compute_score(0, 0), 1000 + 3000 + 500);
        assert_eq!(compute_score(100, 300), 1000);
        assert_eq!(compute_score(5000, 100_000), 1000);
    }

    #[test]
    fn test_bonus_floors_independent() {
        assert_eq!(compute_score(150, 0), 4000);
        assert_eq!(compute_score(0, 400), 1500);
    }
}
