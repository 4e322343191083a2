//! Session integration tests: full games from start to leaderboard.

use std::collections::{HashMap, VecDeque};

use game_hub::core::{Clock, GameKind, GameRng, HubConfig, ManualClock, MemoryConfig, StoreConfig};
use game_hub::puzzle::{compute_score, random_walk, solved_board, Board, Position};
use game_hub::scores::{MemoryStorage, ScoreStore};
use game_hub::session::{
    memory_score, Flip, GameSession, GameSessionController, PuzzleSession, Rejection, SessionStatus,
    Summary, Verdict,
};

fn controller(config: HubConfig, seed: u64) -> (GameSessionController<ManualClock>, ManualClock) {
    let clock = ManualClock::new(1_700_000_000_000);
    (GameSessionController::new(config, GameRng::new(seed), clock.clone()), clock)
}

/// Shortest sequence of tiles to slide to solve `start`.
fn solve(start: Board) -> Vec<Position> {
    let mut parent: HashMap<Board, (Board, Position)> = HashMap::new();
    let mut queue = VecDeque::from([start]);
    let mut found = start.is_solved();

    while let Some(board) = queue.pop_front() {
        if board.is_solved() {
            found = true;
            break;
        }
        for target in board.legal_moves() {
            let next = board.apply_move(target).unwrap();
            if next != start && !parent.contains_key(&next) {
                parent.insert(next, (board, target));
                queue.push_back(next);
            }
        }
    }
    assert!(found, "board should be solvable");

    let mut path = Vec::new();
    let mut board = solved_board();
    while board != start {
        let (prev, target) = parent[&board];
        path.push(target);
        board = prev;
    }
    path.reverse();
    path
}

/// A 42-step walk whose reverse only reaches the solved board at the end.
fn forty_two_move_board() -> (Board, Vec<Position>) {
    for seed in 0.. {
        let walk = random_walk(solved_board(), 42, &mut GameRng::new(seed));
        let path: Vec<Position> = walk.trail.iter().rev().copied().collect();

        let mut board = walk.board;
        let mut early = board.is_solved();
        for (i, &p) in path.iter().enumerate() {
            board = board.apply_move(p).unwrap();
            if board.is_solved() && i + 1 < path.len() {
                early = true;
            }
        }
        if !early {
            return (walk.board, path);
        }
    }
    unreachable!()
}

// =============================================================================
// Puzzle
// =============================================================================

#[test]
fn test_puzzle_42_moves_120_seconds() {
    let (board, path) = forty_two_move_board();
    let start = 5_000;
    let mut session = PuzzleSession::with_board(board, start);

    let mut completion = None;
    for (i, &p) in path.iter().enumerate() {
        let now = if i + 1 == path.len() { start + 120_000 } else { start + i as u64 * 1_000 };
        let slide = session.slide(p.index(), now).unwrap();
        completion = slide.completion;
    }

    let done = completion.unwrap();
    assert_eq!(done.score, 3090);
    assert_eq!(done.summary, Summary::Puzzle { moves: 42, elapsed_secs: 120 });
}

#[test]
fn test_puzzle_through_controller_to_leaderboard() {
    let (mut hub, clock) = controller(HubConfig::default(), 77);
    let mut store = ScoreStore::load(MemoryStorage::new(), StoreConfig::default());

    hub.start(GameKind::Puzzle);
    let path = solve(*hub.puzzle().unwrap().board());

    for &p in &path {
        clock.advance_millis(700);
        hub.move_tile(p.index()).unwrap();
    }

    assert_eq!(hub.status(), SessionStatus::Completed);
    let secs = path.len() as u64 * 700 / 1000;
    let done = hub.take_completion().unwrap();
    assert_eq!(done.score, compute_score(path.len() as u32, secs));

    // Solved is terminal
    let any = hub.puzzle().unwrap().board().legal_moves()[0];
    assert_eq!(hub.move_tile(any.index()), Err(Rejection::Finished));

    let record = hub.make_record(done, "  Ada ").unwrap();
    store.submit(record).unwrap();

    let board = store.top_scores(Some(GameKind::Puzzle));
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].player_name(), "Ada");
    assert_eq!(board[0].score(), compute_score(path.len() as u32, secs));
}

#[test]
fn test_illegal_moves_do_not_count() {
    let (mut hub, _) = controller(HubConfig::default(), 3);
    hub.start(GameKind::Puzzle);
    let board = *hub.puzzle().unwrap().board();

    let illegal: Vec<usize> = Position::all()
        .filter(|p| !board.can_move(*p))
        .map(|p| p.index())
        .collect();
    for index in illegal {
        assert!(hub.move_tile(index).is_err());
    }
    assert!(hub.move_tile(42).is_err());

    assert_eq!(hub.puzzle().unwrap().moves(), 0);
    assert_eq!(*hub.puzzle().unwrap().board(), board);
}

// =============================================================================
// Memory
// =============================================================================

#[test]
fn test_memory_game_with_one_mismatch() {
    let memory = MemoryConfig::default().with_symbols(["x", "y", "z"]);
    let config = HubConfig::default().with_memory(memory);
    let (mut hub, clock) = controller(config, 12);
    hub.start(GameKind::Memory);

    let cards: Vec<String> =
        hub.memory().unwrap().cards().iter().map(|c| c.symbol.clone()).collect();
    let pair = |s: &str| -> (usize, usize) {
        let idx: Vec<_> =
            cards.iter().enumerate().filter(|(_, c)| *c == s).map(|(i, _)| i).collect();
        (idx[0], idx[1])
    };
    let (x1, x2) = pair("x");
    let (y1, y2) = pair("y");
    let (z1, z2) = pair("z");

    hub.flip_card(x1).unwrap();
    assert!(matches!(hub.flip_card(y1).unwrap(), Flip::Mismatched { .. }));

    for (a, b) in [(x1, x2), (y1, y2)] {
        hub.flip_card(a).unwrap();
        hub.flip_card(b).unwrap();
    }
    clock.advance_secs(20);
    hub.flip_card(z1).unwrap();
    hub.flip_card(z2).unwrap();

    let done = hub.take_completion().unwrap();
    assert_eq!(done.kind, GameKind::Memory);
    assert_eq!(done.score, memory_score(3, 4, 20));
    assert_eq!(done.summary, Summary::Memory { moves: 4, matches: 3, elapsed_secs: 20 });
}

// =============================================================================
// Trivia
// =============================================================================

#[test]
fn test_trivia_mixed_answers_and_timeout() {
    let (mut hub, _) = controller(HubConfig::default(), 5);
    hub.start(GameKind::Trivia);
    let total = hub.trivia().unwrap().total_questions();
    assert_eq!(total, 8);

    // First question: run out the clock
    let mut timeout = None;
    while timeout.is_none() {
        timeout = hub.tick();
    }
    assert_eq!(timeout.unwrap().verdict, Verdict::TimedOut);

    // Second: wrong answer
    let q = *hub.trivia().unwrap().current_question().unwrap();
    assert_eq!(hub.answer((q.correct + 1) % 4).unwrap().verdict, Verdict::Incorrect);

    // Rest: correct after 3 seconds each (27 left -> 109 points)
    let mut last = None;
    for _ in 2..total {
        for _ in 0..3 {
            assert!(hub.tick().is_none());
        }
        let q = *hub.trivia().unwrap().current_question().unwrap();
        let answer = hub.answer(q.correct).unwrap();
        assert_eq!(answer.points, 109);
        last = Some(answer);
    }

    let done = last.unwrap().completion.unwrap();
    assert_eq!(done.score, 109 * 6);
    assert_eq!(done.summary, Summary::Trivia { correct: 6, total: 8 });
    assert!(hub.tick().is_none());
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_switching_games_discards_state() {
    let (mut hub, _) = controller(HubConfig::default(), 9);
    hub.start(GameKind::Trivia);
    hub.answer(0).unwrap();

    hub.start(GameKind::Memory);
    assert!(hub.trivia().is_none());
    assert_eq!(hub.active_kind(), Some(GameKind::Memory));
    assert_eq!(hub.memory().unwrap().moves(), 0);
    assert_eq!(hub.active().unwrap().status(), SessionStatus::InProgress);
    assert!(hub.take_completion().is_none());
}

#[test]
fn test_same_seed_same_games() {
    let (mut a, _) = controller(HubConfig::default(), 100);
    let (mut b, _) = controller(HubConfig::default(), 100);

    a.start(GameKind::Puzzle);
    b.start(GameKind::Puzzle);
    assert_eq!(a.puzzle().unwrap().board(), b.puzzle().unwrap().board());

    a.start(GameKind::Memory);
    b.start(GameKind::Memory);
    assert_eq!(a.memory().unwrap().cards(), b.memory().unwrap().cards());
}

#[test]
fn test_session_trait_view() {
    let (mut hub, clock) = controller(HubConfig::default(), 1);
    hub.start(GameKind::Puzzle);
    clock.advance_secs(9);

    let session = hub.puzzle().unwrap();
    assert_eq!(session.kind(), GameKind::Puzzle);
    assert_eq!(session.status(), SessionStatus::InProgress);
    assert!(session.completion().is_none());
    assert_eq!(session.elapsed_secs(clock.now_millis()), 9);
}

#[test]
fn test_loaded_config_below_minimums_still_playable() {
    let json = r#"{
        "puzzle": {"shuffle_moves": 0, "reroll_solved": true},
        "memory": {"symbols": []},
        "trivia": {"seconds_per_question": 30},
        "store": {"storage_key": "gameScores", "capacity": 0}
    }"#;
    let config: HubConfig = serde_json::from_str(json).unwrap();
    let (mut hub, _) = controller(config, 4);

    hub.start(GameKind::Puzzle);
    assert!(!hub.puzzle().unwrap().is_solved());

    hub.start(GameKind::Memory);
    assert_eq!(hub.memory().unwrap().pair_count(), 8);
}
