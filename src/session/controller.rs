//! Session controller.
//!
//! Owns the single active session and routes presentation-layer intents to
//! it. The controller never touches storage: completions are handed back to
//! the caller, who collects a player name and submits the resulting
//! `ScoreRecord` to a `ScoreStore`.
//!
//! ```
//! use game_hub::core::{GameKind, GameRng, HubConfig, ManualClock};
//! use game_hub::session::{GameSessionController, SessionStatus};
//!
//! let clock = ManualClock::new(0);
//! let mut hub = GameSessionController::new(HubConfig::default(), GameRng::new(42), clock.clone());
//!
//! assert_eq!(hub.status(), SessionStatus::NotStarted);
//! hub.start(GameKind::Puzzle);
//! assert_eq!(hub.status(), SessionStatus::InProgress);
//!
//! // Slide any legal tile
//! let board = *hub.puzzle().unwrap().board();
//! let target = board.legal_moves()[0];
//! clock.advance_secs(3);
//! let slide = hub.move_tile(target.index()).unwrap();
//! assert_eq!(slide.moves, 1);
//! ```

use tracing::{debug, info};

use super::{
    Answer, Flip, GameSession, MemorySession, PuzzleSession, Rejection, SessionComplete,
    SessionStatus, Slide, TriviaSession,
};
use crate::core::{Clock, GameKind, GameRng, HubConfig};
use crate::error::ScoreError;
use crate::scores::ScoreRecord;

/// The session currently being played.
#[derive(Clone, Debug)]
pub enum ActiveSession {
    Puzzle(PuzzleSession),
    Memory(MemorySession),
    Trivia(TriviaSession),
}

impl ActiveSession {
    fn as_session(&self) -> &dyn GameSession {
        match self {
            ActiveSession::Puzzle(s) => s,
            ActiveSession::Memory(s) => s,
            ActiveSession::Trivia(s) => s,
        }
    }

    #[must_use]
    pub fn kind(&self) -> GameKind {
        self.as_session().kind()
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.as_session().status()
    }

    #[must_use]
    pub fn completion(&self) -> Option<&SessionComplete> {
        self.as_session().completion()
    }

    #[must_use]
    pub fn elapsed_secs(&self, now_millis: u64) -> u64 {
        self.as_session().elapsed_secs(now_millis)
    }
}

/// Runs one game session at a time.
pub struct GameSessionController<C: Clock> {
    config: HubConfig,
    rng: GameRng,
    clock: C,
    active: Option<ActiveSession>,
    completion: Option<SessionComplete>,
}

impl<C: Clock> GameSessionController<C> {
    /// Create a controller with no active session.
    pub fn new(config: HubConfig, rng: GameRng, clock: C) -> Self {
        Self {
            config,
            rng,
            clock,
            active: None,
            completion: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    /// Start a new game, discarding any current session.
    pub fn start(&mut self, kind: GameKind) -> &ActiveSession {
        let now = self.clock.now_millis();
        let mut rng = self.rng.fork();

        if let Some(prev) = &self.active {
            debug!(game = %prev.kind(), status = ?prev.status(), "discarding session");
        }
        self.completion = None;

        let config = &self.config;
        let session = match kind {
            GameKind::Puzzle => {
                ActiveSession::Puzzle(PuzzleSession::start(&config.puzzle, &mut rng, now))
            }
            GameKind::Memory => {
                ActiveSession::Memory(MemorySession::start(&config.memory, &mut rng, now))
            }
            GameKind::Trivia => {
                ActiveSession::Trivia(TriviaSession::start(&config.trivia, &mut rng, now))
            }
        };
        info!(game = %kind, "session started");

        self.active.insert(session)
    }

    /// Leave the current game. Its state is dropped.
    pub fn leave(&mut self) {
        if let Some(prev) = self.active.take() {
            debug!(game = %prev.kind(), "session left");
        }
        self.completion = None;
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveSession> {
        self.active.as_ref()
    }

    /// Game of the current session.
    #[must_use]
    pub fn active_kind(&self) -> Option<GameKind> {
        self.active.as_ref().map(ActiveSession::kind)
    }

    /// Lifecycle state; `NotStarted` when no game is running.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.active.as_ref().map_or(SessionStatus::NotStarted, ActiveSession::status)
    }

    /// Seconds the current game has been running (frozen once finished).
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        let now = self.clock.now_millis();
        self.active.as_ref().map_or(0, |s| s.elapsed_secs(now))
    }

    #[must_use]
    pub fn puzzle(&self) -> Option<&PuzzleSession> {
        match &self.active {
            Some(ActiveSession::Puzzle(s)) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn memory(&self) -> Option<&MemorySession> {
        match &self.active {
            Some(ActiveSession::Memory(s)) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn trivia(&self) -> Option<&TriviaSession> {
        match &self.active {
            Some(ActiveSession::Trivia(s)) => Some(s),
            _ => None,
        }
    }

    /// Slide the puzzle tile at cell `index`.
    pub fn move_tile(&mut self, index: usize) -> Result<Slide, Rejection> {
        let now = self.clock.now_millis();
        let active = self.active_kind();
        let slide = match self.active.as_mut() {
            Some(ActiveSession::Puzzle(s)) => s.slide(index, now)?,
            _ => return Err(Self::mismatch(active, GameKind::Puzzle)),
        };
        self.record_completion(slide.completion.as_ref());
        Ok(slide)
    }

    /// Turn up the memory card at `index`.
    pub fn flip_card(&mut self, index: usize) -> Result<Flip, Rejection> {
        let now = self.clock.now_millis();
        let active = self.active_kind();
        let flip = match self.active.as_mut() {
            Some(ActiveSession::Memory(s)) => s.flip(index, now)?,
            _ => return Err(Self::mismatch(active, GameKind::Memory)),
        };
        if let Flip::Matched { completion, .. } = &flip {
            self.record_completion(completion.as_ref());
        }
        Ok(flip)
    }

    /// Answer the current trivia question.
    pub fn answer(&mut self, option: usize) -> Result<Answer, Rejection> {
        let active = self.active_kind();
        let answer = match self.active.as_mut() {
            Some(ActiveSession::Trivia(s)) => s.answer(option)?,
            _ => return Err(Self::mismatch(active, GameKind::Trivia)),
        };
        self.record_completion(answer.completion.as_ref());
        Ok(answer)
    }

    /// One-second timer tick. Only trivia reacts; other games ignore it.
    pub fn tick(&mut self) -> Option<Answer> {
        let answer = match self.active.as_mut() {
            Some(ActiveSession::Trivia(s)) => s.tick()?,
            _ => return None,
        };
        self.record_completion(answer.completion.as_ref());
        Some(answer)
    }

    /// Take the completion event of the current session, once.
    pub fn take_completion(&mut self) -> Option<SessionComplete> {
        self.completion.take()
    }

    /// Build a score record for `completion` with a fresh id and timestamp.
    ///
    /// Fails if `player_name` is blank.
    pub fn make_record(
        &mut self,
        completion: SessionComplete,
        player_name: &str,
    ) -> Result<ScoreRecord, ScoreError> {
        let id = self.rng.gen_id();
        completion.into_record(player_name, id, self.clock.now_millis())
    }

    fn record_completion(&mut self, completion: Option<&SessionComplete>) {
        if let Some(done) = completion {
            self.completion = Some(done.clone());
        }
    }

    fn mismatch(active: Option<GameKind>, requested: GameKind) -> Rejection {
        match active {
            Some(active) => Rejection::WrongGame { active, requested },
            None => Rejection::NoSession,
        }
    }
}
