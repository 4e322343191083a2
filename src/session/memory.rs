//! Memory (pair matching) session.
//!
//! Every symbol appears on two cards, dealt in random order. Turning up a
//! second card resolves the pair at once: a match stays face up, a
//! mismatch turns both cards back down. Each resolved pair costs one move.

use tracing::{debug, info};

use super::{GameSession, Rejection, SessionComplete, SessionStatus, Summary};
use crate::core::{elapsed_secs, GameKind, GameRng, MemoryConfig};

/// Points per matched pair.
pub const POINTS_PER_MATCH: u64 = 100;

/// Seconds after which the time bonus is gone (one point per second).
pub const TIME_BONUS_SECS: u64 = 300;

/// Moves after which the move bonus is gone (one point per move).
pub const MOVE_BONUS_MOVES: u64 = 50;

/// Final memory score: `matches*100 + max(0, 300 - secs) + max(0, 50 - moves)`.
#[must_use]
pub fn memory_score(matches: u32, moves: u32, elapsed_secs: u64) -> u64 {
    u64::from(matches) * POINTS_PER_MATCH
        + TIME_BONUS_SECS.saturating_sub(elapsed_secs)
        + MOVE_BONUS_MOVES.saturating_sub(u64::from(moves))
}

/// A card on the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub symbol: String,
    pub face_up: bool,
    pub matched: bool,
}

/// Result of an accepted flip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Flip {
    /// First card of a pair turned up.
    Revealed { index: usize },
    /// Second card matched the first; both stay up.
    Matched {
        first: usize,
        second: usize,
        completion: Option<SessionComplete>,
    },
    /// Second card did not match; both are face down again.
    Mismatched { first: usize, second: usize },
}

/// One attempt at the memory game.
#[derive(Clone, Debug)]
pub struct MemorySession {
    cards: Vec<Card>,
    pending: Option<usize>,
    moves: u32,
    matches: u32,
    started_at: u64,
    completion: Option<SessionComplete>,
}

impl MemorySession {
    /// Deal a shuffled table at time `now_millis`.
    pub fn start(config: &MemoryConfig, rng: &mut GameRng, now_millis: u64) -> Self {
        let deck = config.deck_symbols();
        let mut symbols: Vec<&String> = deck.iter().chain(deck.iter()).collect();
        rng.shuffle(&mut symbols);

        let cards = symbols
            .into_iter()
            .map(|symbol| Card {
                symbol: symbol.clone(),
                face_up: false,
                matched: false,
            })
            .collect::<Vec<_>>();
        debug!(cards = cards.len(), "memory session started");

        Self {
            cards,
            pending: None,
            moves: 0,
            matches: 0,
            started_at: now_millis,
            completion: None,
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Resolved pairs so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn matches(&self) -> u32 {
        self.matches
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Turn up the card at `index`.
    pub fn flip(&mut self, index: usize, now_millis: u64) -> Result<Flip, Rejection> {
        if self.completion.is_some() {
            return Err(Rejection::Finished);
        }
        let card = self.cards.get(index).ok_or(Rejection::OutOfRange(index))?;
        if card.face_up || card.matched {
            return Err(Rejection::CardFaceUp(index));
        }

        self.cards[index].face_up = true;

        let Some(first) = self.pending.take() else {
            self.pending = Some(index);
            return Ok(Flip::Revealed { index });
        };

        self.moves += 1;
        if self.cards[first].symbol != self.cards[index].symbol {
            self.cards[first].face_up = false;
            self.cards[index].face_up = false;
            debug!(first, second = index, moves = self.moves, "no match");
            return Ok(Flip::Mismatched { first, second: index });
        }

        self.cards[first].matched = true;
        self.cards[index].matched = true;
        self.matches += 1;
        debug!(first, second = index, matches = self.matches, "pair matched");

        if self.matches as usize == self.pair_count() {
            let elapsed = elapsed_secs(self.started_at, now_millis);
            let done = SessionComplete {
                kind: GameKind::Memory,
                score: memory_score(self.matches, self.moves, elapsed),
                summary: Summary::Memory {
                    moves: self.moves,
                    matches: self.matches,
                    elapsed_secs: elapsed,
                },
            };
            info!(
                moves = self.moves,
                elapsed_secs = elapsed,
                score = done.score,
                "memory game complete"
            );
            self.completion = Some(done);
        }

        Ok(Flip::Matched {
            first,
            second: index,
            completion: self.completion.clone(),
        })
    }
}

impl GameSession for MemorySession {
    fn kind(&self) -> GameKind {
        GameKind::Memory
    }

    fn status(&self) -> SessionStatus {
        if self.completion.is_some() {
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
                summary: Summary::Memory { elapsed_secs, .. },
                ..
            }) => *elapsed_secs,
            _ => elapsed_secs(self.started_at, now_millis),
        }
    }
}
