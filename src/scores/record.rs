//! Score records.
//!
//! A record is created once, when a player saves a finished game, and never
//! changes afterwards. Its serialized form is the persisted layout:
//!
//! ```json
//! {"id":"k3j9x0a1b","playerName":"Ada","score":3090,"gameType":"puzzle","timestamp":1700000000000}
//! ```

use serde::{Deserialize, Serialize};

use crate::core::GameKind;
use crate::error::ScoreError;

/// One saved game result.
///
/// Deserializing goes through [`ScoreRecord::new`], so a stored record with
/// a blank player name is rejected like a fresh one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredRecord")]
pub struct ScoreRecord {
    id: String,
    player_name: String,
    score: u64,
    game_type: GameKind,
    timestamp: u64,
}

impl ScoreRecord {
    /// Create a record, trimming the player name.
    ///
    /// Fails if the name is empty after trimming.
    pub fn new(
        id: impl Into<String>,
        player_name: &str,
        score: u64,
        game_type: GameKind,
        timestamp: u64,
    ) -> Result<Self, ScoreError> {
        let player_name = player_name.trim();
        if player_name.is_empty() {
            return Err(ScoreError::EmptyPlayerName);
        }

        Ok(Self {
            id: id.into(),
            player_name: player_name.to_string(),
            score,
            game_type,
            timestamp,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn game_type(&self) -> GameKind {
        self.game_type
    }

    /// Creation time in milliseconds since the Unix epoch.
    #[must_use]
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

/// Persisted layout, before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    id: String,
    player_name: String,
    score: u64,
    game_type: GameKind,
    timestamp: u64,
}

impl TryFrom<StoredRecord> for ScoreRecord {
    type Error = ScoreError;

    fn try_from(raw: StoredRecord) -> Result<Self, Self::Error> {
        ScoreRecord::new(raw.id, &raw.player_name, raw.score, raw.game_type, raw.timestamp)
    }
}

/// Message a player can share after finishing a game.
#[must_use]
pub fn share_text(score: u64, kind: GameKind) -> String {
    format!("I just scored {} points in the {} game! Can you beat my score?", score, kind)
}
