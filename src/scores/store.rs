//! Persistent, ranked score lists.
//!
//! ## Invariants
//!
//! - Each category holds at most `StoreConfig::kept_per_category` records
//!   (10 by default, never fewer than 1).
//! - Each category is sorted by score, highest first, after every mutation.
//! - Categories are independent: submitting to one never touches another.
//!
//! Records with equal scores keep their relative order (older first), but
//! callers should treat tie order as unspecified.
//!
//! ## Persistence
//!
//! The whole store is one JSON array stored under `StoreConfig::storage_key`.
//! Loading never fails: a missing key, unreadable storage or a value that is
//! not a JSON array gives an empty store, and individual malformed entries
//! are skipped.

use serde_json::Value;
use tracing::{debug, info, warn};

use super::record::ScoreRecord;
use super::storage::KeyValueStorage;
use crate::core::{CategoryMap, GameKind, StoreConfig};
use crate::error::StoreError;

/// Ranked score lists backed by key-value storage.
#[derive(Debug)]
pub struct ScoreStore<S: KeyValueStorage> {
    storage: S,
    config: StoreConfig,
    scores: CategoryMap<Vec<ScoreRecord>>,
}

impl<S: KeyValueStorage> ScoreStore<S> {
    /// Load the store from `storage`.
    pub fn load(storage: S, config: StoreConfig) -> Self {
        let raw = match storage.get(&config.storage_key) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    key = %config.storage_key,
                    error = %e,
                    "could not read scores, starting empty"
                );
                None
            }
        };

        let mut scores: CategoryMap<Vec<ScoreRecord>> = CategoryMap::default();
        for record in raw.as_deref().map(decode).unwrap_or_default() {
            scores[record.game_type()].push(record);
        }
        for (_, list) in scores.iter_mut() {
            rank(list, config.kept_per_category());
        }

        debug!(
            memory = scores[GameKind::Memory].len(),
            trivia = scores[GameKind::Trivia].len(),
            puzzle = scores[GameKind::Puzzle].len(),
            "score store loaded"
        );

        Self {
            storage,
            config,
            scores,
        }
    }

    /// Add a record to its category, re-rank, trim and persist.
    ///
    /// The in-memory store is updated even if persisting fails.
    pub fn submit(&mut self, record: ScoreRecord) -> Result<(), StoreError> {
        let kind = record.game_type();
        info!(
            game = %kind,
            player = record.player_name(),
            score = record.score(),
            "score submitted"
        );

        let list = &mut self.scores[kind];
        list.push(record);
        rank(list, self.config.kept_per_category());

        self.save()
    }

    /// Highest scores for `category`, or across all categories if `None`.
    ///
    /// At most `kept_per_category` records, highest first.
    #[must_use]
    pub fn top_scores(&self, category: Option<GameKind>) -> Vec<ScoreRecord> {
        match category {
            Some(kind) => self.scores[kind].clone(),
            None => {
                let mut all: Vec<ScoreRecord> =
                    self.scores.iter().flat_map(|(_, list)| list.iter().cloned()).collect();
                rank(&mut all, self.config.kept_per_category());
                all
            }
        }
    }

    /// Stored records for one category, highest first.
    #[must_use]
    pub fn scores(&self, kind: GameKind) -> &[ScoreRecord] {
        &self.scores[kind]
    }

    /// Number of stored records for one category.
    #[must_use]
    pub fn count(&self, kind: GameKind) -> usize {
        self.scores[kind].len()
    }

    /// Total stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.iter().map(|(_, list)| list.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn save(&mut self) -> Result<(), StoreError> {
        let all: Vec<&ScoreRecord> = self.scores.iter().flat_map(|(_, list)| list.iter()).collect();
        let json = serde_json::to_string(&all)?;
        self.storage.set(&self.config.storage_key, &json)
    }
}

/// Sort highest first (stable) and keep the first `capacity`.
fn rank(list: &mut Vec<ScoreRecord>, capacity: usize) {
    list.sort_by(|a, b| b.score().cmp(&a.score()));
    list.truncate(capacity);
}

/// Parse a persisted score list, skipping anything malformed.
fn decode(raw: &str) -> Vec<ScoreRecord> {
    let entries: Vec<Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(error = %e, "stored scores are not a JSON array, ignoring them");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value::<ScoreRecord>(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index = i, error = %e, "skipping malformed score entry");
                None
            }
        })
        .collect()
}
