//! Score persistence and leaderboards.
//!
//! - `record`: immutable `ScoreRecord` and its persisted JSON layout
//! - `storage`: `KeyValueStorage` backends (memory, file)
//! - `store`: `ScoreStore`, ranked and capped per game category

pub mod record;
pub mod storage;
pub mod store;

pub use record::{share_text, ScoreRecord};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::ScoreStore;
