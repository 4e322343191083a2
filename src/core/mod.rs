//! Core hub types: game categories, RNG, clock, configuration.
//!
//! Everything here is shared by the puzzle engine, the sessions and the
//! score store.

pub mod category;
pub mod clock;
pub mod config;
pub mod rng;

pub use category::{CategoryMap, GameKind};
pub use clock::{elapsed_secs, Clock, ManualClock, SystemClock};
pub use config::{
    HubConfig, MemoryConfig, PuzzleConfig, StoreConfig, TriviaConfig, DEFAULT_SYMBOLS,
    MIN_SHUFFLE_MOVES,
};
pub use rng::GameRng;
