//! Benchmarks for puzzle shuffling and score ranking.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use game_hub::core::{GameKind, GameRng, PuzzleConfig, StoreConfig};
use game_hub::puzzle::shuffle;
use game_hub::scores::{MemoryStorage, ScoreRecord, ScoreStore};

/// Benchmark one default-length shuffle.
fn bench_shuffle(c: &mut Criterion) {
    let config = PuzzleConfig::default();
    let mut rng = GameRng::new(42);

    c.bench_function("shuffle_1000", |b| b.iter(|| shuffle(black_box(&config), &mut rng)));
}

/// Benchmark submitting into a full category.
fn bench_submit_full(c: &mut Criterion) {
    let mut store = ScoreStore::load(MemoryStorage::new(), StoreConfig::default());
    for i in 0..10u64 {
        if let Ok(record) = ScoreRecord::new(i.to_string(), "seed", i * 100, GameKind::Puzzle, 0) {
            let _ = store.submit(record);
        }
    }

    c.bench_function("submit_full_category", |b| {
        b.iter(|| {
            let score = black_box(550);
            if let Ok(record) = ScoreRecord::new("x", "bench", score, GameKind::Puzzle, 0) {
                let _ = store.submit(record);
            }
        })
    });
}

criterion_group!(benches, bench_shuffle, bench_submit_full);
criterion_main!(benches);
