//! Benchmark for simulation performance
//!
//! Measures single-day resolution and whole autoplayed games from early
//! childhood to the ending.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use raising_kids::event::select_event;
use raising_kids::simulator::RandomDecider;
use raising_kids::{advance_day, Engine, EngineSettings, EventCatalog, GameState};

fn bench_advance_day(c: &mut Criterion) {
    let catalog = EventCatalog::builtin().expect("builtin catalog");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("advance_day", |b| {
        b.iter(|| {
            let mut state = GameState::new("Bench", 5, "Parent");
            let event = select_event(catalog, &mut rng);
            black_box(advance_day(&mut state, event, black_box("2"), &mut rng))
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    let catalog = EventCatalog::builtin().expect("builtin catalog");
    let mut group = c.benchmark_group("full_game");

    for start_age in [0, 8, 15] {
        group.bench_with_input(
            BenchmarkId::from_parameter(start_age),
            &start_age,
            |b, &start_age| {
                let mut seed = 0u64;
                b.iter(|| {
                    seed += 1;
                    let mut state = GameState::new("Bench", start_age, "Parent");
                    let decider = RandomDecider::new(ChaCha8Rng::seed_from_u64(!seed));
                    let settings = EngineSettings::headless(seed);
                    let mut engine = Engine::new(catalog, settings.rng(), decider, std::io::sink())
                        .with_pacing(settings.pacing);
                    black_box(engine.run(&mut state).expect("game runs"))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_advance_day, bench_full_game);
criterion_main!(benches);
